pub mod aggregate;

pub use aggregate::{
    CheckResult, ChecklistExecution, ChecklistExecutionDto, ChecklistExecutionId, ChecklistItem,
};
