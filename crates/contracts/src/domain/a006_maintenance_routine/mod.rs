pub mod aggregate;

pub use aggregate::{Discipline, MaintenanceRoutine, MaintenanceRoutineDto, MaintenanceRoutineId};
