pub mod calculator;
pub mod request;
pub mod response;

pub use calculator::{compute_due_routines, generate_orders, DueRoutine, DEFAULT_HORIZON_DAYS};
pub use request::{DueRoutinesQuery, GenerateOrdersRequest};
pub use response::GenerateOrdersResponse;
