pub mod request;
pub mod response;

pub use request::{ImportCollection, ImportRequest};
pub use response::ImportResult;
