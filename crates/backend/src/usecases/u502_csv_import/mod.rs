pub mod executor;
pub mod mapping;
pub mod parser;
