pub mod date;
pub mod report;
