pub mod list;
pub mod model;
pub mod runner;
