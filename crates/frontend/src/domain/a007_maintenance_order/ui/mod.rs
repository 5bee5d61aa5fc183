pub mod calendar;
pub mod details;
pub mod kanban;
pub mod list;
pub mod summary;
