pub mod error_box;
pub mod table_checkbox;
pub mod ui;
