pub mod u501_preventive_planning;
pub mod u502_csv_import;
