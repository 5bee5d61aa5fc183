pub mod a001_asset;
pub mod a002_material;
pub mod a003_partner;
pub mod a004_warehouse;
pub mod a005_contract;
pub mod a006_maintenance_routine;
pub mod a007_maintenance_order;
pub mod a008_checklist_execution;
