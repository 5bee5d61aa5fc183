pub mod aggregate;
pub mod views;

pub use aggregate::{
    MaintenanceOrder, MaintenanceOrderDto, MaintenanceOrderId, OrderMaterialLine,
    AddMaterialRequest, StatusChangeRequest,
};
pub use views::{
    asset_history, count_by_status, filter_orders, group_by_day, group_by_status, OrderFilter,
    StatusColumn,
};
