use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // MASTER DATA
        // ========================================
        .route(
            "/api/asset",
            get(handlers::a001_asset::list_all).post(handlers::a001_asset::upsert),
        )
        .route(
            "/api/asset/:id",
            get(handlers::a001_asset::get_by_id).delete(handlers::a001_asset::delete),
        )
        .route(
            "/api/asset/testdata",
            post(handlers::a001_asset::insert_test_data),
        )
        .route(
            "/api/material",
            get(handlers::a002_material::list_all).post(handlers::a002_material::upsert),
        )
        .route(
            "/api/material/:id",
            get(handlers::a002_material::get_by_id).delete(handlers::a002_material::delete),
        )
        .route(
            "/api/material/testdata",
            post(handlers::a002_material::insert_test_data),
        )
        .route(
            "/api/partner",
            get(handlers::a003_partner::list_all).post(handlers::a003_partner::upsert),
        )
        .route(
            "/api/partner/:id",
            get(handlers::a003_partner::get_by_id).delete(handlers::a003_partner::delete),
        )
        .route(
            "/api/partner/testdata",
            post(handlers::a003_partner::insert_test_data),
        )
        .route(
            "/api/warehouse",
            get(handlers::a004_warehouse::list_all).post(handlers::a004_warehouse::upsert),
        )
        .route(
            "/api/warehouse/:id",
            get(handlers::a004_warehouse::get_by_id).delete(handlers::a004_warehouse::delete),
        )
        .route(
            "/api/warehouse/testdata",
            post(handlers::a004_warehouse::insert_test_data),
        )
        .route(
            "/api/contract",
            get(handlers::a005_contract::list_all).post(handlers::a005_contract::upsert),
        )
        .route(
            "/api/contract/:id",
            get(handlers::a005_contract::get_by_id).delete(handlers::a005_contract::delete),
        )
        // ========================================
        // MAINTENANCE
        // ========================================
        .route(
            "/api/maintenance_routine",
            get(handlers::a006_maintenance_routine::list_all)
                .post(handlers::a006_maintenance_routine::upsert),
        )
        .route(
            "/api/maintenance_routine/:id",
            get(handlers::a006_maintenance_routine::get_by_id)
                .delete(handlers::a006_maintenance_routine::delete),
        )
        .route(
            "/api/maintenance_routine/:id/checklist",
            post(handlers::a006_maintenance_routine::start_checklist),
        )
        .route(
            "/api/maintenance_routine/testdata",
            post(handlers::a006_maintenance_routine::insert_test_data),
        )
        .route(
            "/api/maintenance_order",
            get(handlers::a007_maintenance_order::list_all)
                .post(handlers::a007_maintenance_order::upsert),
        )
        .route(
            "/api/maintenance_order/:id",
            get(handlers::a007_maintenance_order::get_by_id)
                .delete(handlers::a007_maintenance_order::delete),
        )
        .route(
            "/api/maintenance_order/:id/status",
            post(handlers::a007_maintenance_order::change_status),
        )
        .route(
            "/api/maintenance_order/:id/materials",
            post(handlers::a007_maintenance_order::add_material),
        )
        .route(
            "/api/maintenance_order/:id/report",
            get(handlers::a007_maintenance_order::report),
        )
        .route(
            "/api/checklist_execution",
            get(handlers::a008_checklist_execution::list_all)
                .post(handlers::a008_checklist_execution::upsert),
        )
        .route(
            "/api/checklist_execution/:id",
            get(handlers::a008_checklist_execution::get_by_id)
                .delete(handlers::a008_checklist_execution::delete),
        )
        .route(
            "/api/checklist_execution/:id/corrective_order",
            post(handlers::a008_checklist_execution::create_corrective_order),
        )
        .route(
            "/api/checklist_execution/:id/report",
            get(handlers::a008_checklist_execution::report),
        )
        // ========================================
        // USECASES
        // ========================================
        .route(
            "/api/planning/due",
            get(handlers::u501_preventive_planning::due),
        )
        .route(
            "/api/planning/generate",
            post(handlers::u501_preventive_planning::generate),
        )
        .route(
            "/api/import/:collection",
            post(handlers::u502_csv_import::import),
        )
        // ========================================
        // SYSTEM
        // ========================================
        .route(
            "/api/settings",
            get(handlers::settings::get).post(handlers::settings::save),
        )
}
