use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Колонки, общие для всех коллекций (BaseAggregate + EntityMetadata)
const BASE_COLUMNS: &str = r#"
    id TEXT PRIMARY KEY NOT NULL,
    code TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL,
    comment TEXT,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

/// Таблицы коллекций: имя и собственные колонки агрегата
const COLLECTION_TABLES: &[(&str, &str)] = &[
    (
        "a001_asset",
        r#"
        location TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        manufacturer TEXT NOT NULL DEFAULT '',
        model TEXT NOT NULL DEFAULT '',
        serial_number TEXT NOT NULL DEFAULT '',
        criticality TEXT NOT NULL DEFAULT 'medium',
        status TEXT NOT NULL DEFAULT 'operational'
        "#,
    ),
    (
        "a002_material",
        r#"
        unit TEXT NOT NULL DEFAULT '',
        stock_quantity REAL NOT NULL DEFAULT 0,
        min_stock REAL NOT NULL DEFAULT 0,
        unit_cost REAL NOT NULL DEFAULT 0,
        warehouse_id TEXT
        "#,
    ),
    (
        "a003_partner",
        r#"
        kind TEXT NOT NULL DEFAULT 'supplier',
        tax_id TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        phone TEXT NOT NULL DEFAULT '',
        address TEXT NOT NULL DEFAULT ''
        "#,
    ),
    (
        "a004_warehouse",
        r#"
        location TEXT NOT NULL DEFAULT ''
        "#,
    ),
    (
        "a005_contract",
        r#"
        partner_id TEXT NOT NULL,
        asset_id TEXT,
        start_date TEXT,
        end_date TEXT,
        amount REAL NOT NULL DEFAULT 0
        "#,
    ),
    (
        "a006_maintenance_routine",
        r#"
        asset_id TEXT NOT NULL,
        frequency_days INTEGER NOT NULL,
        last_execution_date TEXT,
        estimated_hours REAL NOT NULL DEFAULT 0,
        discipline TEXT NOT NULL DEFAULT 'mechanical',
        checklist_items_json TEXT NOT NULL DEFAULT '[]'
        "#,
    ),
    (
        "a007_maintenance_order",
        r#"
        asset_id TEXT NOT NULL,
        order_type TEXT NOT NULL,
        status TEXT NOT NULL,
        priority TEXT NOT NULL,
        created_date TEXT NOT NULL,
        planned_date TEXT,
        started_at TEXT,
        closed_date TEXT,
        assigned_to TEXT NOT NULL DEFAULT '',
        estimated_hours REAL NOT NULL DEFAULT 0,
        materials_json TEXT NOT NULL DEFAULT '[]',
        work_notes TEXT NOT NULL DEFAULT '',
        routine_id TEXT,
        related_order_id TEXT,
        checklist_execution_id TEXT
        "#,
    ),
    (
        "a008_checklist_execution",
        r#"
        asset_id TEXT NOT NULL,
        routine_id TEXT,
        inspector TEXT NOT NULL DEFAULT '',
        execution_date TEXT,
        items_json TEXT NOT NULL DEFAULT '[]',
        corrective_order_id TEXT
        "#,
    ),
];

const SYS_SETTINGS_TABLE: &str = r#"
    CREATE TABLE sys_settings (
        settings_key TEXT PRIMARY KEY NOT NULL,
        settings_json TEXT NOT NULL,
        updated_at TEXT
    );
"#;

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/maintenance.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (table, columns) in COLLECTION_TABLES {
        let ddl = format!(
            "CREATE TABLE {} ({},{});",
            table,
            BASE_COLUMNS.trim_end(),
            columns.trim_end()
        );
        ensure_table(&conn, table, &ddl).await?;
    }
    ensure_table(&conn, "sys_settings", SYS_SETTINGS_TABLE).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Создаёт таблицу, если её ещё нет в sqlite_master
async fn ensure_table(conn: &DatabaseConnection, table: &str, ddl: &str) -> anyhow::Result<()> {
    let existing = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            vec![table.into()],
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
