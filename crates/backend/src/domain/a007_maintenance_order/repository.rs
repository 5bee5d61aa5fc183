use chrono::Utc;
use contracts::domain::a007_maintenance_order::aggregate::{
    MaintenanceOrder, MaintenanceOrderId, OrderMaterialLine,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{OrderStatus, OrderType, Priority};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_maintenance_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Номер заказа (OT-000001)
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub asset_id: String,
    pub order_type: String,
    pub status: String,
    pub priority: String,
    pub created_date: chrono::NaiveDate,
    pub planned_date: Option<chrono::NaiveDate>,
    pub started_at: Option<chrono::NaiveDate>,
    pub closed_date: Option<chrono::NaiveDate>,
    pub assigned_to: String,
    pub estimated_hours: f64,
    /// Строки материалов, JSON-массив OrderMaterialLine
    pub materials_json: String,
    pub work_notes: String,
    pub routine_id: Option<String>,
    pub related_order_id: Option<String>,
    pub checklist_execution_id: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MaintenanceOrder {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let materials: Vec<OrderMaterialLine> = match serde_json::from_str(&m.materials_json) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("Order {}: cannot parse materials_json: {}", m.code, e);
                Vec::new()
            }
        };

        MaintenanceOrder {
            base: BaseAggregate::with_metadata(
                MaintenanceOrderId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            asset_id: m.asset_id,
            order_type: OrderType::from_code(&m.order_type).unwrap_or_default(),
            status: OrderStatus::from_code(&m.status).unwrap_or_default(),
            priority: Priority::from_code(&m.priority).unwrap_or_default(),
            created_date: m.created_date,
            planned_date: m.planned_date,
            started_at: m.started_at,
            closed_date: m.closed_date,
            assigned_to: m.assigned_to,
            estimated_hours: m.estimated_hours,
            materials,
            work_notes: m.work_notes,
            routine_id: m.routine_id,
            related_order_id: m.related_order_id,
            checklist_execution_id: m.checklist_execution_id,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &MaintenanceOrder) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        asset_id: Set(aggregate.asset_id.clone()),
        order_type: Set(aggregate.order_type.code().to_string()),
        status: Set(aggregate.status.code().to_string()),
        priority: Set(aggregate.priority.code().to_string()),
        created_date: Set(aggregate.created_date),
        planned_date: Set(aggregate.planned_date),
        started_at: Set(aggregate.started_at),
        closed_date: Set(aggregate.closed_date),
        assigned_to: Set(aggregate.assigned_to.clone()),
        estimated_hours: Set(aggregate.estimated_hours),
        materials_json: Set(serde_json::to_string(&aggregate.materials)?),
        work_notes: Set(aggregate.work_notes.clone()),
        routine_id: Set(aggregate.routine_id.clone()),
        related_order_id: Set(aggregate.related_order_id.clone()),
        checklist_execution_id: Set(aggregate.checklist_execution_id.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<MaintenanceOrder>> {
    let mut items: Vec<MaintenanceOrder> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.base.code.cmp(&b.base.code));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MaintenanceOrder>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Все выданные номера, включая удалённые заказы
pub async fn list_numbers() -> anyhow::Result<Vec<String>> {
    let numbers: Vec<String> = Entity::find()
        .select_only()
        .column(Column::Code)
        .into_tuple()
        .all(conn())
        .await?;
    Ok(numbers)
}

pub async fn insert(aggregate: &MaintenanceOrder) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &MaintenanceOrder) -> anyhow::Result<()> {
    let mut active = to_active(aggregate)?;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
