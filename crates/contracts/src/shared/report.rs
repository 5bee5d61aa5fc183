//! Печатная форма документа фиксированной разметки: заголовок, поля шапки,
//! табличная часть и строки подписей. Заполняется из заказа или осмотра.

use crate::domain::a007_maintenance_order::MaintenanceOrder;
use crate::domain::a008_checklist_execution::ChecklistExecution;
use crate::shared::date::display_opt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Итоговая строка (если есть)
    pub footer: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub company_name: String,
    pub title: String,
    pub header_fields: Vec<ReportField>,
    pub table: ReportTable,
    pub notes: Option<String>,
    pub signatures: Vec<String>,
}

fn field(label: &str, value: impl Into<String>) -> ReportField {
    ReportField {
        label: label.to_string(),
        value: value.into(),
    }
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
            .trim_end_matches('0')
            .to_string()
    }
}

/// Печатная форма заказа на обслуживание
pub fn order_report(order: &MaintenanceOrder, asset_name: &str, company_name: &str) -> DocumentReport {
    let rows: Vec<Vec<String>> = order
        .materials
        .iter()
        .enumerate()
        .map(|(i, line)| {
            vec![
                (i + 1).to_string(),
                line.material_code.clone(),
                line.description.clone(),
                quantity(line.quantity),
                money(line.unit_cost),
                money(line.line_total()),
            ]
        })
        .collect();

    let notes = if order.work_notes.trim().is_empty() {
        None
    } else {
        Some(order.work_notes.clone())
    };

    DocumentReport {
        company_name: company_name.to_string(),
        title: format!("Заказ на обслуживание № {}", order.base.code),
        header_fields: vec![
            field("Актив", asset_name),
            field("Тип", order.order_type.display_name()),
            field("Статус", order.status.display_name()),
            field("Приоритет", order.priority.display_name()),
            field("Описание", order.base.description.clone()),
            field("Исполнитель", order.assigned_to.clone()),
            field("Дата создания", display_opt(Some(order.created_date))),
            field("Плановая дата", display_opt(order.planned_date)),
            field("Начало работ", display_opt(order.started_at)),
            field("Закрыт", display_opt(order.closed_date)),
            field("Трудоёмкость, ч", quantity(order.estimated_hours)),
        ],
        table: ReportTable {
            columns: ["№", "Код", "Материал", "Кол-во", "Цена", "Сумма"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows,
            footer: Some(vec![
                String::new(),
                String::new(),
                "Итого".to_string(),
                String::new(),
                String::new(),
                money(order.materials_total()),
            ]),
        },
        notes,
        signatures: vec![
            "Выдал (мастер)".to_string(),
            "Исполнитель".to_string(),
            "Принял (эксплуатация)".to_string(),
        ],
    }
}

/// Печатная форма осмотра по чек-листу
pub fn checklist_report(
    execution: &ChecklistExecution,
    asset_name: &str,
    company_name: &str,
) -> DocumentReport {
    let rows = execution
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.text.clone(),
                item.result.display_name().to_string(),
                item.observation.clone(),
            ]
        })
        .collect();

    DocumentReport {
        company_name: company_name.to_string(),
        title: format!("Акт осмотра № {}", execution.base.code),
        header_fields: vec![
            field("Актив", asset_name),
            field("Осмотр", execution.base.description.clone()),
            field("Дата", display_opt(execution.execution_date)),
            field("Инспектор", execution.inspector.clone()),
            field("Итог", execution.overall_result().display_name()),
        ],
        table: ReportTable {
            columns: ["№", "Пункт", "Результат", "Замечание"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows,
            footer: None,
        },
        notes: execution.base.comment.clone(),
        signatures: vec!["Инспектор".to_string(), "Ответственный за актив".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_maintenance_order::OrderMaterialLine;
    use crate::domain::a008_checklist_execution::{CheckResult, ChecklistItem};
    use crate::enums::OrderType;
    use chrono::NaiveDate;

    #[test]
    fn test_order_report_layout() {
        let mut order = MaintenanceOrder::new_for_insert(
            "OT-000007".into(),
            "Замена подшипника".into(),
            "a1".into(),
            OrderType::Corrective,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        );
        order
            .add_material_line(OrderMaterialLine {
                material_id: "m1".into(),
                material_code: "MAT-6204".into(),
                description: "Подшипник 6204".into(),
                quantity: 2.0,
                unit_cost: 4.25,
            })
            .unwrap();

        let report = order_report(&order, "Насос Н-1", "ООО Завод");
        assert_eq!(report.title, "Заказ на обслуживание № OT-000007");
        assert_eq!(report.company_name, "ООО Завод");
        assert_eq!(report.header_fields[0].value, "Насос Н-1");
        assert_eq!(report.table.rows.len(), 1);
        assert_eq!(report.table.rows[0][3], "2");
        assert_eq!(report.table.rows[0][5], "8.50");
        assert_eq!(report.table.footer.as_ref().unwrap()[5], "8.50");
        assert_eq!(report.signatures.len(), 3);
        assert!(report.notes.is_none());
    }

    #[test]
    fn test_checklist_report_rows() {
        let mut execution =
            ChecklistExecution::new_for_insert("INS-3".into(), "Осмотр".into(), "a1".into());
        execution.items = vec![ChecklistItem {
            text: "Утечки масла".into(),
            result: CheckResult::Fail,
            observation: "капает с сальника".into(),
        }];
        let report = checklist_report(&execution, "Редуктор", "ООО Завод");
        assert_eq!(report.table.rows[0][2], "Дефект");
        assert_eq!(report.header_fields[4].value, "Дефект");
        assert_eq!(report.signatures.len(), 2);
    }

    #[test]
    fn test_quantity_format() {
        assert_eq!(quantity(3.0), "3");
        assert_eq!(quantity(1.5), "1.5");
        assert_eq!(quantity(0.125), "0.125");
    }
}
