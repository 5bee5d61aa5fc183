//! Печатная форма документа в виде самодостаточной HTML-страницы.
//! PDF получается через диалог печати браузера.
use contracts::shared::report::DocumentReport;
use std::fmt::Write;

const PRINT_CSS: &str = r#"
body { font-family: "Segoe UI", Arial, sans-serif; font-size: 12px; margin: 24px; color: #111; }
.company { font-size: 11px; color: #555; text-transform: uppercase; }
h1 { font-size: 18px; margin: 6px 0 16px; }
table.fields td { padding: 2px 12px 2px 0; vertical-align: top; }
table.fields td.label { color: #555; white-space: nowrap; }
table.items { border-collapse: collapse; width: 100%; margin-top: 16px; }
table.items th, table.items td { border: 1px solid #999; padding: 4px 6px; }
table.items th { background: #eee; }
table.items tfoot td { font-weight: bold; }
.notes { margin-top: 16px; white-space: pre-wrap; }
.signatures { margin-top: 40px; display: flex; gap: 32px; flex-wrap: wrap; }
.signature { flex: 1; min-width: 180px; }
.signature .line { border-bottom: 1px solid #111; height: 28px; }
.signature .caption { font-size: 10px; color: #555; }
@media print { .no-print { display: none; } body { margin: 0; } }
"#;

fn esc(value: &str) -> String {
    ammonia::clean_text(value)
}

/// Рендер отчёта в HTML. Все значения экранируются.
pub fn render_document(report: &DocumentReport) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"ru\"><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>",
        esc(&report.title),
        PRINT_CSS
    );
    html.push_str(
        "<div class=\"no-print\"><button onclick=\"window.print()\">Печать / PDF</button></div>",
    );
    let _ = write!(
        html,
        "<div class=\"company\">{}</div><h1>{}</h1>",
        esc(&report.company_name),
        esc(&report.title)
    );

    html.push_str("<table class=\"fields\">");
    for field in &report.header_fields {
        let _ = write!(
            html,
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            esc(&field.label),
            esc(&field.value)
        );
    }
    html.push_str("</table>");

    let table = &report.table;
    html.push_str("<table class=\"items\"><thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", esc(column));
    }
    html.push_str("</tr></thead><tbody>");
    if table.rows.is_empty() {
        let _ = write!(
            html,
            "<tr><td colspan=\"{}\">Нет строк</td></tr>",
            table.columns.len().max(1)
        );
    }
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", esc(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");
    if let Some(footer) = &table.footer {
        html.push_str("<tfoot><tr>");
        for cell in footer {
            let _ = write!(html, "<td>{}</td>", esc(cell));
        }
        html.push_str("</tr></tfoot>");
    }
    html.push_str("</table>");

    if let Some(notes) = &report.notes {
        let _ = write!(html, "<div class=\"notes\">{}</div>", esc(notes));
    }

    html.push_str("<div class=\"signatures\">");
    for caption in &report.signatures {
        let _ = write!(
            html,
            "<div class=\"signature\"><div class=\"line\"></div><div class=\"caption\">{}</div></div>",
            esc(caption)
        );
    }
    html.push_str("</div></body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report::{ReportField, ReportTable};

    fn report() -> DocumentReport {
        DocumentReport {
            company_name: "Завод".into(),
            title: "Заказ на обслуживание № OT-000001".into(),
            header_fields: vec![ReportField {
                label: "Описание".into(),
                value: "<script>alert(1)</script>".into(),
            }],
            table: ReportTable {
                columns: vec!["№".into(), "Материал".into()],
                rows: vec![vec!["1".into(), "Подшипник".into()]],
                footer: Some(vec!["".into(), "Итого".into()]),
            },
            notes: Some("Работы выполнены".into()),
            signatures: vec!["Исполнитель".into(), "Принял".into()],
        }
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_document(&report());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_sections_rendered() {
        let html = render_document(&report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<th>Материал</th>"));
        assert!(html.contains("<tfoot>"));
        assert!(html.contains("class=\"notes\""));
        assert_eq!(html.matches("class=\"signature\"").count(), 2);
    }

    #[test]
    fn test_empty_table_placeholder() {
        let mut r = report();
        r.table.rows.clear();
        r.table.footer = None;
        r.notes = None;
        let html = render_document(&r);
        assert!(html.contains("colspan=\"2\""));
        assert!(!html.contains("<tfoot>"));
        assert!(!html.contains("class=\"notes\""));
    }
}
