use super::mapping;
use super::parser::{parse_csv, CsvRow};
use crate::domain::{a001_asset, a002_material, a003_partner, a004_warehouse, a006_maintenance_routine};
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::usecases::u502_csv_import::{ImportCollection, ImportResult};
use std::future::Future;

/// Импорт CSV в коллекцию.
///
/// Каждая строка создаёт запись через обычный путь создания. Строки без
/// кода пропускаются; ошибки отдельных строк считаются и не прерывают импорт.
pub async fn import(collection: ImportCollection, content: &str) -> ServiceResult<ImportResult> {
    let rows = parse_csv(content).map_err(|e| ServiceError::Validation(e.to_string()))?;
    tracing::info!(
        "CSV import into {}: {} rows",
        collection.code(),
        rows.len()
    );

    let result = import_rows(&rows, |row, code| import_row(collection, row, code)).await;

    tracing::info!(
        "CSV import into {} finished: {} created, {} skipped, {} failed",
        collection.code(),
        result.created,
        result.skipped,
        result.failed
    );
    Ok(result)
}

/// Проход по строкам: строка без кода пропускается, ошибка строки
/// записывается в результат, и импорт идёт дальше.
pub async fn import_rows<'a, F, Fut>(rows: &'a [CsvRow], mut create: F) -> ImportResult
where
    F: FnMut(&'a CsvRow, String) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let mut result = ImportResult::default();
    for row in rows {
        let Some(code) = row.get("code").map(str::to_string) else {
            result.skipped += 1;
            continue;
        };
        match create(row, code.clone()).await {
            Ok(()) => result.created += 1,
            Err(message) => {
                tracing::warn!("CSV import row {} ({}): {}", row.line, code, message);
                result.record_failure(row.line, format!("{}: {}", code, message));
            }
        }
    }
    result
}

async fn import_row(collection: ImportCollection, row: &CsvRow, code: String) -> Result<(), String> {
    let code = code.as_str();
    match collection {
        ImportCollection::Asset => {
            ensure_new(a001_asset::service::get_by_code(code).await.map(|r| r.is_some()))?;
            let dto = mapping::asset_from_row(row, code)?;
            a001_asset::service::create(dto).await.map_err(|e| e.to_string())?;
        }
        ImportCollection::Material => {
            ensure_new(a002_material::service::get_by_code(code).await.map(|r| r.is_some()))?;
            let dto = mapping::material_from_row(row, code)?;
            a002_material::service::create(dto).await.map_err(|e| e.to_string())?;
        }
        ImportCollection::Partner => {
            ensure_new(a003_partner::service::get_by_code(code).await.map(|r| r.is_some()))?;
            let dto = mapping::partner_from_row(row, code)?;
            a003_partner::service::create(dto).await.map_err(|e| e.to_string())?;
        }
        ImportCollection::Warehouse => {
            ensure_new(a004_warehouse::service::get_by_code(code).await.map(|r| r.is_some()))?;
            let dto = mapping::warehouse_from_row(row, code)?;
            a004_warehouse::service::create(dto).await.map_err(|e| e.to_string())?;
        }
        ImportCollection::MaintenanceRoutine => {
            ensure_new(
                a006_maintenance_routine::service::get_by_code(code)
                    .await
                    .map(|r| r.is_some()),
            )?;
            let asset_code = row
                .get("asset_code")
                .ok_or_else(|| "asset_code: не заполнено".to_string())?;
            let asset = a001_asset::service::get_by_code(asset_code)
                .await
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("актив с кодом {} не найден", asset_code))?;
            let dto = mapping::routine_from_row(row, code, asset.to_string_id())?;
            a006_maintenance_routine::service::create(dto)
                .await
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

/// Повторный импорт не создаёт дубликат кода
fn ensure_new(exists: ServiceResult<bool>) -> Result<(), String> {
    match exists {
        Ok(false) => Ok(()),
        Ok(true) => Err("запись с таким кодом уже существует".into()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "code;description\nA-1;Насос\n;Без кода\nBAD;Сломанная строка\nA-2;Компрессор\n";

    #[tokio::test]
    async fn test_import_rows_counts_and_continues() {
        let rows = parse_csv(FILE).unwrap();
        let mut seen = Vec::new();
        let result = import_rows(&rows, |_, code| {
            seen.push(code.clone());
            async move {
                if code == "BAD" {
                    Err("ошибка записи".to_string())
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(result.created, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total_rows(), 4);
        assert_eq!(seen, vec!["A-1", "BAD", "A-2"]);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("BAD"));
    }

    #[tokio::test]
    async fn test_import_rows_without_codes_creates_nothing() {
        let rows = parse_csv("code,description\n,Пусто\n  ,Пробелы\n").unwrap();
        let result = import_rows(&rows, |_, _| async { Ok(()) }).await;
        assert_eq!(result.created, 0);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.failed, 0);
    }
}
