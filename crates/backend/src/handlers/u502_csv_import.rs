use axum::{extract::Path, Json};

use contracts::usecases::u502_csv_import::{ImportCollection, ImportRequest, ImportResult};

use crate::shared::error::ServiceError;
use crate::usecases::u502_csv_import::executor;

/// POST /api/import/:collection
pub async fn import(
    Path(collection): Path<String>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportResult>, ServiceError> {
    let collection = ImportCollection::from_code(&collection).ok_or_else(|| {
        ServiceError::Validation(format!("Импорт не поддерживается: {}", collection))
    })?;
    tracing::info!(
        "Import request: {} ({} bytes) into {}",
        request.file_name,
        request.content.len(),
        collection.code()
    );
    Ok(Json(executor::import(collection, &request.content).await?))
}
