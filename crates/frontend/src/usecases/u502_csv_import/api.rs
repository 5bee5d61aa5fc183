use crate::shared::api_utils;
use contracts::usecases::u502_csv_import::{ImportCollection, ImportRequest, ImportResult};

pub async fn import_csv(
    collection: ImportCollection,
    file_name: String,
    content: String,
) -> Result<ImportResult, String> {
    api_utils::post_json(
        &format!("/api/import/{}", collection.code()),
        &ImportRequest { file_name, content },
    )
    .await
}
