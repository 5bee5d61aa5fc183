use serde::{Deserialize, Serialize};

/// Итог импорта. Строки без кода пропускаются, ошибки записи считаются;
/// уже созданные записи не откатываются.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn total_rows(&self) -> usize {
        self.created + self.skipped + self.failed
    }

    pub fn record_failure(&mut self, row: usize, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(format!("Строка {}: {}", row, message.into()));
    }
}
