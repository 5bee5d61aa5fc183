use std::collections::HashMap;

/// Строка CSV: номер строки в файле и значения по заголовкам (в нижнем регистре)
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub line: usize,
    fields: HashMap<String, String>,
}

impl CsvRow {
    /// Значение колонки; пустые значения считаются отсутствующими
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn get_or_default(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

/// Разделитель по строке заголовка: ';', если точек с запятой больше, иначе ','
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

/// Разобрать CSV-текст в строки. Первая строка - заголовки.
pub fn parse_csv(csv_text: &str) -> anyhow::Result<Vec<CsvRow>> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');
    if text.trim().is_empty() {
        anyhow::bail!("Файл пуст");
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(detect_delimiter(text))
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| anyhow::anyhow!("Failed to read CSV headers: {}", e))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| anyhow::anyhow!("Строка {}: {}", index + 2, e))?;
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(CsvRow {
            line: record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 2),
            fields,
        });
    }
    Ok(rows)
}

/// Число с точкой или запятой в качестве десятичного разделителя,
/// пробелы между разрядами допускаются
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("code;description;unit\n1;a;b"), b';');
        assert_eq!(detect_delimiter("code,description,unit\n1,a,b"), b',');
        // в заголовке нет разделителей
        assert_eq!(detect_delimiter("code\nA"), b',');
        // запятая внутри данных не влияет, смотрим только заголовок
        assert_eq!(detect_delimiter("code;description\nA;Насос, линия 1"), b';');
    }

    #[test]
    fn test_headers_case_insensitive_and_trimmed() {
        let rows = parse_csv("\u{FEFF} Code ; DESCRIPTION ;Unit\nMAT-1; Подшипник ;шт\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("code"), Some("MAT-1"));
        assert_eq!(rows[0].get("description"), Some("Подшипник"));
        assert_eq!(rows[0].get("unit"), Some("шт"));
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn test_short_rows_and_empty_values() {
        let rows = parse_csv("code,description,location\nA-1,Pump\n,,\nA-2,,Hall\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("location"), None);
        assert_eq!(rows[1].get("description"), None);
        assert_eq!(rows[1].get_or_default("location"), "Hall");
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_csv("code,description\nP-1,\"ООО \"\"Ромашка\"\", склад\"\n").unwrap();
        assert_eq!(rows[0].get("description"), Some("ООО \"Ромашка\", склад"));
    }

    #[test]
    fn test_empty_file_is_error() {
        assert!(parse_csv("").is_err());
        assert!(parse_csv("\u{FEFF}  \n").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("390,5"), Some(390.5));
        assert_eq!(parse_number("1 150.25"), Some(1150.25));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }
}
