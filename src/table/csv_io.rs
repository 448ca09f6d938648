//! CSV import and export for [`DataTable`]

use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use super::{ColumnType, DataTable};
use crate::error::Result;

/// Empty cells are `null`; integers, floats and booleans are recognised
fn infer_cell(raw: &str) -> Value {
    let text = raw.trim();
    if text.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::from(i);
    }
    if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return Value::from(f);
    }
    match text.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl DataTable {
    /// Read CSV with a header row; short records are padded with `null`
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut table = DataTable::new(name);
        for header in reader.headers()?.iter() {
            table.add_column(header.to_string(), ColumnType::Any);
        }

        for record in reader.records() {
            let record = record?;
            let row = (0..table.column_count())
                .map(|i| record.get(i).map(infer_cell).unwrap_or(Value::Null))
                .collect();
            table.push_raw_row(row);
        }
        Ok(table)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(name, file)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in &self.rows {
            writer.write_record(row.iter().map(render_cell))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const SAMPLE: &str = "Id, Name ,Score,Active\n1,Ann,9.5,true\n2,\"Lee, Jr\",,FALSE\n3,Zed\n";

    #[test]
    fn test_read_infers_cell_types() {
        let table = DataTable::from_csv_reader("sample", SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["Id", "Name", "Score", "Active"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.value(0, "Id"), Some(&json!(1)));
        assert_eq!(table.value(0, "Score"), Some(&json!(9.5)));
        assert_eq!(table.value(0, "Active"), Some(&json!(true)));
        assert_eq!(table.value(1, "Name"), Some(&json!("Lee, Jr")));
        assert_eq!(table.value(1, "Score"), Some(&Value::Null));
        assert_eq!(table.value(1, "Active"), Some(&json!(false)));
        assert_eq!(table.value(2, "Active"), Some(&Value::Null));
    }

    #[test]
    fn test_write_csv() {
        let table = DataTable::from_csv_reader("sample", SAMPLE.as_bytes()).unwrap();
        let text = table.to_csv_string().unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Id,Name,Score,Active"));
        assert_eq!(lines.next(), Some("1,Ann,9.5,true"));
        assert_eq!(lines.next(), Some("2,\"Lee, Jr\",,false"));
        assert_eq!(lines.next(), Some("3,Zed,,"));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.csv");
        let table = DataTable::from_csv_reader("scores", SAMPLE.as_bytes()).unwrap();
        table.save_csv(&path).unwrap();

        let reloaded = DataTable::from_csv_path(&path).unwrap();
        assert_eq!(reloaded.name, "scores");
        assert_eq!(reloaded.to_array(), table.to_array());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(DataTable::from_csv_path(temp_dir.path().join("none.csv")).is_err());
    }
}
