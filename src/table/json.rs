//! JSON import and entity mapping for [`DataTable`]

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use super::{ColumnType, DataTable};
use crate::error::{ChetError, Result};

/// Scalars are kept; nested arrays and objects are stored as their JSON text
fn cell(value: Option<&Value>) -> Value {
    match value {
        None => Value::Null,
        Some(v @ (Value::Array(_) | Value::Object(_))) => Value::String(v.to_string()),
        Some(v) => v.clone(),
    }
}

impl DataTable {
    /// Build a table from a JSON array of objects; columns come from the first object
    pub fn from_json_array(name: impl Into<String>, items: &Value) -> Result<DataTable> {
        let items = items
            .as_array()
            .ok_or_else(|| ChetError::Other("expected a JSON array".to_string()))?;
        let mut table = DataTable::new(name);
        let Some(first) = items.first() else {
            return Ok(table);
        };
        let first = first
            .as_object()
            .ok_or_else(|| ChetError::Other("expected an array of JSON objects".to_string()))?;
        for key in first.keys() {
            table.add_column(key.clone(), ColumnType::Any);
        }

        for (index, item) in items.iter().enumerate() {
            match item.as_object() {
                Some(object) => {
                    let row = table
                        .columns
                        .iter()
                        .map(|c| cell(object.get(&c.name)))
                        .collect();
                    table.push_raw_row(row);
                }
                None => warn!("Skipping JSON item {}: not an object", index),
            }
        }
        Ok(table)
    }

    pub fn from_json_str(name: impl Into<String>, text: &str) -> Result<DataTable> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_array(name, &value)
    }

    /// One row per item, one column per serialized field of the first item
    pub fn from_serializable<T, I>(name: impl Into<String>, items: I) -> Result<DataTable>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let values = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_json_array(name, &Value::Array(values))
    }

    /// Build one `T` per row, renaming columns through `mapping`
    /// (`source column -> target field`)
    ///
    /// Each row starts from `T::default()`. A mapped cell is converted towards
    /// the JSON shape of the default field (numbers become text for string
    /// fields, numeric text becomes a number for numeric fields) and kept only
    /// if the entity still deserializes; otherwise the field keeps its
    /// default. Mappings whose source column is missing are dropped. Rows are
    /// skipped only when the entity cannot be built at all.
    pub fn map_to_entities<T>(&self, mapping: &[(&str, &str)]) -> Vec<T>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        if self.is_null_or_empty() {
            return Vec::new();
        }

        let valid: Vec<(usize, &str)> = mapping
            .iter()
            .filter_map(|(source, target)| self.column_index(source).map(|i| (i, *target)))
            .collect();
        if valid.is_empty() {
            warn!("No usable column mappings for table '{}'", self.name);
            return Vec::new();
        }

        let template = match serde_json::to_value(T::default()) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => Map::new(),
            Err(e) => {
                warn!("Cannot describe the target of table '{}': {}", self.name, e);
                return Vec::new();
            }
        };

        let mut entities = Vec::with_capacity(self.row_count());
        for row in self.rows() {
            let mut fields = template.clone();
            for (col, target) in &valid {
                let Some(value) = row.get_index(*col).filter(|v| !v.is_null()) else {
                    continue;
                };
                let accepted = candidates(value, template.get(*target))
                    .into_iter()
                    .map(|candidate| {
                        let mut trial = fields.clone();
                        trial.insert(target.to_string(), candidate);
                        trial
                    })
                    .find(builds::<T>);
                match accepted {
                    Some(trial) => fields = trial,
                    None => debug!(
                        "Row {}: '{}' does not fit field '{}', using the default",
                        row.index(),
                        value,
                        target
                    ),
                }
            }
            match serde_json::from_value::<T>(Value::Object(fields)) {
                Ok(entity) => entities.push(entity),
                Err(e) => warn!("Failed to map row {}: {}", row.index(), e),
            }
        }
        entities
    }
}

fn builds<T: DeserializeOwned>(fields: &Map<String, Value>) -> bool {
    serde_json::from_value::<T>(Value::Object(fields.clone())).is_ok()
}

fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    text.parse::<i64>()
        .map(Value::from)
        .ok()
        .or_else(|| {
            text.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
        })
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Values to try for `cell` in a field whose default serializes as `shape`, best first
fn candidates(cell: &Value, shape: Option<&Value>) -> Vec<Value> {
    let mut out = Vec::with_capacity(3);
    match (shape, cell) {
        (Some(Value::String(_)), Value::Number(_) | Value::Bool(_)) => {
            out.push(Value::String(cell.to_string()));
        }
        (Some(Value::Number(_)), Value::String(text)) => out.extend(parse_number(text)),
        (Some(Value::Number(_)), Value::Bool(flag)) => out.push(Value::from(u8::from(*flag))),
        (Some(Value::Bool(_)), Value::String(text)) => {
            out.extend(parse_bool(text).map(Value::Bool));
        }
        (Some(Value::Bool(_)), Value::Number(n)) => {
            out.push(Value::Bool(n.as_f64().is_some_and(|v| v != 0.0)));
        }
        _ => {}
    }
    out.push(cell.clone());
    // optional numeric fields default to null
    if let (Some(Value::Null) | None, Value::String(text)) = (shape, cell) {
        out.extend(parse_number(text));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
    #[serde(default)]
    struct Person {
        name: String,
        age: i64,
    }

    #[test]
    fn test_from_json_array() {
        let value = json!([
            {"id": 1, "name": "a", "tags": ["x"]},
            {"id": 2.5, "extra": true},
            "not an object"
        ]);
        let table = DataTable::from_json_array("items", &value).unwrap();
        assert_eq!(table.column_names(), vec!["id", "name", "tags"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "tags"), Some(&json!("[\"x\"]")));
        assert_eq!(table.value(1, "id"), Some(&json!(2.5)));
        assert_eq!(table.value(1, "name"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(DataTable::from_json_array("t", &json!({"a": 1})).is_err());
        assert!(DataTable::from_json_array("t", &json!([1, 2])).is_err());
        assert!(DataTable::from_json_str("t", "not json").is_err());
        let empty = DataTable::from_json_str("t", "[]").unwrap();
        assert_eq!(empty.column_count(), 0);
    }

    #[test]
    fn test_from_serializable() {
        let people = vec![
            Person { name: "Ann".into(), age: 30 },
            Person { name: "Ben".into(), age: 25 },
        ];
        let table = DataTable::from_serializable("people", &people).unwrap();
        assert_eq!(table.column_names(), vec!["name", "age"]);
        assert_eq!(table.value(1, "age"), Some(&json!(25)));
    }

    #[test]
    fn test_map_to_entities_falls_back_per_field() {
        let table = DataTable::from_json_array(
            "src",
            &json!([
                {"姓名": "Ann", "年龄": 30},
                {"姓名": "Ben", "年龄": "unknown"},
                {"姓名": "Cy", "年龄": null}
            ]),
        )
        .unwrap();

        let people: Vec<Person> =
            table.map_to_entities(&[("姓名", "name"), ("年龄", "age"), ("missing", "x")]);
        assert_eq!(
            people,
            vec![
                Person { name: "Ann".into(), age: 30 },
                Person { name: "Ben".into(), age: 0 },
                Person { name: "Cy".into(), age: 0 },
            ]
        );
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
    struct Item {
        code: String,
        qty: i32,
        price: Option<f64>,
        active: bool,
    }

    #[test]
    fn test_map_to_entities_converts_scalars() {
        let table = DataTable::from_json_array(
            "src",
            &json!([
                {"Code": 123, "Qty": "5", "Price": "2.5", "Active": "true"},
                {"Code": "A1", "Qty": 7, "Price": null, "Active": 1},
                {"Code": true, "Qty": "5.5", "Price": "n/a", "Active": "maybe"}
            ]),
        )
        .unwrap();

        let items: Vec<Item> = table.map_to_entities(&[
            ("Code", "code"),
            ("Qty", "qty"),
            ("Price", "price"),
            ("Active", "active"),
        ]);
        assert_eq!(
            items,
            vec![
                Item { code: "123".into(), qty: 5, price: Some(2.5), active: true },
                Item { code: "A1".into(), qty: 7, price: None, active: true },
                Item { code: "true".into(), qty: 0, price: None, active: false },
            ]
        );
    }

    #[test]
    fn test_map_to_entities_without_valid_mapping() {
        let table = DataTable::from_json_array("src", &json!([{"a": 1}])).unwrap();
        let people: Vec<Person> = table.map_to_entities(&[("b", "name")]);
        assert!(people.is_empty());
    }
}
