//! In-memory row/column table
//!
//! A [`DataTable`] holds named, typed columns and rows of JSON values. Cells
//! are coerced to their column's type on insert; a cell that cannot be
//! coerced becomes `null`. Column lookups ignore case.

pub mod csv_io;
pub mod expression;
pub mod json;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ChetError, Result};
use crate::ext::datetime::parse_datetime;
use expression::{evaluator, parse_sort, CompiledFilter};

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    #[default]
    Any,
    Text,
    Integer,
    Float,
    Bool,
    DateTime,
}

impl ColumnType {
    /// Convert `value` to this type, `null` when it does not fit
    pub fn coerce(self, value: Value) -> Value {
        if value.is_null() {
            return value;
        }
        let coerced = match (self, &value) {
            (ColumnType::Any, _) => Some(value.clone()),
            (ColumnType::Text, Value::String(_)) => Some(value.clone()),
            (ColumnType::Text, other) => Some(Value::String(other.to_string())),
            (ColumnType::Integer, Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Value::from),
            (ColumnType::Integer, Value::String(s)) => {
                s.trim().replace(',', "").parse::<i64>().ok().map(Value::from)
            }
            (ColumnType::Integer, Value::Bool(b)) => Some(Value::from(*b as i64)),
            (ColumnType::Float, Value::Number(n)) => n.as_f64().map(Value::from),
            (ColumnType::Float, Value::String(s)) => s
                .trim()
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::from),
            (ColumnType::Bool, Value::Bool(_)) => Some(value.clone()),
            (ColumnType::Bool, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(Value::Bool(true)),
                "false" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
            (ColumnType::Bool, Value::Number(n)) => n.as_f64().map(|f| Value::Bool(f != 0.0)),
            (ColumnType::DateTime, Value::String(s)) => parse_datetime(s)
                .map(|dt| Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string())),
            _ => None,
        };
        coerced.unwrap_or_else(|| {
            debug!("Cannot store {} in a {:?} column", value, self);
            Value::Null
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub kind: ColumnType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a DataTable,
    index: usize,
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Cell by column name, ignoring case
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.table
            .column_index(column)
            .and_then(|i| self.values.get(i))
    }

    pub fn get_index(&self, column: usize) -> Option<&'a Value> {
        self.values.get(column)
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Column name to cell, in column order
    pub fn to_map(&self) -> Map<String, Value> {
        self.table
            .columns
            .iter()
            .zip(self.values)
            .map(|(c, v)| (c.name.clone(), v.clone()))
            .collect()
    }
}

impl DataTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.add_column(name, kind);
        self
    }

    /// Append a column; existing rows get `null` in it
    pub fn add_column(&mut self, name: impl Into<String>, kind: ColumnType) {
        self.columns.push(Column {
            name: name.into(),
            kind,
        });
        for row in &mut self.rows {
            row.push(Value::Null);
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.name.eq_ignore_ascii_case(name))
            })
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            table: self,
            index,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().enumerate().map(move |(index, values)| Row {
            table: self,
            index,
            values,
        })
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite one cell, coercing to the column type; false when out of range
    pub fn set_value(&mut self, row: usize, column: &str, value: Value) -> bool {
        let Some(col) = self.column_index(column) else {
            return false;
        };
        let kind = self.columns[col].kind;
        match self.rows.get_mut(row) {
            Some(cells) => {
                cells[col] = kind.coerce(value);
                true
            }
            None => false,
        }
    }

    /// No rows
    pub fn is_null_or_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn map_rows<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(Row<'_>) -> T,
    {
        self.rows().map(f).collect()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn to_dictionary_list(&self) -> Vec<Map<String, Value>> {
        self.iter_dictionaries().collect()
    }

    pub fn iter_dictionaries(&self) -> impl Iterator<Item = Map<String, Value>> + '_ {
        self.rows().map(|row| row.to_map())
    }

    /// Rows matching `expr`; a blank expression keeps every row
    pub fn try_filter(&self, expr: &str) -> Result<DataTable> {
        if expr.trim().is_empty() {
            return Ok(self.copy_all());
        }
        let filter = CompiledFilter::compile(expr, self)?;
        let mut result = self.clone_structure();
        for row in self.rows() {
            if filter.matches(&row)? {
                result.rows.push(row.values.to_vec());
            }
        }
        Ok(result)
    }

    /// Like [`try_filter`](Self::try_filter), but an invalid expression logs a
    /// warning and returns an unchanged copy
    pub fn filter(&self, expr: &str) -> DataTable {
        self.try_filter(expr).unwrap_or_else(|e| {
            warn!("Ignoring table filter '{}': {}", expr, e);
            self.copy_all()
        })
    }

    /// Stable sort by `"A ASC, B DESC"`; a blank specification keeps the order
    pub fn try_sort(&self, spec: &str) -> Result<DataTable> {
        if spec.trim().is_empty() {
            return Ok(self.copy_all());
        }
        let keys = parse_sort(spec)?;
        let indexed = keys
            .iter()
            .map(|key| {
                self.column_index(&key.column)
                    .map(|i| (i, key))
                    .ok_or_else(|| ChetError::UnknownColumn(key.column.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut result = self.copy_all();
        result
            .rows
            .sort_by(|a, b| evaluator::compare_rows(&indexed, a, b));
        Ok(result)
    }

    pub fn sort(&self, spec: &str) -> DataTable {
        self.try_sort(spec).unwrap_or_else(|e| {
            warn!("Ignoring table sort '{}': {}", spec, e);
            self.copy_all()
        })
    }

    /// Structure and data
    pub fn copy_all(&self) -> DataTable {
        self.clone()
    }

    /// Structure only
    pub fn clone_structure(&self) -> DataTable {
        DataTable {
            name: self.name.clone(),
            columns: self.columns.clone(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells are `null`, extra values are ignored
    pub fn add_row<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut values = values.into_iter();
        let row = self
            .columns
            .iter()
            .map(|c| c.kind.coerce(values.next().unwrap_or(Value::Null)))
            .collect();
        self.rows.push(row);
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Row-major copy of every cell
    pub fn to_array(&self) -> Vec<Vec<Value>> {
        self.rows.clone()
    }

    /// Fill each empty cell from the next non-empty cell below it, or failing
    /// that from the last non-empty cell above; columns never fully empty out
    pub fn fill_missing_values(&mut self) {
        for col in 0..self.columns.len() {
            let mut last: Option<Value> = None;
            for row in 0..self.rows.len() {
                if !is_missing(&self.rows[row][col]) {
                    last = Some(self.rows[row][col].clone());
                    continue;
                }
                let next = self.rows[row + 1..]
                    .iter()
                    .map(|r| &r[col])
                    .find(|v| !is_missing(v))
                    .cloned();
                match next {
                    Some(value) => {
                        self.rows[row][col] = value.clone();
                        last = Some(value);
                    }
                    None => {
                        if let Some(value) = &last {
                            self.rows[row][col] = value.clone();
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn push_raw_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// `null` or a blank string
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
