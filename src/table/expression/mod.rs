//! Row filter and sort expressions for [`DataTable`](crate::table::DataTable)
//!
//! Filters use the familiar data-table dialect:
//!
//! ```text
//! Age >= 18 AND (City = 'Paris' OR [Last Name] LIKE 'Du%')
//! Status IN ('open', 'pending') AND ClosedAt IS NULL
//! ```
//!
//! Sort specifications are comma-separated `Column [ASC|DESC]` entries with
//! an optional `NULLS FIRST` or `NULLS LAST`.

pub mod ast;
pub mod evaluator;
pub mod parser;
pub mod tokenizer;

pub use ast::{Expression, NullHandling, SortDirection, SortKey};
pub use parser::{parse_filter, parse_sort};

use crate::error::{ChetError, Result};
use crate::table::{DataTable, Row};

/// A filter checked against a table's columns, ready to run on its rows
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    expression: Expression,
}

impl CompiledFilter {
    pub fn compile(expr: &str, table: &DataTable) -> Result<Self> {
        let expression = parse_filter(expr)?;
        if let Some(missing) = expression
            .columns()
            .into_iter()
            .find(|name| table.column_index(name).is_none())
        {
            return Err(ChetError::UnknownColumn(missing.to_string()));
        }
        Ok(Self { expression })
    }

    pub fn matches(&self, row: &Row<'_>) -> Result<bool> {
        evaluator::evaluate_bool(&self.expression, row)
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}
