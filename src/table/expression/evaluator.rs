//! Evaluates parsed filters against table rows

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use super::ast::{Expression, NullHandling, SortDirection, SortKey};
use crate::error::{ChetError, Result};
use crate::table::Row;

/// Resolve an operand to a cell value or literal
fn evaluate(expr: &Expression, row: &Row<'_>) -> Result<Value> {
    match expr {
        Expression::Number(n) => Ok(serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        Expression::String(s) => Ok(Value::String(s.clone())),
        Expression::Boolean(b) => Ok(Value::Bool(*b)),
        Expression::Null => Ok(Value::Null),
        Expression::Column(name) => row
            .get(name)
            .cloned()
            .ok_or_else(|| ChetError::UnknownColumn(name.clone())),
        other => evaluate_bool(other, row).map(Value::Bool),
    }
}

/// Whether `row` satisfies `expr`; comparisons involving an empty cell are false
pub fn evaluate_bool(expr: &Expression, row: &Row<'_>) -> Result<bool> {
    let compare = |l: &Expression, r: &Expression| -> Result<Option<Ordering>> {
        Ok(compare_values(&evaluate(l, row)?, &evaluate(r, row)?))
    };

    match expr {
        Expression::And(l, r) => Ok(evaluate_bool(l, row)? && evaluate_bool(r, row)?),
        Expression::Or(l, r) => Ok(evaluate_bool(l, row)? || evaluate_bool(r, row)?),
        Expression::Not(e) => Ok(!evaluate_bool(e, row)?),

        Expression::Equal(l, r) => Ok(compare(l, r)? == Some(Ordering::Equal)),
        Expression::NotEqual(l, r) => Ok(matches!(
            compare(l, r)?,
            Some(Ordering::Less | Ordering::Greater)
        )),
        Expression::GreaterThan(l, r) => Ok(compare(l, r)? == Some(Ordering::Greater)),
        Expression::LessThan(l, r) => Ok(compare(l, r)? == Some(Ordering::Less)),
        Expression::GreaterEqual(l, r) => Ok(matches!(
            compare(l, r)?,
            Some(Ordering::Greater | Ordering::Equal)
        )),
        Expression::LessEqual(l, r) => Ok(matches!(
            compare(l, r)?,
            Some(Ordering::Less | Ordering::Equal)
        )),

        Expression::Like(l, r) => {
            let value = evaluate(l, row)?;
            let pattern = evaluate(r, row)?;
            if value.is_null() || pattern.is_null() {
                return Ok(false);
            }
            Ok(like_regex(&text_of(&pattern))?.is_match(&text_of(&value)))
        }

        Expression::IsNull(e) => Ok(evaluate(e, row)?.is_null()),
        Expression::IsNotNull(e) => Ok(!evaluate(e, row)?.is_null()),
        Expression::In(e, list) => {
            let value = evaluate(e, row)?;
            Ok(list
                .iter()
                .any(|item| compare_values(&value, item) == Some(Ordering::Equal)))
        }

        Expression::Boolean(b) => Ok(*b),
        Expression::Column(_) => match evaluate(expr, row)? {
            Value::Bool(b) => Ok(b),
            other => Ok(as_bool(&other).unwrap_or(false)),
        },
        Expression::Number(_) | Expression::String(_) | Expression::Null => Ok(false),
    }
}

/// `%` and `*` match any run of characters; matching ignores case
fn like_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '%' | '*' => source.push_str(".*"),
            _ => source.push_str(&regex::escape(&ch.to_string())),
        }
    }
    source.push('$');
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| ChetError::expression(0, e.to_string()))
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().to_ascii_lowercase().parse::<bool>().ok(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

/// Ordering between two cells; `None` when either is empty or they cannot be compared
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => None,
        (Value::Number(_), _) | (_, Value::Number(_)) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => Some(compare_text(&text_of(a), &text_of(b))),
        },
        (Value::Bool(_), _) | (_, Value::Bool(_)) => match (as_bool(a), as_bool(b)) {
            (Some(x), Some(y)) => Some(x.cmp(&y)),
            _ => None,
        },
        _ => Some(compare_text(&text_of(a), &text_of(b))),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Row ordering for a list of sort keys; `indices` locate each key's column
pub fn compare_rows(keys: &[(usize, &SortKey)], a: &[Value], b: &[Value]) -> Ordering {
    for (index, key) in keys {
        let (x, y) = (&a[*index], &b[*index]);
        let ordering = match (x.is_null(), y.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) | (false, true) => {
                let null_first = match key.null_handling {
                    NullHandling::First => true,
                    NullHandling::Last => false,
                    NullHandling::Smallest => key.direction == SortDirection::Ascending,
                };
                if x.is_null() == null_first {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => {
                let ordering = compare_values(x, y).unwrap_or(Ordering::Equal);
                match key.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compare_values() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Some(Ordering::Less));
        assert_eq!(compare_values(&json!("10"), &json!(9)), Some(Ordering::Greater));
        assert_eq!(compare_values(&json!("abc"), &json!("ABC")), Some(Ordering::Equal));
        assert_eq!(compare_values(&json!(true), &json!("true")), Some(Ordering::Equal));
        assert_eq!(compare_values(&Value::Null, &json!(1)), None);
        assert_eq!(compare_values(&json!("x"), &json!(1)), Some(Ordering::Greater));
    }

    #[test]
    fn test_like_regex() {
        let re = like_regex("Jo%").unwrap();
        assert!(re.is_match("john"));
        assert!(!re.is_match("ajo"));
        assert!(like_regex("*son").unwrap().is_match("Jackson"));
        assert!(like_regex("a.b").unwrap().is_match("A.B"));
        assert!(!like_regex("a.b").unwrap().is_match("axb"));
    }

    #[test]
    fn test_compare_rows_null_placement() {
        let asc = SortKey {
            column: "A".into(),
            direction: SortDirection::Ascending,
            null_handling: NullHandling::Smallest,
        };
        let desc = SortKey {
            direction: SortDirection::Descending,
            ..asc.clone()
        };
        let last = SortKey {
            null_handling: NullHandling::Last,
            ..asc.clone()
        };
        let null_row = [Value::Null];
        let one = [json!(1)];

        assert_eq!(compare_rows(&[(0, &asc)], &null_row, &one), Ordering::Less);
        assert_eq!(compare_rows(&[(0, &desc)], &null_row, &one), Ordering::Greater);
        assert_eq!(compare_rows(&[(0, &last)], &null_row, &one), Ordering::Greater);
        assert_eq!(compare_rows(&[(0, &desc)], &[json!(1)], &[json!(2)]), Ordering::Greater);
    }
}
