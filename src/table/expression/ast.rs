//! Syntax tree for row filters and sort specifications

use serde_json::Value;

/// Parsed row filter
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // Literals
    Number(f64),
    String(String),
    Boolean(bool),
    Null,

    Column(String),

    // Comparison operators
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    GreaterThan(Box<Expression>, Box<Expression>),
    LessThan(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Like(Box<Expression>, Box<Expression>),

    // Logical operators
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),

    IsNull(Box<Expression>),
    IsNotNull(Box<Expression>),
    In(Box<Expression>, Vec<Value>),
}

impl Expression {
    /// Column names referenced anywhere in the tree
    pub fn columns(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_columns(&mut names);
        names
    }

    fn collect_columns<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expression::Column(name) => names.push(name),
            Expression::Equal(l, r)
            | Expression::NotEqual(l, r)
            | Expression::GreaterThan(l, r)
            | Expression::LessThan(l, r)
            | Expression::GreaterEqual(l, r)
            | Expression::LessEqual(l, r)
            | Expression::Like(l, r)
            | Expression::And(l, r)
            | Expression::Or(l, r) => {
                l.collect_columns(names);
                r.collect_columns(names);
            }
            Expression::Not(e)
            | Expression::IsNull(e)
            | Expression::IsNotNull(e)
            | Expression::In(e, _) => e.collect_columns(names),
            Expression::Number(_)
            | Expression::String(_)
            | Expression::Boolean(_)
            | Expression::Null => {}
        }
    }
}

/// One `Column [ASC|DESC] [NULLS FIRST|LAST]` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
    pub null_handling: NullHandling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Where empty cells land; `Smallest` puts them first ascending and last descending
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NullHandling {
    Smallest,
    First,
    Last,
}
