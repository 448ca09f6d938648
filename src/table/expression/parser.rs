//! Parser for row filters and sort specifications

use serde_json::Value;

use super::ast::{Expression, NullHandling, SortDirection, SortKey};
use super::tokenizer::{tokenize, Spanned, Token};
use crate::error::{ChetError, Result};

fn position(tokens: &[Spanned]) -> usize {
    tokens.first().map(|t| t.pos).unwrap_or(0)
}

/// Split on `op` at the outer nesting level and fold the parts left to right
fn parse_binary_operator<F, C>(
    tokens: &[Spanned],
    op: &Token,
    parse_next: F,
    combine: C,
) -> Result<Expression>
where
    F: Fn(&[Spanned]) -> Result<Expression>,
    C: Fn(Expression, Expression) -> Expression,
{
    let positions = find_operators(tokens, op);
    if positions.is_empty() {
        return parse_next(tokens);
    }

    let mut parts = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for pos in positions.into_iter().chain(std::iter::once(tokens.len())) {
        let part = &tokens[start..pos];
        if part.is_empty() {
            let at = tokens.get(pos).or(tokens.last()).map(|t| t.pos).unwrap_or(0);
            return Err(ChetError::expression(at, "missing operand"));
        }
        parts.push(parse_next(part)?);
        start = pos + 1;
    }

    parts
        .into_iter()
        .reduce(combine)
        .ok_or_else(|| ChetError::expression(position(tokens), "empty expression"))
}

fn find_operators(tokens: &[Spanned], op: &Token) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut depth = 0i32;
    for (i, spanned) in tokens.iter().enumerate() {
        match spanned.token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth -= 1,
            _ if depth == 0 && &spanned.token == op => positions.push(i),
            _ => {}
        }
    }
    positions
}

fn find_matching_paren(tokens: &[Spanned], start: usize) -> Result<usize> {
    let mut depth = 0i32;
    for (i, spanned) in tokens.iter().enumerate().skip(start) {
        match spanned.token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(ChetError::expression(
        tokens[start].pos,
        "mismatched parentheses",
    ))
}

/// Parse a row filter such as `Age >= 18 AND (City = 'Paris' OR City LIKE 'L%')`
pub fn parse_filter(expr: &str) -> Result<Expression> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(ChetError::expression(0, "empty expression"));
    }
    parse_or(&tokens)
}

fn parse_or(tokens: &[Spanned]) -> Result<Expression> {
    parse_binary_operator(tokens, &Token::Or, parse_and, |left, right| {
        Expression::Or(Box::new(left), Box::new(right))
    })
}

fn parse_and(tokens: &[Spanned]) -> Result<Expression> {
    parse_binary_operator(tokens, &Token::And, parse_comparison, |left, right| {
        Expression::And(Box::new(left), Box::new(right))
    })
}

fn parse_comparison(tokens: &[Spanned]) -> Result<Expression> {
    if tokens.is_empty() {
        return Err(ChetError::expression(0, "empty comparison"));
    }

    if tokens[0].token == Token::LeftParen {
        let end = find_matching_paren(tokens, 0)?;
        if end + 1 == tokens.len() {
            return parse_or(&tokens[1..end]);
        }
    }

    if tokens[0].token == Token::Not {
        let inner = parse_comparison(&tokens[1..])?;
        return Ok(Expression::Not(Box::new(inner)));
    }

    let mut op_pos = None;
    let mut depth = 0i32;
    for (i, spanned) in tokens.iter().enumerate() {
        match spanned.token {
            Token::LeftParen => depth += 1,
            Token::RightParen => depth -= 1,
            Token::Equal
            | Token::NotEqual
            | Token::Greater
            | Token::Less
            | Token::GreaterEqual
            | Token::LessEqual
            | Token::Like
            | Token::In
            | Token::Is
            | Token::Not
                if depth == 0 =>
            {
                op_pos = Some(i);
                break;
            }
            _ => {}
        }
    }

    let Some(pos) = op_pos else {
        return parse_primary(tokens);
    };
    let left_tokens = &tokens[..pos];
    if left_tokens.is_empty() {
        return Err(ChetError::expression(tokens[pos].pos, "missing left operand"));
    }
    let left = Box::new(parse_primary(left_tokens)?);

    // NOT LIKE / NOT IN
    let (negated, op_index) = match tokens[pos].token {
        Token::Not => (true, pos + 1),
        _ => (false, pos),
    };
    let op = tokens.get(op_index).ok_or_else(|| {
        ChetError::expression(tokens[pos].pos, "expected LIKE or IN after NOT")
    })?;
    let right_tokens = &tokens[op_index + 1..];

    if negated && !matches!(op.token, Token::Like | Token::In) {
        return Err(ChetError::expression(op.pos, "expected LIKE or IN after NOT"));
    }

    let expr = match op.token {
        Token::Is => return parse_is(left, right_tokens, op.pos),
        Token::In => Expression::In(left, parse_in_list(right_tokens, op.pos)?),
        Token::Like => Expression::Like(left, Box::new(parse_operand(right_tokens, op.pos)?)),
        Token::Equal => Expression::Equal(left, Box::new(parse_operand(right_tokens, op.pos)?)),
        Token::NotEqual => {
            Expression::NotEqual(left, Box::new(parse_operand(right_tokens, op.pos)?))
        }
        Token::Greater => {
            Expression::GreaterThan(left, Box::new(parse_operand(right_tokens, op.pos)?))
        }
        Token::Less => Expression::LessThan(left, Box::new(parse_operand(right_tokens, op.pos)?)),
        Token::GreaterEqual => {
            Expression::GreaterEqual(left, Box::new(parse_operand(right_tokens, op.pos)?))
        }
        Token::LessEqual => {
            Expression::LessEqual(left, Box::new(parse_operand(right_tokens, op.pos)?))
        }
        _ => {
            return Err(ChetError::expression(
                op.pos,
                format!("unexpected operator {:?}", op.token),
            ))
        }
    };

    if negated {
        Ok(Expression::Not(Box::new(expr)))
    } else {
        Ok(expr)
    }
}

fn parse_operand(tokens: &[Spanned], op_pos: usize) -> Result<Expression> {
    if tokens.is_empty() {
        return Err(ChetError::expression(op_pos, "missing right operand"));
    }
    parse_primary(tokens)
}

/// `IS NULL` / `IS NOT NULL`
fn parse_is(left: Box<Expression>, tokens: &[Spanned], op_pos: usize) -> Result<Expression> {
    let kinds: Vec<&Token> = tokens.iter().map(|t| &t.token).collect();
    match kinds.as_slice() {
        [Token::Null] => Ok(Expression::IsNull(left)),
        [Token::Not, Token::Null] => Ok(Expression::IsNotNull(left)),
        _ => Err(ChetError::expression(op_pos, "expected NULL or NOT NULL after IS")),
    }
}

/// `( literal, literal, ... )`
fn parse_in_list(tokens: &[Spanned], op_pos: usize) -> Result<Vec<Value>> {
    let inner = match tokens {
        [first, .., last]
            if first.token == Token::LeftParen && last.token == Token::RightParen =>
        {
            &tokens[1..tokens.len() - 1]
        }
        _ => return Err(ChetError::expression(op_pos, "expected a parenthesized list after IN")),
    };

    let mut values = Vec::new();
    for item in inner.split(|t| t.token == Token::Comma) {
        let value = match item {
            [single] => literal_value(&single.token).ok_or_else(|| {
                ChetError::expression(single.pos, "IN lists accept literals only")
            })?,
            _ => {
                return Err(ChetError::expression(
                    position(item).max(op_pos),
                    "malformed IN list",
                ))
            }
        };
        values.push(value);
    }
    Ok(values)
}

fn literal_value(token: &Token) -> Option<Value> {
    match token {
        Token::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
        Token::String(s) => Some(Value::String(s.clone())),
        Token::Boolean(b) => Some(Value::Bool(*b)),
        Token::Null => Some(Value::Null),
        _ => None,
    }
}

fn parse_primary(tokens: &[Spanned]) -> Result<Expression> {
    let first = tokens
        .first()
        .ok_or_else(|| ChetError::expression(0, "expected an operand"))?;

    if first.token == Token::LeftParen {
        let end = find_matching_paren(tokens, 0)?;
        if end + 1 != tokens.len() {
            return Err(ChetError::expression(tokens[end + 1].pos, "unexpected token"));
        }
        return parse_or(&tokens[1..end]);
    }

    if tokens.len() > 1 {
        return Err(ChetError::expression(tokens[1].pos, "unexpected token"));
    }

    match &first.token {
        Token::Number(n) => Ok(Expression::Number(*n)),
        Token::String(s) => Ok(Expression::String(s.clone())),
        Token::Boolean(b) => Ok(Expression::Boolean(*b)),
        Token::Null => Ok(Expression::Null),
        Token::Identifier(name) => Ok(Expression::Column(name.clone())),
        other => Err(ChetError::expression(
            first.pos,
            format!("unexpected token {:?}", other),
        )),
    }
}

/// Parse `"Name ASC, [Order Date] DESC NULLS LAST"`
pub fn parse_sort(spec: &str) -> Result<Vec<SortKey>> {
    let mut sort_keys = Vec::new();
    let mut offset = 0;

    for field_spec in spec.split(',') {
        let start = offset;
        offset += field_spec.len() + 1;
        let field_spec = field_spec.trim();
        if field_spec.is_empty() {
            continue;
        }

        let (column, rest) = match field_spec.strip_prefix('[') {
            Some(bracketed) => bracketed.split_once(']').ok_or_else(|| {
                ChetError::expression(start, "unterminated column name")
            })?,
            None => field_spec
                .split_once(char::is_whitespace)
                .unwrap_or((field_spec, "")),
        };
        let parts: Vec<String> = rest.split_whitespace().map(|p| p.to_uppercase()).collect();

        let mut direction = SortDirection::Ascending;
        let mut null_handling = NullHandling::Smallest;
        let mut i = 0;

        if let Some(part) = parts.get(i) {
            match part.as_str() {
                "DESC" | "DESCENDING" => {
                    direction = SortDirection::Descending;
                    i += 1;
                }
                "ASC" | "ASCENDING" => i += 1,
                _ => {}
            }
        }

        if parts.get(i).map(String::as_str) == Some("NULLS") {
            null_handling = match parts.get(i + 1).map(String::as_str) {
                Some("FIRST") => NullHandling::First,
                Some("LAST") => NullHandling::Last,
                _ => {
                    return Err(ChetError::expression(
                        start,
                        "use NULLS FIRST or NULLS LAST",
                    ))
                }
            };
            i += 2;
        }

        if i < parts.len() {
            return Err(ChetError::expression(
                start,
                format!("unexpected '{}' in sort specification", parts[i]),
            ));
        }

        sort_keys.push(SortKey {
            column: column.trim().to_string(),
            direction,
            null_handling,
        });
    }

    if sort_keys.is_empty() {
        return Err(ChetError::expression(0, "no sort columns"));
    }
    Ok(sort_keys)
}
