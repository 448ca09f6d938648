//! Lexical analysis for row filters
//!
//! Accepts the familiar data-table filter dialect: `'quoted'` strings with
//! `''` escapes, `[bracketed column names]`, `#date#` literals, the
//! comparison operators `= <> != < <= > >=` and the keywords `AND OR NOT
//! LIKE IN IS NULL TRUE FALSE` in any case.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ChetError, Result};
use crate::ext::datetime::parse_datetime;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Identifier(String),

    // Operators
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    And,
    Or,
    Not,
    Like,
    In,
    Is,

    // Punctuation
    LeftParen,
    RightParen,
    Comma,
}

/// A token and the character offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: usize,
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn parse_operator(start: usize, ch: char, chars: &mut Chars) -> Result<Token> {
    chars.next();
    let next = chars.peek().map(|&(_, c)| c);
    let token = match (ch, next) {
        ('=', Some('=')) => {
            chars.next();
            Token::Equal
        }
        ('=', _) => Token::Equal,
        ('!', Some('=')) => {
            chars.next();
            Token::NotEqual
        }
        ('<', Some('>')) => {
            chars.next();
            Token::NotEqual
        }
        ('<', Some('=')) => {
            chars.next();
            Token::LessEqual
        }
        ('<', _) => Token::Less,
        ('>', Some('=')) => {
            chars.next();
            Token::GreaterEqual
        }
        ('>', _) => Token::Greater,
        _ => return Err(ChetError::expression(start, format!("unexpected '{}'", ch))),
    };
    Ok(token)
}

/// Quoted string; a doubled quote stands for one quote character
fn parse_string(start: usize, chars: &mut Chars) -> Result<String> {
    chars.next();
    let mut string = String::new();
    while let Some((_, ch)) = chars.next() {
        if ch == '\'' {
            if chars.peek().map(|&(_, c)| c) == Some('\'') {
                chars.next();
                string.push('\'');
                continue;
            }
            return Ok(string);
        }
        string.push(ch);
    }
    Err(ChetError::expression(start, "unterminated string literal"))
}

fn parse_delimited(start: usize, close: char, what: &str, chars: &mut Chars) -> Result<String> {
    chars.next();
    let mut text = String::new();
    for (_, ch) in chars.by_ref() {
        if ch == close {
            return Ok(text);
        }
        text.push(ch);
    }
    Err(ChetError::expression(start, format!("unterminated {}", what)))
}

fn parse_number(start: usize, chars: &mut Chars) -> Result<f64> {
    let mut num_str = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        if ch.is_ascii_digit() || ch == '.' || (ch == '-' && num_str.is_empty()) {
            num_str.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    num_str
        .parse::<f64>()
        .map_err(|_| ChetError::expression(start, format!("invalid number '{}'", num_str)))
}

fn parse_identifier(chars: &mut Chars) -> String {
    let mut ident = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' {
            ident.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn parse_keyword_or_identifier(ident: String) -> Token {
    match ident.to_ascii_lowercase().as_str() {
        "true" => Token::Boolean(true),
        "false" => Token::Boolean(false),
        "null" => Token::Null,
        "and" => Token::And,
        "or" => Token::Or,
        "not" => Token::Not,
        "like" => Token::Like,
        "in" => Token::In,
        "is" => Token::Is,
        _ => Token::Identifier(ident),
    }
}

pub fn tokenize(expr: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            _ if ch.is_whitespace() => {
                chars.next();
                continue;
            }
            '(' => {
                chars.next();
                Token::LeftParen
            }
            ')' => {
                chars.next();
                Token::RightParen
            }
            ',' => {
                chars.next();
                Token::Comma
            }
            '=' | '!' | '<' | '>' => parse_operator(pos, ch, &mut chars)?,
            '\'' => Token::String(parse_string(pos, &mut chars)?),
            '[' => Token::Identifier(parse_delimited(pos, ']', "column name", &mut chars)?),
            '#' => {
                let text = parse_delimited(pos, '#', "date literal", &mut chars)?;
                let date = parse_datetime(&text).ok_or_else(|| {
                    ChetError::expression(pos, format!("invalid date '{}'", text))
                })?;
                Token::String(date.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            '0'..='9' | '-' | '.' => Token::Number(parse_number(pos, &mut chars)?),
            _ if ch.is_alphabetic() || ch == '_' => {
                parse_keyword_or_identifier(parse_identifier(&mut chars))
            }
            _ => {
                return Err(ChetError::expression(
                    pos,
                    format!("unexpected character '{}'", ch),
                ))
            }
        };
        tokens.push(Spanned { token, pos });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expr: &str) -> Vec<Token> {
        tokenize(expr).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn test_tokenize_comparison() {
        assert_eq!(
            kinds("Age >= 18"),
            vec![
                Token::Identifier("Age".into()),
                Token::GreaterEqual,
                Token::Number(18.0)
            ]
        );
    }

    #[test]
    fn test_tokenize_not_equal_forms() {
        assert_eq!(kinds("A <> 1")[1], Token::NotEqual);
        assert_eq!(kinds("A != 1")[1], Token::NotEqual);
    }

    #[test]
    fn test_tokenize_string_escapes() {
        assert_eq!(kinds("'O''Brien'"), vec![Token::String("O'Brien".into())]);
    }

    #[test]
    fn test_tokenize_bracketed_column_and_keywords() {
        assert_eq!(
            kinds("[First Name] like 'A%' and not x is null"),
            vec![
                Token::Identifier("First Name".into()),
                Token::Like,
                Token::String("A%".into()),
                Token::And,
                Token::Not,
                Token::Identifier("x".into()),
                Token::Is,
                Token::Null,
            ]
        );
    }

    #[test]
    fn test_tokenize_date_literal() {
        assert_eq!(
            kinds("#2025-01-02#"),
            vec![Token::String("2025-01-02 00:00:00".into())]
        );
    }

    #[test]
    fn test_positions_are_recorded() {
        let tokens = tokenize("A = 'x'").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 2, 4]);
    }

    #[test]
    fn test_errors_carry_position() {
        match tokenize("A = 'open") {
            Err(ChetError::Expression { position, .. }) => assert_eq!(position, 4),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(tokenize("A ? 1").is_err());
        assert!(tokenize("[A = 1").is_err());
    }
}
