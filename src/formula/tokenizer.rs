use std::fmt;
use std::num::NonZeroU32;

use super::error::FormulaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An uppercase letter followed by any lowercase letters. Not yet
    /// checked against the periodic table.
    Element { symbol: String, pos: usize },
    Number { value: NonZeroU32, pos: usize },
    OpenParen(usize),
    CloseParen(usize),
}

impl Token {
    pub fn pos(&self) -> usize {
        match self {
            Token::Element { pos, .. } | Token::Number { pos, .. } => *pos,
            Token::OpenParen(pos) | Token::CloseParen(pos) => *pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Element { symbol, .. } => f.write_str(symbol),
            Token::Number { value, .. } => write!(f, "{value}"),
            Token::OpenParen(_) => f.write_str("("),
            Token::CloseParen(_) => f.write_str(")"),
        }
    }
}

/// Split a plain-digit formula into tokens.
///
/// Every character must belong to a token; whitespace is not skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, FormulaError> {
    if input.is_empty() {
        return Err(FormulaError::EmptyInput);
    }

    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            'A'..='Z' => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i].is_ascii_lowercase() {
                    i += 1;
                }
                tokens.push(Token::Element {
                    symbol: chars[start..i].iter().collect(),
                    pos: start,
                });
            }
            '0'..='9' => {
                let (value, next) = parse_number(&chars, i)?;
                tokens.push(Token::Number { value, pos: i });
                i = next;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            ch => return Err(FormulaError::UnexpectedChar { pos: i, ch }),
        }
    }

    Ok(tokens)
}

fn parse_number(chars: &[char], start: usize) -> Result<(NonZeroU32, usize), FormulaError> {
    if chars[start] == '0' {
        return Err(FormulaError::LeadingZero { pos: start });
    }

    let mut i = start;
    let mut value: u32 = 0;
    while i < chars.len() {
        let Some(d) = chars[i].to_digit(10) else {
            break;
        };
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(FormulaError::QuantityOverflow { pos: start })?;
        i += 1;
    }

    let value = NonZeroU32::new(value).ok_or(FormulaError::LeadingZero { pos: start })?;
    Ok((value, i))
}
