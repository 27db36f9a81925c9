use std::fmt;

use super::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number `{value}`"),
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Plus => f.write_str("`+`"),
            Self::Minus => f.write_str("`-`"),
            Self::Star => f.write_str("`*`"),
            Self::Slash => f.write_str("`/`"),
            Self::Caret => f.write_str("`^`"),
            Self::LParen => f.write_str("`(`"),
            Self::RParen => f.write_str("`)`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) pos: usize,
}

/// Splits an expression into tokens.
///
/// `**` is accepted as an alias for `^`.
pub(super) fn tokenize(src: &str) -> Result<Vec<Token>, ExpressionError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if c.is_ascii_digit() || c == b'.' {
            let (value, end) = number(src, pos)?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
            pos = end;
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            let end = bytes[pos..]
                .iter()
                .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
                .map_or(bytes.len(), |n| pos + n);
            tokens.push(Token {
                kind: TokenKind::Ident(src[pos..end].to_owned()),
                pos,
            });
            pos = end;
            continue;
        }

        let (kind, width) = match c {
            b'+' => (TokenKind::Plus, 1),
            b'-' => (TokenKind::Minus, 1),
            b'*' if bytes.get(pos + 1) == Some(&b'*') => (TokenKind::Caret, 2),
            b'*' => (TokenKind::Star, 1),
            b'/' => (TokenKind::Slash, 1),
            b'^' => (TokenKind::Caret, 1),
            b'(' => (TokenKind::LParen, 1),
            b')' => (TokenKind::RParen, 1),
            _ => {
                let ch = src[pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(ExpressionError::UnexpectedChar { ch, pos });
            }
        };
        tokens.push(Token { kind, pos });
        pos += width;
    }

    Ok(tokens)
}

/// Scans a decimal literal with optional fraction and exponent.
fn number(src: &str, start: usize) -> Result<(f64, usize), ExpressionError> {
    let bytes = src.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| from + n)
    };

    let mut end = digits(start);
    if bytes.get(end) == Some(&b'.') {
        end = digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        // `2e` with no exponent digits leaves the `e` for the identifier scanner.
        if exp_end > exp {
            end = exp_end;
        }
    }

    let text = &src[start..end];
    text.parse::<f64>()
        .map(|value| (value, end))
        .map_err(|_| ExpressionError::InvalidNumber {
            text: text.to_owned(),
            pos: start,
        })
}
