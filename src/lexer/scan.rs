//! Low-level scanners
//!
//! Each scanner looks at the remaining input and returns the byte length of
//! the token it recognizes, or `None`. A returned length is never zero.

use crate::dialect::{DialectConfig, QuoteStyle};

pub(crate) fn whitespace(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i)
}

/// Line comments stop before the line terminator
pub(crate) fn line_comment(rest: &str, types: &[&str]) -> Option<usize> {
    types
        .iter()
        .find(|marker| !marker.is_empty() && rest.starts_with(**marker))
        .map(|_| rest.find(|c: char| c == '\n' || c == '\r').unwrap_or(rest.len()))
}

/// Unterminated block comments run to end of input
pub(crate) fn block_comment(rest: &str, types: &[(&str, &str)]) -> Option<usize> {
    types
        .iter()
        .find(|(open, _)| !open.is_empty() && rest.starts_with(*open))
        .map(|(open, close)| {
            rest[open.len()..]
                .find(close)
                .map_or(rest.len(), |i| open.len() + i + close.len())
        })
}

/// Quoted literal in the given style; unterminated literals run to end of input
pub(crate) fn quoted(rest: &str, style: &QuoteStyle) -> Option<usize> {
    let mut chars = rest.char_indices().peekable();

    if let Some(prefix) = style.prefix {
        match chars.next() {
            Some((_, c)) if c.eq_ignore_ascii_case(&prefix) => {}
            _ => return None,
        }
    }
    match chars.next() {
        Some((_, c)) if c == style.open => {}
        _ => return None,
    }

    loop {
        let mut closed = false;
        while let Some((_, c)) = chars.next() {
            if style.backslash_escapes && c == '\\' {
                chars.next();
            } else if c == style.close {
                closed = true;
                break;
            }
        }
        if !closed {
            return Some(rest.len());
        }
        match chars.peek() {
            Some(&(_, c)) if c == style.continuation => {
                chars.next();
            }
            Some(&(i, _)) => return Some(i),
            None => return Some(rest.len()),
        }
    }
}

fn is_placeholder_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '$')
}

/// `$name`, or a marker followed by a quoted name such as `${name}`
pub(crate) fn named_placeholder(rest: &str, config: &DialectConfig) -> Option<usize> {
    let marker = rest.chars().next()?;
    if !config.named_placeholder_types.contains(&marker) {
        return None;
    }
    let after = &rest[marker.len_utf8()..];

    let name = after
        .char_indices()
        .find(|(_, c)| !is_placeholder_name_char(*c))
        .map_or(after.len(), |(i, _)| i);
    if name > 0 {
        return Some(marker.len_utf8() + name);
    }

    config
        .string_types
        .iter()
        .filter(|style| style.prefix.is_none())
        .find_map(|style| quoted(after, style))
        .map(|len| marker.len_utf8() + len)
}

/// `?` or `?3`
pub(crate) fn indexed_placeholder(rest: &str, config: &DialectConfig) -> Option<usize> {
    let marker = rest.chars().next()?;
    if !config.indexed_placeholder_types.contains(&marker) {
        return None;
    }
    let after = &rest[marker.len_utf8()..];
    let digits = after.bytes().take_while(u8::is_ascii_digit).count();
    Some(marker.len_utf8() + digits)
}

/// Punctuation matches literally, keyword pairs only on word boundaries
pub(crate) fn paren(rest: &str, parens: &[&str], config: &DialectConfig) -> Option<usize> {
    parens
        .iter()
        .filter(|paren| !paren.is_empty())
        .filter(|paren| {
            if paren.chars().all(|c| config.is_word_char(c)) {
                rest.len() >= paren.len()
                    && rest.as_bytes()[..paren.len()].eq_ignore_ascii_case(paren.as_bytes())
                    && !rest[paren.len()..]
                        .chars()
                        .next()
                        .is_some_and(|c| config.is_word_char(c))
            } else {
                rest.starts_with(**paren)
            }
        })
        .map(|paren| paren.len())
        .max()
}

/// Decimal, hex (`0x1F`) or binary (`0b101`) literal, optionally with a leading `-`
pub(crate) fn number(rest: &str, allow_sign: bool, config: &DialectConfig) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = usize::from(allow_sign && bytes.first() == Some(&b'-'));
    if !digit_at(i) {
        return None;
    }

    let radix_digits = match (bytes[i], bytes.get(i + 1)) {
        (b'0', Some(b'x' | b'X')) => Some(u8::is_ascii_hexdigit as fn(&u8) -> bool),
        (b'0', Some(b'b' | b'B')) => Some((|b: &u8| matches!(b, b'0' | b'1')) as fn(&u8) -> bool),
        _ => None,
    };

    match radix_digits {
        Some(is_digit) if bytes.get(i + 2).is_some_and(is_digit) => {
            i += 2;
            while bytes.get(i).is_some_and(is_digit) {
                i += 1;
            }
        }
        _ => {
            while digit_at(i) {
                i += 1;
            }
            if bytes.get(i) == Some(&b'.') && digit_at(i + 1) {
                i += 1;
                while digit_at(i) {
                    i += 1;
                }
            }
            if matches!(bytes.get(i), Some(b'e' | b'E')) {
                let mut j = i + 1;
                if matches!(bytes.get(j), Some(b'+' | b'-')) {
                    j += 1;
                }
                if digit_at(j) {
                    i = j;
                    while digit_at(i) {
                        i += 1;
                    }
                }
            }
        }
    }

    // 1day is a word, not a number followed by a word
    if rest[i..].chars().next().is_some_and(|c| config.is_word_char(c)) {
        return None;
    }
    Some(i)
}

/// Longest operator from a list sorted longest first
pub(crate) fn operator(rest: &str, operators: &[&str]) -> Option<usize> {
    operators
        .iter()
        .find(|op| !op.is_empty() && rest.starts_with(**op))
        .map(|op| op.len())
}

pub(crate) fn word(rest: &str, config: &DialectConfig) -> usize {
    rest.char_indices()
        .find(|(_, c)| !config.is_word_char(*c))
        .map_or(rest.len(), |(i, _)| i)
}
