//! Reserved phrase matching
//!
//! Phrases are bucketed by their first word so a lookup only tries the
//! handful of phrases that can possibly start at the current position.

use std::collections::HashMap;

use super::token::TokenKind;
use crate::dialect::DialectConfig;

#[derive(Debug, Clone)]
struct Phrase {
    parts: Vec<&'static str>,
    kind: TokenKind,
}

/// All reserved phrases of a dialect, keyed by uppercase first word
#[derive(Debug, Clone)]
pub(crate) struct ReservedIndex {
    by_first_word: HashMap<String, Vec<Phrase>>,
    special_word_chars: &'static [char],
}

/// Equal-length matches go to the category that affects layout the most
fn priority(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::ReservedTopLevel => 3,
        TokenKind::ReservedNewline => 2,
        TokenKind::ReservedTopLevelNoIndent => 1,
        _ => 0,
    }
}

impl ReservedIndex {
    pub(crate) fn new(config: &'static DialectConfig) -> Self {
        let mut index = Self {
            by_first_word: HashMap::new(),
            special_word_chars: config.special_word_chars,
        };

        let lists = [
            (config.reserved_top_level_words, TokenKind::ReservedTopLevel),
            (config.reserved_newline_words, TokenKind::ReservedNewline),
            (
                config.reserved_top_level_words_no_indent,
                TokenKind::ReservedTopLevelNoIndent,
            ),
            (config.reserved_words, TokenKind::Reserved),
        ];
        for (words, kind) in lists {
            for &phrase in words {
                index.insert(phrase, kind);
            }
        }

        index
    }

    fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.special_word_chars.contains(&c)
    }

    fn leading_word<'s>(&self, text: &'s str) -> &'s str {
        let end = text
            .char_indices()
            .find(|(_, c)| !self.is_word_char(*c))
            .map_or(text.len(), |(i, _)| i);
        &text[..end]
    }

    fn insert(&mut self, phrase: &'static str, kind: TokenKind) {
        let parts: Vec<&'static str> = phrase.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return;
        };
        let key = self.leading_word(first).to_ascii_uppercase();
        if key.is_empty() {
            return;
        }
        self.by_first_word
            .entry(key)
            .or_default()
            .push(Phrase { parts, kind });
    }

    /// Longest reserved phrase starting at `rest`, as (kind, byte length)
    pub(crate) fn longest_match(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let word = self.leading_word(rest);
        if word.is_empty() {
            return None;
        }
        let candidates = self.by_first_word.get(&word.to_ascii_uppercase())?;

        candidates
            .iter()
            .filter_map(|phrase| {
                self.match_phrase(rest, &phrase.parts)
                    .map(|len| (phrase.kind, len))
            })
            .max_by_key(|(kind, len)| (*len, priority(*kind)))
    }

    fn match_phrase(&self, rest: &str, parts: &[&str]) -> Option<usize> {
        let bytes = rest.as_bytes();
        let mut end = 0;

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                let gap: usize = rest[end..]
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .map(char::len_utf8)
                    .sum();
                if gap == 0 {
                    return None;
                }
                end += gap;
            }
            let part_end = end + part.len();
            if part_end > bytes.len() || !bytes[end..part_end].eq_ignore_ascii_case(part.as_bytes()) {
                return None;
            }
            end = part_end;
        }

        // "GROUP BY" must not match the front of "GROUP BYTES"
        let ends_in_word = parts
            .last()
            .and_then(|part| part.chars().last())
            .is_some_and(|c| self.is_word_char(c));
        if ends_in_word && rest[end..].chars().next().is_some_and(|c| self.is_word_char(c)) {
            return None;
        }

        Some(end)
    }
}
