//! Property tests for sqlshape
//!
//! Formatting only ever moves whitespace around, and formatting formatted
//! output changes nothing.

use proptest::prelude::*;
use sqlshape::lexer::{tokenize, TokenKind};
use sqlshape::{dialect, format, FormatOptions};

/// Fragments that keep their meaning however whitespace is rearranged
const VOCABULARY: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "UNION ALL", "AND", "OR", "BETWEEN",
    "CASE", "WHEN", "THEN", "ELSE", "END", "AS", "IN", "NOT", "NULL", "LIMIT", "LEFT JOIN", "ON",
    "a", "b", "t", "count", "x_1", "1", "42", "2.5", "-7", "'s'", "'two words'", "(", ")", ",",
    ";", "=", "<>", "+", "-", "*", "?", "-- note\n", "/* c */",
];

fn query() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(VOCABULARY);
    let gap = prop::sample::select(&[" ", "  ", "\n", "\t", ""][..]);
    prop::collection::vec((fragment, gap), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(fragment, gap)| [fragment, gap])
            .collect()
    })
}

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Token texts with inner whitespace removed, so `GROUP  BY` and `GROUP BY` agree
fn token_texts(text: &str, name: &str) -> Vec<String> {
    let dialect = dialect::lookup(name).unwrap();
    tokenize(text, dialect)
        .into_iter()
        .filter(|token| token.kind != TokenKind::End)
        .map(|token| non_whitespace(&token.text))
        .collect()
}

proptest! {
    #[test]
    fn formatting_is_idempotent(sql in query()) {
        for dialect in ["sql", "spark"] {
            let options = FormatOptions::default().with_dialect(dialect);
            let once = format(&sql, &options).unwrap();
            let twice = format(&once, &options).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn structured_tokens_are_preserved(sql in query()) {
        for dialect in ["sql", "spark"] {
            let options = FormatOptions::default().with_dialect(dialect);
            let formatted = format(&sql, &options).unwrap();
            prop_assert_eq!(token_texts(&formatted, dialect), token_texts(&sql, dialect));
        }
    }

    // `.` joins its neighbours, so only characters survive arbitrary input

    #[test]
    fn arbitrary_content_is_preserved(sql in "[ -~\n\t]{0,120}") {
        for dialect in ["sql", "spark"] {
            let options = FormatOptions::default().with_dialect(dialect);
            let formatted = format(&sql, &options).unwrap();
            prop_assert_eq!(non_whitespace(&formatted), non_whitespace(&sql));
        }
    }
}
