//! Spark SQL
//!
//! Spark reuses a few keywords as names: `window(...)` is a function and
//! `window(...).end` is a struct field. [`token_override`] handles both.

use super::{DialectConfig, QuoteStyle};
use crate::lexer::cursor::TokenCursor;
use crate::lexer::token::TokenKind;

pub static CONFIG: DialectConfig = DialectConfig {
    name: "spark",
    reserved_words: RESERVED_WORDS,
    reserved_top_level_words: RESERVED_TOP_LEVEL_WORDS,
    reserved_top_level_words_no_indent: RESERVED_TOP_LEVEL_WORDS_NO_INDENT,
    reserved_newline_words: RESERVED_NEWLINE_WORDS,
    string_types: &[
        QuoteStyle::DOUBLE,
        QuoteStyle::SINGLE,
        QuoteStyle::BACKTICK,
        QuoteStyle::BRACE,
    ],
    open_parens: &["(", "CASE"],
    close_parens: &[")", "END"],
    indexed_placeholder_types: &['?'],
    named_placeholder_types: &['$'],
    line_comment_types: &["--"],
    block_comment_types: &[("/*", "*/")],
    operators: &["!=", "<=>", "&&", "||", "==", "->"],
    special_word_chars: &[],
    token_override: Some(token_override),
};

/// Reclassify keywords that Spark also uses as function or field names
pub fn token_override(cursor: &TokenCursor<'_>) -> Option<TokenKind> {
    let token = cursor.current();

    if token.kind == TokenKind::ReservedTopLevel
        && token.text_eq_ignore_case("WINDOW")
        && cursor
            .look_ahead(1)
            .is_some_and(|next| next.kind == TokenKind::OpenParen)
    {
        return Some(TokenKind::Reserved);
    }

    if token.kind == TokenKind::CloseParen
        && token.text_eq_ignore_case("END")
        && cursor.look_behind(1).is_some_and(|prev| prev.is_operator("."))
    {
        return Some(TokenKind::Word);
    }

    None
}

const RESERVED_WORDS: &[&str] = &[
    "ALL",
    "ALTER",
    "ANALYSE",
    "ANALYZE",
    "AS",
    "BETWEEN",
    "CASCADE",
    "CASE",
    "COLUMN",
    "COLUMNS",
    "COMMENT",
    "CONSTRAINT",
    "CONTAINS",
    "CONVERT",
    "CUME_DIST",
    "CURRENT ROW",
    "DATABASE",
    "DATABASES",
    "DAY",
    "DAYS",
    "DEFAULT",
    "DELETE",
    "DESCRIBE",
    "DISTINCT",
    "DISTINCTROW",
    "DIV",
    "DROP",
    "ELSE",
    "ENCODE",
    "END",
    "EXPLAIN",
    "EXPLODE_OUTER",
    "EXPLODE",
    "FIXED",
    "FOLLOWING",
    "FULL",
    "GREATEST",
    "HOUR_MINUTE",
    "HOUR_SECOND",
    "HOUR",
    "HOURS",
    "IF",
    "IFNULL",
    "IN",
    "INSERT",
    "INTERVAL",
    "INTO",
    "IS",
    "LEVEL",
    "MERGE",
    "MINUTE_SECOND",
    "MINUTE",
    "MONTH",
    "NATURAL",
    "NOT",
    "NOW()",
    "NTILE",
    "NULL",
    "NULLIF",
    "OFFSET",
    "ON DELETE",
    "ON UPDATE",
    "ON",
    "ONLY",
    "OPTIMIZE",
    "OVER",
    "PERCENT_RANK",
    "PRECEDING",
    "RANGE",
    "RANK",
    "RENAME",
    "ROW",
    "ROWS",
    "SECOND",
    "SEPARATOR",
    "SIZE",
    "STRING",
    "STRUCT",
    "TABLE",
    "TABLES",
    "TEMPORARY",
    "THEN",
    "TO",
    "TRAILING",
    "TRANSFORM",
    "TRUE",
    "TRUNCATE",
    "TYPE",
    "TYPES",
    "UNBOUNDED",
    "UNIQUE",
    "UNLOCK",
    "UNSIGNED",
    "USING",
    "VARIABLES",
    "VIEW",
    "WHEN",
    "WITH",
    "YEAR_MONTH",
];

const RESERVED_TOP_LEVEL_WORDS: &[&str] = &[
    "ADD",
    "AFTER",
    "ALTER COLUMN",
    "ALTER DATABASE",
    "ALTER SCHEMA",
    "ALTER TABLE",
    "CLUSTER BY",
    "CLUSTERED BY",
    "DELETE FROM",
    "DISTRIBUTE BY",
    "FROM",
    "GROUP BY",
    "HAVING",
    "INSERT INTO",
    "INSERT",
    "LIMIT",
    "OPTIONS",
    "ORDER BY",
    "PARTITION BY",
    "PARTITIONED BY",
    "RANGE",
    "ROWS",
    "SELECT",
    "SET CURRENT SCHEMA",
    "SET SCHEMA",
    "SET",
    "TBLPROPERTIES",
    "UPDATE",
    "USING",
    "VALUES",
    "WHERE",
    "WINDOW",
];

const RESERVED_TOP_LEVEL_WORDS_NO_INDENT: &[&str] = &[
    "EXCEPT ALL",
    "EXCEPT",
    "INTERSECT ALL",
    "INTERSECT",
    "UNION ALL",
    "UNION",
];

const RESERVED_NEWLINE_WORDS: &[&str] = &[
    "AND",
    "CREATE OR",
    "CREATE",
    "ELSE",
    "LATERAL VIEW",
    "OR",
    "OUTER APPLY",
    "WHEN",
    "XOR",
    // joins
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
    // non-standard joins
    "ANTI JOIN",
    "SEMI JOIN",
    "LEFT ANTI JOIN",
    "LEFT SEMI JOIN",
    "RIGHT SEMI JOIN",
    "NATURAL ANTI JOIN",
    "NATURAL FULL OUTER JOIN",
    "NATURAL INNER JOIN",
    "NATURAL LEFT ANTI JOIN",
    "NATURAL LEFT OUTER JOIN",
    "NATURAL LEFT SEMI JOIN",
    "NATURAL OUTER JOIN",
    "NATURAL RIGHT OUTER JOIN",
    "NATURAL RIGHT SEMI JOIN",
    "NATURAL SEMI JOIN",
];
