//! Error handling tests for sqlshape
//!
//! Only configuration problems are errors; malformed SQL always formats.

use miette::Diagnostic;
use sqlshape::{check, format, Error, FormatOptions};

mod option_errors {
    use super::*;

    #[test]
    fn unknown_dialect() {
        let options = FormatOptions::default().with_dialect("cobol");
        let err = format("SELECT 1", &options).unwrap_err();
        assert!(matches!(&err, Error::UnknownDialect { name, .. } if name == "cobol"));
        assert_eq!(err.to_string(), "unknown SQL dialect: cobol");
    }

    #[test]
    fn unknown_dialect_diagnostic() {
        let err = sqlshape::dialect::lookup("oracle").unwrap_err();
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sqlshape::unknown_dialect"));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help, "known dialects: sql, standard, spark");
    }

    #[test]
    fn check_reports_option_errors() {
        let options = FormatOptions::default().with_dialect("");
        assert!(check("SELECT 1", &options).is_err());
    }

    #[test]
    fn non_whitespace_indent() {
        let options = FormatOptions::default().with_indent("..");
        let err = format("SELECT 1", &options).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
    }
}

mod malformed_sql {
    use super::*;

    fn formats(input: &str) {
        assert!(format(input, &FormatOptions::default()).is_ok());
        assert!(format(input, &FormatOptions::default().with_dialect("spark")).is_ok());
    }

    #[test]
    fn unclosed_parenthesis() {
        formats("SELECT (a + b FROM t");
    }

    #[test]
    fn unclosed_string() {
        formats("SELECT 'unclosed string FROM t");
    }

    #[test]
    fn unclosed_block_comment() {
        formats("SELECT /* never closed");
    }

    #[test]
    fn extra_closers() {
        formats(")) END ) SELECT");
    }

    #[test]
    fn invalid_keyword_order() {
        formats("FROM users SELECT *");
    }

    #[test]
    fn unicode_input() {
        formats("SELECT 'héllo', naïve, ✓ FROM ünïcode");
    }
}
