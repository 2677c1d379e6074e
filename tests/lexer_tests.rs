//! Lexer/Tokenizer tests for sqlshape
//!
//! Tests for the SQL tokenization layer and the dialect reclassification hook.

use sqlshape::dialect::{self, Dialect};
use sqlshape::lexer::{apply_overrides, tokenize, Lexer, Token, TokenKind};

fn sql() -> &'static Dialect {
    dialect::lookup("sql").expect("sql dialect")
}

fn spark() -> &'static Dialect {
    dialect::lookup("spark").expect("spark dialect")
}

/// (kind, text) pairs without the trailing End token
fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::End)
        .map(|t| (t.kind, t.text.as_str()))
        .collect()
}

mod tokenize_keywords {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn categories() {
        let tokens = tokenize("SELECT a FROM t UNION ALL SELECT b WHERE c AND d", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::ReservedTopLevel, "SELECT"),
                (TokenKind::Word, "a"),
                (TokenKind::ReservedTopLevel, "FROM"),
                (TokenKind::Word, "t"),
                (TokenKind::ReservedTopLevelNoIndent, "UNION ALL"),
                (TokenKind::ReservedTopLevel, "SELECT"),
                (TokenKind::Word, "b"),
                (TokenKind::ReservedTopLevel, "WHERE"),
                (TokenKind::Word, "c"),
                (TokenKind::ReservedNewline, "AND"),
                (TokenKind::Word, "d"),
            ]
        );
    }

    #[test]
    fn keywords_case_insensitive() {
        for input in ["SELECT", "select", "SeLeCt"] {
            let tokens = tokenize(input, sql());
            assert_eq!(tokens[0].kind, TokenKind::ReservedTopLevel);
            assert_eq!(tokens[0].text, input);
        }
    }

    #[test]
    fn longest_join_phrase() {
        let tokens = tokenize("a RIGHT OUTER JOIN b RIGHT SEMI JOIN c", spark());
        assert_eq!(tokens[1].kind, TokenKind::ReservedNewline);
        assert_eq!(tokens[1].text, "RIGHT OUTER JOIN");
        assert_eq!(tokens[3].kind, TokenKind::ReservedNewline);
        assert_eq!(tokens[3].text, "RIGHT SEMI JOIN");
    }

    #[test]
    fn alter_table_beats_alter() {
        let tokens = tokenize("ALTER TABLE t", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::ReservedTopLevel, "ALTER TABLE"),
                (TokenKind::Word, "t"),
            ]
        );
    }

    #[test]
    fn keyword_prefix_is_a_word() {
        let tokens = tokenize("selection fromage", sql());
        assert_eq!(
            kinds(&tokens),
            vec![(TokenKind::Word, "selection"), (TokenKind::Word, "fromage")]
        );
    }

    #[test]
    fn keyword_after_dot_is_a_word() {
        let tokens = tokenize("t.select", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Word, "t"),
                (TokenKind::Operator, "."),
                (TokenKind::Word, "select"),
            ]
        );
    }

    #[test]
    fn case_end_are_parens() {
        let tokens = tokenize("CASE x END", sql());
        assert_eq!(tokens[0].kind, TokenKind::OpenParen);
        assert_eq!(tokens[2].kind, TokenKind::CloseParen);
    }
}

mod tokenize_literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strings() {
        let tokens = tokenize(r#"'it''s' "a\"b" `c` N'n' [d]"#, sql());
        assert!(tokens[..5]
            .iter()
            .all(|t| t.kind == TokenKind::QuotedString));
        assert_eq!(tokens[0].text, "'it''s'");
        assert_eq!(tokens[1].text, r#""a\"b""#);
        assert_eq!(tokens[3].text, "N'n'");
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let tokens = tokenize("SELECT 'abc", sql());
        assert_eq!(tokens[1].kind, TokenKind::QuotedString);
        assert_eq!(tokens[1].text, "'abc");
    }

    #[test]
    fn numbers_and_signs() {
        let tokens = tokenize("x = -1.5e3 - 2 + 0x1F", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Word, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "-1.5e3"),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "2"),
                (TokenKind::Operator, "+"),
                (TokenKind::Number, "0x1F"),
            ]
        );
    }

    #[test]
    fn multi_char_operators() {
        let tokens = tokenize("a <> b >= c :: d", sql());
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Operator)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(ops, vec!["<>", ">=", "::"]);
    }

    #[test]
    fn unknown_character_is_an_operator() {
        let tokens = tokenize("a § b", sql());
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, "§");
    }

    #[test]
    fn comments() {
        let tokens = tokenize("a -- note\n/* block */ b", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Word, "a"),
                (TokenKind::LineComment, "-- note"),
                (TokenKind::BlockComment, "/* block */"),
                (TokenKind::Word, "b"),
            ]
        );
    }

    #[test]
    fn placeholders() {
        let tokens = tokenize("? ?2 @name :other", sql());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::IndexedPlaceholder, "?"),
                (TokenKind::IndexedPlaceholder, "?2"),
                (TokenKind::NamedPlaceholder, "@name"),
                (TokenKind::NamedPlaceholder, ":other"),
            ]
        );

        let tokens = tokenize("$a ${b}", spark());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::NamedPlaceholder, "$a"),
                (TokenKind::NamedPlaceholder, "${b}"),
            ]
        );
    }
}

mod token_stream {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_tokens_cover_the_input() {
        let input = "SELECT a,\tb -- c\nFROM t WHERE x IN (1, 2) ;";
        let rebuilt: String = Lexer::new(input, sql()).map(|t| t.text).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn tokenize_ends_with_end() {
        let input = "SELECT 1 ";
        let tokens = tokenize(input, sql());
        let last = tokens.last().expect("end token");
        assert_eq!(last.kind, TokenKind::End);
        assert_eq!(last.span.start, input.len());
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Whitespace));
    }
}

mod overrides {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classified(input: &str) -> Vec<Token> {
        let dialect = spark();
        apply_overrides(tokenize(input, dialect), dialect.config().token_override)
    }

    #[test]
    fn window_call_is_not_a_clause() {
        let tokens = classified("SELECT window(time, '1 hour')");
        assert_eq!(tokens[1].text, "window");
        assert_eq!(tokens[1].kind, TokenKind::Reserved);
    }

    #[test]
    fn window_clause_stays_top_level() {
        let tokens = classified("FROM t WINDOW w AS (ORDER BY x)");
        assert_eq!(tokens[2].kind, TokenKind::ReservedTopLevel);
    }

    #[test]
    fn end_after_dot_is_a_field() {
        let tokens = classified("w.end");
        assert_eq!(tokens[2].text, "end");
        assert_eq!(tokens[2].kind, TokenKind::Word);
    }

    #[test]
    fn case_end_untouched() {
        let tokens = classified("CASE WHEN a THEN b END");
        assert_eq!(tokens[5].kind, TokenKind::CloseParen);
    }

    #[test]
    fn generic_dialect_has_no_hook() {
        assert!(sql().config().token_override.is_none());
    }
}
