//! SQL formatting / pretty-printing logic
//!
//! Formatting is a single pass over the classified tokens. Each token kind has
//! one layout rule; the only lookahead is the inline check made at every open
//! paren.

pub mod inline;
pub mod placeholder;
pub mod printer;
pub mod rules;

use tracing::debug;

use crate::config::{FormatOptions, KeywordCase};
use crate::dialect;
use crate::error::Result;
use crate::lexer::{apply_overrides, tokenize, Token, TokenKind};
use inline::InlineBlock;
use placeholder::substitute_placeholders;
use printer::{BlockKind, Printer};

/// Format SQL string
pub fn format_sql(input: &str, options: &FormatOptions) -> Result<String> {
    // Step 1: Resolve the dialect and reject bad options before touching input
    let dialect = dialect::lookup(&options.dialect)?;
    options.validate()?;
    debug!(dialect = dialect.name(), input_len = input.len(), "formatting");

    // Step 2: Tokenize and let the dialect reclassify ambiguous keywords
    let tokens = tokenize(input, dialect);
    let mut tokens = apply_overrides(tokens, dialect.config().token_override);

    // Step 3: Bind placeholder values
    substitute_placeholders(&mut tokens, &options.params, dialect.config());

    // Step 4: Lay out
    let output = Formatter::new(&tokens, options).format();
    debug!(tokens = tokens.len(), output_len = output.len(), "formatted");

    Ok(output)
}

/// Token-stream formatter
pub struct Formatter<'a> {
    tokens: &'a [Token],
    keyword_case: KeywordCase,
    lines_between_queries: usize,
    printer: Printer<'a>,
    inline: InlineBlock,
    /// Most recent reserved word of any category
    previous_reserved: Option<&'a Token>,
}

impl<'a> Formatter<'a> {
    pub fn new(tokens: &'a [Token], options: &'a FormatOptions) -> Self {
        Self {
            tokens,
            keyword_case: options.keyword_case,
            lines_between_queries: options.lines_between_queries,
            printer: Printer::new(&options.indent),
            inline: InlineBlock::new(options.line_width),
            previous_reserved: None,
        }
    }

    pub fn format(mut self) -> String {
        for index in 0..self.tokens.len() {
            self.format_token(index);
        }
        self.printer.finish()
    }

    fn format_token(&mut self, index: usize) {
        let tokens = self.tokens;
        let token = &tokens[index];

        match token.kind {
            TokenKind::Whitespace | TokenKind::End => {}
            TokenKind::LineComment => {
                self.printer.write(&token.text);
                self.printer.newline();
            }
            TokenKind::BlockComment => {
                self.printer.newline();
                self.printer.write(&token.text);
                self.printer.newline();
            }
            TokenKind::ReservedTopLevel => {
                self.previous_reserved = Some(token);
                self.printer.pop_top_level();
                self.printer.newline();
                self.printer.push(BlockKind::TopLevel);
                self.write_keyword(token);
                self.printer.newline();
            }
            TokenKind::ReservedTopLevelNoIndent => {
                self.previous_reserved = Some(token);
                self.printer.pop_top_level();
                self.printer.newline();
                self.write_keyword(token);
                self.printer.newline();
            }
            TokenKind::ReservedNewline => {
                self.previous_reserved = Some(token);
                if !self.is_and_after_between(index) {
                    self.printer.newline();
                }
                self.write_keyword(token);
                self.printer.space();
            }
            TokenKind::Reserved => {
                self.previous_reserved = Some(token);
                self.write_keyword(token);
                self.printer.space();
            }
            TokenKind::OpenParen => self.format_open_paren(index),
            TokenKind::CloseParen => self.format_close_paren(token),
            TokenKind::Operator => self.format_operator(token),
            TokenKind::QuotedString
            | TokenKind::IndexedPlaceholder
            | TokenKind::NamedPlaceholder
            | TokenKind::Word
            | TokenKind::Number => {
                self.printer.write(&token.text);
                self.printer.space();
            }
        }
    }

    fn write_keyword(&mut self, token: &Token) {
        let text = rules::token_text(token, self.keyword_case);
        self.printer.write(&text);
    }

    /// `x BETWEEN a AND b` keeps its AND on the same line
    fn is_and_after_between(&self, index: usize) -> bool {
        self.tokens[index].text_eq_ignore_case("AND")
            && index
                .checked_sub(2)
                .and_then(|i| self.tokens.get(i))
                .is_some_and(|t| t.text_eq_ignore_case("BETWEEN"))
    }

    fn format_open_paren(&mut self, index: usize) {
        let tokens = self.tokens;
        let token = &tokens[index];
        let previous = index.checked_sub(1).map(|i| &tokens[i]);

        // `count(` hugs its function name unless the source had a space
        let touches_previous = previous.is_some_and(|p| p.span.end == token.span.start);
        let keeps_space = previous.is_some_and(|p| {
            matches!(
                p.kind,
                TokenKind::OpenParen | TokenKind::LineComment | TokenKind::Operator
            )
        });
        if touches_previous && !keeps_space {
            self.printer.trim_pending_space();
        }

        self.write_keyword(token);

        self.inline.begin_if_possible(tokens, index);
        if self.inline.is_active() {
            if token.is_keyword_paren() {
                self.printer.space();
            }
        } else {
            let kind = if token.is_keyword_paren() {
                BlockKind::Case
            } else {
                BlockKind::Paren
            };
            self.printer.push(kind);
            self.printer.newline();
        }
    }

    fn format_close_paren(&mut self, token: &Token) {
        if self.inline.is_active() {
            self.inline.end();
            self.printer.trim_trailing_spaces();
            if token.is_keyword_paren() {
                self.printer.space();
            }
        } else {
            self.printer.pop_block();
            self.printer.newline();
        }
        self.write_keyword(token);
        self.printer.space();
    }

    fn format_operator(&mut self, token: &Token) {
        match token.text.as_str() {
            "," => {
                self.printer.trim_trailing_spaces();
                self.printer.write(",");
                self.printer.space();
                let after_limit = self
                    .previous_reserved
                    .is_some_and(|t| t.text_eq_ignore_case("LIMIT"));
                if !self.inline.is_active() && !after_limit {
                    self.printer.newline();
                }
            }
            ":" => {
                self.printer.trim_trailing_spaces();
                self.printer.write(":");
                self.printer.space();
            }
            "." => {
                self.printer.trim_trailing_spaces();
                self.printer.write(".");
            }
            ";" => {
                self.printer.reset();
                self.printer.trim_trailing_spaces();
                self.printer.write(";");
                self.printer.line_breaks(self.lines_between_queries.max(1));
            }
            text => {
                self.printer.write(text);
                self.printer.space();
            }
        }
    }
}
