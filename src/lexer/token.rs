//! Token values produced by the lexer

use std::fmt;

/// Byte range of a token in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token types for the SQL lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Reserved,
    ReservedTopLevel,
    ReservedTopLevelNoIndent,
    ReservedNewline,

    // Nesting, both punctuation and keyword pairs like CASE/END
    OpenParen,
    CloseParen,

    // Comments
    LineComment,
    BlockComment,

    // Literals and names
    QuotedString,
    IndexedPlaceholder,
    NamedPlaceholder,
    Operator,
    Word,
    Number,

    // Special
    Whitespace,
    End,
}

impl TokenKind {
    /// Any of the four reserved-word categories
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Reserved
                | TokenKind::ReservedTopLevel
                | TokenKind::ReservedTopLevelNoIndent
                | TokenKind::ReservedNewline
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            TokenKind::IndexedPlaceholder | TokenKind::NamedPlaceholder
        )
    }

    /// Kinds that end an operand, after which `-` is a binary operator
    pub fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::Word
                | TokenKind::Number
                | TokenKind::QuotedString
                | TokenKind::CloseParen
                | TokenKind::IndexedPlaceholder
                | TokenKind::NamedPlaceholder
        )
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Reserved => "reserved",
            TokenKind::ReservedTopLevel => "reserved top-level",
            TokenKind::ReservedTopLevelNoIndent => "reserved top-level (no indent)",
            TokenKind::ReservedNewline => "reserved newline",
            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::QuotedString => "string",
            TokenKind::IndexedPlaceholder => "indexed placeholder",
            TokenKind::NamedPlaceholder => "named placeholder",
            TokenKind::Operator => "operator",
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Whitespace => "whitespace",
            TokenKind::End => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Check for an operator token with exactly this text
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    /// Case-insensitive keyword comparison, ignoring the token kind
    pub fn text_eq_ignore_case(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }

    /// An open or close paren written as a keyword (`CASE`, `END`) rather than punctuation
    pub fn is_keyword_paren(&self) -> bool {
        matches!(self.kind, TokenKind::OpenParen | TokenKind::CloseParen)
            && self.text.chars().any(char::is_alphabetic)
    }
}
