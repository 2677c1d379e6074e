//! Lookahead/lookbehind over classified tokens
//!
//! Dialects disambiguate keywords through a [`TokenOverride`] hook. The hook
//! gets a cursor into the finished token array and returns a new kind for the
//! current token, or `None` to keep it.

use tracing::trace;

use super::token::{Token, TokenKind};

/// Per-dialect reclassification hook
pub type TokenOverride = fn(&TokenCursor<'_>) -> Option<TokenKind>;

/// A position in an immutable token slice
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// Returns `None` when `index` is out of bounds
    pub fn new(tokens: &'a [Token], index: usize) -> Option<Self> {
        (index < tokens.len()).then_some(Self { tokens, index })
    }

    pub fn current(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    /// The token `n` positions after the current one
    pub fn look_ahead(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.index.checked_add(n)?)
    }

    /// The token `n` positions before the current one
    pub fn look_behind(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.index.checked_sub(n)?)
    }
}

/// Run the hook over every token
///
/// All decisions are taken against the tokens as classified, so one override
/// never influences another.
pub fn apply_overrides(mut tokens: Vec<Token>, hook: Option<TokenOverride>) -> Vec<Token> {
    let Some(hook) = hook else {
        return tokens;
    };

    let kinds: Vec<Option<TokenKind>> = (0..tokens.len())
        .map(|index| TokenCursor::new(&tokens, index).and_then(|cursor| hook(&cursor)))
        .collect();

    for (index, (token, kind)) in tokens.iter_mut().zip(kinds).enumerate() {
        if let Some(kind) = kind.filter(|kind| *kind != token.kind) {
            trace!(index, from = %token.kind, to = %kind, text = %token.text, "token override");
            token.kind = kind;
        }
    }

    tokens
}
