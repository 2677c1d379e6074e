//! Placeholder substitution
//!
//! Bound values replace the text of placeholder tokens before layout, so the
//! engine measures what it will actually print.

use tracing::debug;

use crate::config::Params;
use crate::dialect::DialectConfig;
use crate::lexer::{Token, TokenKind};

/// Resolves placeholder tokens against one set of bindings
///
/// Bare `?` markers consume positional values in order; explicit `?N` markers
/// address a zero-based position without moving the counter.
#[derive(Debug)]
pub struct PlaceholderResolver<'p> {
    params: &'p Params,
    config: &'p DialectConfig,
    next_index: usize,
}

impl<'p> PlaceholderResolver<'p> {
    pub fn new(params: &'p Params, config: &'p DialectConfig) -> Self {
        Self {
            params,
            config,
            next_index: 0,
        }
    }

    /// Bound value for a placeholder token, `None` when unbound or not a placeholder
    pub fn resolve(&mut self, token: &Token) -> Option<&'p str> {
        let params = self.params;
        match token.kind {
            TokenKind::IndexedPlaceholder => {
                let index = match marker_body(&token.text) {
                    "" => {
                        let index = self.next_index;
                        self.next_index += 1;
                        index
                    }
                    digits => digits.parse().ok()?,
                };
                params.indexed.get(index).map(String::as_str)
            }
            TokenKind::NamedPlaceholder => {
                let name = self.placeholder_name(&token.text);
                params.named.get(&name).map(String::as_str)
            }
            _ => None,
        }
    }

    /// `$name`, `${name}` and `$"name"` all name `name`
    pub fn placeholder_name(&self, text: &str) -> String {
        let body = marker_body(text);
        let mut chars = body.chars();
        let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
            return body.to_string();
        };

        let quoted = self
            .config
            .string_types
            .iter()
            .filter(|style| style.prefix.is_none())
            .find(|style| style.open == open && style.close == close);

        match quoted {
            Some(style) => {
                let inner = &body[open.len_utf8()..body.len() - close.len_utf8()];
                let doubled = format!("{close}{close}");
                let mut name = inner.replace(&doubled, &close.to_string());
                if style.backslash_escapes {
                    name = name.replace(&format!("\\{close}"), &close.to_string());
                }
                name
            }
            None => body.to_string(),
        }
    }
}

fn marker_body(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}

/// Replace the text of every bound placeholder; unbound ones keep their source text
pub fn substitute_placeholders(tokens: &mut [Token], params: &Params, config: &DialectConfig) {
    if params.is_empty() {
        return;
    }

    let mut resolver = PlaceholderResolver::new(params, config);
    for token in tokens.iter_mut().filter(|t| t.kind.is_placeholder()) {
        match resolver.resolve(token) {
            Some(value) => token.text = value.to_string(),
            None => debug!(placeholder = %token.text, "unresolved placeholder"),
        }
    }
}
