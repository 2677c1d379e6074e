//! Inline parenthesized groups
//!
//! A group is kept on one line when everything up to its matching close fits
//! the width budget and contains nothing that forces a line break.

use super::rules::display_width;
use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct InlineBlock {
    line_width: usize,
    level: usize,
}

impl InlineBlock {
    pub fn new(line_width: usize) -> Self {
        Self {
            line_width,
            level: 0,
        }
    }

    /// Called at every open token; nested opens inside an inline group stay inline
    pub fn begin_if_possible(&mut self, tokens: &[Token], index: usize) {
        if self.level > 0 {
            self.level += 1;
        } else if self.fits(tokens, index) {
            self.level = 1;
        }
    }

    /// Called at every close token of an active group
    pub fn end(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.level > 0
    }

    fn fits(&self, tokens: &[Token], index: usize) -> bool {
        let mut width = 0;
        let mut level = 0usize;

        for token in tokens.iter().skip(index) {
            width += display_width(token);
            if width > self.line_width {
                return false;
            }
            match token.kind {
                TokenKind::OpenParen => level += 1,
                TokenKind::CloseParen => {
                    level = level.saturating_sub(1);
                    if level == 0 {
                        return true;
                    }
                }
                _ => {}
            }
            if forces_break(token) {
                return false;
            }
        }

        false
    }
}

fn forces_break(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::ReservedTopLevel
            | TokenKind::ReservedNewline
            | TokenKind::ReservedTopLevelNoIndent
            | TokenKind::LineComment
            | TokenKind::BlockComment
            | TokenKind::End
    ) || token.is_operator(";")
}
