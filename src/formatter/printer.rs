//! Indentation-aware output buffer
//!
//! The printer owns the output text and the indentation stack. Depth is the
//! stack height; every line break writes one indent unit per entry.

/// What opened an indentation level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A clause keyword such as `SELECT` or `WHERE`
    TopLevel,
    /// A punctuation bracket rendered over several lines
    Paren,
    /// A keyword bracket such as `CASE`
    Case,
}

/// Pretty printer state
#[derive(Debug)]
pub struct Printer<'o> {
    output: String,
    indent: &'o str,
    stack: Vec<BlockKind>,
    /// Offset just after the last line break
    line_begin: usize,
    /// Offset just after the indentation of the current line
    line_start: usize,
}

impl<'o> Printer<'o> {
    pub fn new(indent: &'o str) -> Self {
        Self {
            output: String::new(),
            indent,
            stack: Vec::new(),
            line_begin: 0,
            line_start: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Nothing but indentation written on the current line
    pub fn at_line_start(&self) -> bool {
        self.output.len() == self.line_start
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn space(&mut self) {
        self.output.push(' ');
    }

    /// Drop trailing blanks on the current line, indentation included
    pub fn trim_trailing_spaces(&mut self) {
        let kept = self.output[self.line_begin..].trim_end().len();
        self.output.truncate(self.line_begin + kept);
        self.line_start = self.line_start.min(self.output.len());
    }

    /// Drop trailing blanks written after the indentation
    pub fn trim_pending_space(&mut self) {
        let kept = self.output[self.line_start..].trim_end().len();
        self.output.truncate(self.line_start + kept);
    }

    /// Start a new line at the current depth
    ///
    /// Breaking an empty line only re-indents it, so consecutive breaks never
    /// produce blank lines.
    pub fn newline(&mut self) {
        if self.at_line_start() {
            self.output.truncate(self.line_begin);
        } else {
            self.trim_trailing_spaces();
            self.output.push('\n');
            self.line_begin = self.output.len();
        }
        for _ in 0..self.stack.len() {
            self.output.push_str(self.indent);
        }
        self.line_start = self.output.len();
    }

    /// Write `count` raw line breaks, leaving the cursor unindented
    pub fn line_breaks(&mut self, count: usize) {
        for _ in 0..count {
            self.output.push('\n');
        }
        self.line_begin = self.output.len();
        self.line_start = self.line_begin;
    }

    pub fn push(&mut self, kind: BlockKind) {
        self.stack.push(kind);
    }

    /// Close the current clause, if the innermost level is one
    pub fn pop_top_level(&mut self) {
        if self.stack.last() == Some(&BlockKind::TopLevel) {
            self.stack.pop();
        }
    }

    /// Close the innermost bracket along with the clauses opened inside it
    pub fn pop_block(&mut self) {
        while let Some(kind) = self.stack.pop() {
            if kind != BlockKind::TopLevel {
                break;
            }
        }
    }

    /// Forget all open levels
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Get the output string
    pub fn finish(self) -> String {
        self.output.trim().to_string()
    }
}
