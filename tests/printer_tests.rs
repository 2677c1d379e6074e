//! Printer tests for sqlshape
//!
//! Tests for the indentation-aware output buffer and its block stack.

use sqlshape::formatter::printer::{BlockKind, Printer};

mod printer_basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_printer_empty() {
        let printer = Printer::new("  ");
        assert_eq!(printer.finish(), "");
    }

    #[test]
    fn write_text() {
        let mut printer = Printer::new("  ");
        printer.write("hello");
        printer.space();
        printer.write("world");
        assert_eq!(printer.finish(), "hello world");
    }

    #[test]
    fn newline_trims_trailing_space() {
        let mut printer = Printer::new("  ");
        printer.write("line1");
        printer.space();
        printer.newline();
        printer.write("line2");
        assert_eq!(printer.finish(), "line1\nline2");
    }

    #[test]
    fn repeated_newlines_do_not_leave_blank_lines() {
        let mut printer = Printer::new("  ");
        printer.write("a");
        printer.newline();
        printer.push(BlockKind::TopLevel);
        printer.newline();
        printer.write("b");
        assert_eq!(printer.finish(), "a\n  b");
    }

    #[test]
    fn line_breaks_are_literal() {
        let mut printer = Printer::new("  ");
        printer.write("a;");
        printer.line_breaks(3);
        printer.write("b");
        assert_eq!(printer.finish(), "a;\n\n\nb");
    }

    #[test]
    fn custom_indent_unit() {
        let mut printer = Printer::new("\t");
        printer.push(BlockKind::TopLevel);
        printer.push(BlockKind::Paren);
        printer.write("x");
        printer.newline();
        printer.write("y");
        assert_eq!(printer.finish(), "x\n\t\ty");
    }
}

mod trimming {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_trim_reaches_into_indentation() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::TopLevel);
        printer.write("SELECT");
        printer.newline();
        printer.trim_trailing_spaces();
        printer.write(";");
        assert_eq!(printer.finish(), "SELECT\n;");
    }

    #[test]
    fn pending_trim_stops_at_indentation() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::TopLevel);
        printer.write("SELECT");
        printer.newline();
        printer.trim_pending_space();
        printer.write("(");
        assert_eq!(printer.finish(), "SELECT\n  (");
    }

    #[test]
    fn at_line_start_tracks_indentation() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::Paren);
        printer.write("x");
        assert!(!printer.at_line_start());
        printer.newline();
        assert!(printer.at_line_start());
    }
}

mod block_stack {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pop_top_level_only_pops_clauses() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::Paren);
        printer.pop_top_level();
        assert_eq!(printer.depth(), 1);
        printer.push(BlockKind::TopLevel);
        printer.pop_top_level();
        assert_eq!(printer.depth(), 1);
    }

    #[test]
    fn pop_block_closes_inner_clauses() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::TopLevel);
        printer.push(BlockKind::Paren);
        printer.push(BlockKind::TopLevel);
        printer.pop_block();
        assert_eq!(printer.depth(), 1);
    }

    #[test]
    fn mismatched_close_pops_innermost_block() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::Paren);
        printer.push(BlockKind::Case);
        printer.pop_block();
        assert_eq!(printer.depth(), 1);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut printer = Printer::new("  ");
        printer.pop_block();
        printer.pop_top_level();
        assert_eq!(printer.depth(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut printer = Printer::new("  ");
        printer.push(BlockKind::TopLevel);
        printer.push(BlockKind::Case);
        printer.reset();
        assert_eq!(printer.depth(), 0);
    }
}
