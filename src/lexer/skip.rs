//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Runs the pre-token skip sequence from §4.1: spaces/tabs/CR (never
    /// `\n`), then if a `//` comment follows, consume to end of line plus
    /// the line break itself, then skip whitespace again — looping, since a
    /// comment can be followed by more whitespace and another comment.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.current_byte() == b'/' && self.peek_char() == b'/' {
                while !matches!(self.current_byte(), b'\n' | 0) {
                    self.read_char();
                }
                if self.current_byte() == b'\n' {
                    self.read_char();
                }
                continue;
            }
            break;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_byte(), b' ' | b'\t' | b'\r') {
            self.read_char();
        }
    }
}
