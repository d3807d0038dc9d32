//! Byte-level cursor management for the lexer.
//!
//! The lexer walks the source as raw bytes, not `char`s — §4.1/§6.3 fixes
//! this: "the lexer operates on bytes; non-ASCII identifiers are out of
//! scope". A single current byte plus one byte of lookahead is all the
//! grammar needs (`!=`, `==`).

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Advances `pos`/`read_pos` by one byte and refreshes `ch`, tracking
    /// line/column as it goes.
    pub(super) fn read_char(&mut self) {
        if let Some(prev) = self.ch {
            if prev == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.ch = self.input.get(self.read_pos).copied();
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    /// Looks at the next byte without consuming it. Returns `0` past EOF,
    /// matching the sentinel used for the current byte.
    pub(super) fn peek_char(&self) -> u8 {
        self.input.get(self.read_pos).copied().unwrap_or(0)
    }

    /// The current byte, or `0` (the EOF sentinel) if past the end.
    pub(super) fn current_byte(&self) -> u8 {
        self.ch.unwrap_or(0)
    }

    /// The span a single-byte token starting at the current position would carry.
    pub(super) fn current_span(&self) -> crate::token::Span {
        crate::token::Span::new(self.pos, self.line, self.column)
    }
}
