//! Token navigation helpers: one token of lookahead on top of the lexer's own.

use super::error::ParseError;
use super::Parser;
use crate::token::{Span, TokenKind};

impl<'a> Parser<'a> {
    pub(super) fn current_span(&self) -> Span {
        self.current.span
    }

    pub(super) fn next_span(&self) -> Span {
        self.next.span
    }

    /// Advances the lookahead pair, pulling a fresh token from the lexer.
    pub(super) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.next, self.lexer.next_token());
    }

    /// Consumes an optional trailing `;`. Called right after
    /// `parse_expression`, which leaves `current` on the value's last token
    /// and the `;` (if any) still in `next` — so this checks `next`, not
    /// `current`.
    pub(super) fn skip_optional_semicolon(&mut self) {
        if self.next_is(&TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Requires `next` to be `Ident`, advances, and returns the name.
    pub(super) fn expect_ident(&mut self) -> Option<String> {
        match &self.next.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Some(name)
            }
            other => {
                self.errors
                    .push(ParseError::expected("IDENT", other, self.next_span()));
                None
            }
        }
    }

    /// Requires `next` to match `kind` (compared by discriminant, ignoring
    /// any payload) and advances if so.
    pub(super) fn expect_next(&mut self, kind: &TokenKind) -> bool {
        if self.next_is(kind) {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::expected(
                kind.name(),
                &self.next.kind,
                self.next_span(),
            ));
            false
        }
    }

    pub(super) fn next_is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.next.kind) == std::mem::discriminant(kind)
    }
}
