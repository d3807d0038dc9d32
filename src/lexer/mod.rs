//! Lexical analyzer: source text → token stream.
//!
//! The [`Lexer`] exposes a single operation, [`Lexer::next_token`], matching
//! §4.1's contract: one token at a time, one byte of lookahead, no retained
//! history. The parser drives it lazily, holding one token of its own
//! lookahead on top.
//!
//! # Module Structure
//!
//! - `cursor` — byte-level position tracking
//! - `skip` — whitespace/comment skipping
//! - `tokens` — token recognition and reading
//!
//! An `Illegal` token carries no diagnostic of its own — the parser's
//! prefix dispatch has no handler for it and reports it the same way it
//! reports any other unexpected token, via `ParseError::no_prefix_parser`.

mod cursor;
mod skip;
mod tokens;


use crate::token::Token;

/// A byte-oriented tokenizer over a source string.
///
/// `pos`/`read_pos` track the current and next byte offsets; `ch` mirrors
/// the byte at `pos` (`None` past the end, surfaced as `0` through
/// [`Lexer::current_byte`]).
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    read_pos: usize,
    ch: Option<u8>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`, positioned before the first byte.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.as_bytes(),
            pos: 0,
            read_pos: 0,
            ch: None,
            line: 1,
            column: 1,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenizes the entire input, for lexer mode and tests. Always ends
    /// with (and then repeats) `Eof` — this stops at the first `Eof`.
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, crate::token::TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
