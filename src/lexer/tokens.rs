//! Token recognition: dispatch on the current byte and scan a token.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Produces the next token. After an `Eof` token is returned, further
    /// calls keep returning `Eof` (`read_char` past the end is a no-op on
    /// `ch`, so the dispatch below always lands back on the `0` case).
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let span = self.current_span();

        let token = match self.current_byte() {
            b'\n' => {
                while self.current_byte() == b'\n' {
                    self.read_char();
                }
                return Token::new(TokenKind::Linebreak, span);
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisc,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'{' => TokenKind::LBrac,
            b'}' => TokenKind::RBrac,
            b'(' => TokenKind::LPar,
            b')' => TokenKind::RPar,
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::NotEqual
                } else {
                    TokenKind::Bang
                }
            }
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::Equals
                } else {
                    TokenKind::Assign
                }
            }
            b'"' => {
                let text = self.read_string();
                return Token::new(TokenKind::StringLit(text), span);
            }
            0 => {
                self.read_char();
                return Token::new(TokenKind::Eof, span);
            }
            c if is_letter(c) => {
                let word = self.read_identifier();
                return Token::new(TokenKind::keyword_or_ident(&word), span);
            }
            c if c.is_ascii_digit() => {
                let digits = self.read_number();
                return Token::new(TokenKind::Number(digits), span);
            }
            c => TokenKind::Illegal(c as char),
        };

        self.read_char();
        Token::new(token, span)
    }

    /// Reads `[A-Za-z_]+` starting at the current byte.
    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while is_letter(self.current_byte()) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Reads `[0-9]+` starting at the current byte.
    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.current_byte().is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Reads bytes verbatim between the opening and closing `"`. No escape
    /// sequences are processed (§9 Open Questions: "no escapes"). If EOF is
    /// reached before a closing quote, returns whatever was collected.
    fn read_string(&mut self) -> String {
        self.read_char(); // consume opening quote
        let start = self.pos;
        while !matches!(self.current_byte(), b'"' | 0) {
            self.read_char();
        }
        let text = String::from_utf8_lossy(&self.input[start..self.pos]).into_owned();
        if self.current_byte() == b'"' {
            self.read_char(); // consume closing quote
        }
        text
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
