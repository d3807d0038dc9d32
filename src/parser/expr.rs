//! Pratt expression parsing: precedence table, prefix/infix dispatch.

use super::{ParseError, Parser, Precedence};
use crate::ast::{Expr, ExprKind};
use crate::token::TokenKind;

/// Binding power of an infix operator token; `Lowest` for anything that
/// isn't a registered infix operator (stops the Pratt loop).
fn infix_precedence(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::Equals | TokenKind::NotEqual => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisc | TokenKind::Slash => Precedence::Product,
        TokenKind::LPar => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl<'a> Parser<'a> {
    /// The Pratt loop from §4.2: parse a prefix, then keep folding infix
    /// operators in while `precedence < next`'s binding power.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.next.kind != TokenKind::Semicolon
            && precedence < infix_precedence(&self.next.kind)
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match &self.current.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let token = self.current.clone();
                Some(Expr::new(ExprKind::Identifier(name), token))
            }
            TokenKind::Number(digits) => self.parse_integer_literal(digits.clone()),
            TokenKind::StringLit(text) => {
                let text = text.clone();
                let token = self.current.clone();
                Some(Expr::new(ExprKind::StringLit(text), token))
            }
            TokenKind::True => {
                let token = self.current.clone();
                Some(Expr::new(ExprKind::BoolLit(true), token))
            }
            TokenKind::False => {
                let token = self.current.clone();
                Some(Expr::new(ExprKind::BoolLit(false), token))
            }
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LPar => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::For => self.parse_for_loop(),
            other => {
                self.errors
                    .push(ParseError::no_prefix_parser(other, self.current_span()));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        if self.current.kind == TokenKind::LPar {
            return self.parse_call_expression(left);
        }
        self.parse_infix_expression(left)
    }

    fn parse_integer_literal(&mut self, digits: String) -> Option<Expr> {
        let token = self.current.clone();
        match digits.parse::<i64>() {
            Ok(value) => Some(Expr::new(ExprKind::IntegerLit(value), token)),
            Err(_) => {
                self.errors.push(ParseError::new(
                    format!("could not parse '{digits}' as an integer"),
                    self.current_span(),
                ));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let op = token.literal();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::new(
            ExprKind::Prefix {
                op,
                right: Box::new(right),
            },
            token,
        ))
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let op = token.literal();
        let precedence = infix_precedence(&self.current.kind);
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            token,
        ))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance(); // past `(`
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_next(&TokenKind::RPar) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        if !self.expect_next(&TokenKind::LPar) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_next(&TokenKind::RPar) {
            return None;
        }
        let consequence = self.parse_block()?;

        let alternative = if self.next_is(&TokenKind::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            token,
        ))
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let params = self.parse_parameter_list()?;
        let body = self.parse_block()?;
        Some(Expr::new(ExprKind::FunctionLit { params, body }, token))
    }

    fn parse_for_loop(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let iterations = match &self.next.kind {
            TokenKind::Number(digits) => match digits.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    self.errors.push(ParseError::new(
                        format!("could not parse '{digits}' as an integer"),
                        self.next_span(),
                    ));
                    return None;
                }
            },
            other => {
                self.errors
                    .push(ParseError::expected("NUMBER", other, self.next_span()));
                return None;
            }
        };
        self.advance();
        let body = self.parse_block()?;
        Some(Expr::new(ExprKind::ForLoop { iterations, body }, token))
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let args = self.parse_call_arguments()?;
        Some(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            token,
        ))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();

        if self.next_is(&TokenKind::RPar) {
            self.advance();
            return Some(args);
        }

        self.advance();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.next_is(&TokenKind::Comma) {
            self.advance(); // onto comma
            self.advance(); // onto next argument's first token
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_next(&TokenKind::RPar) {
            return None;
        }

        Some(args)
    }
}
