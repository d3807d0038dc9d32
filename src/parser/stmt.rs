//! Statement dispatch and the statement-shaped grammar productions.

use super::{Parser, Precedence};
use crate::ast::{Block, Stmt, StmtKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Dispatches on `current` per §4.2's statement table. Leaves `current`
    /// on the last token consumed by the statement; the caller advances past it.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Var => self.parse_var_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Function => self.parse_function_decl(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_var_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let ident = self.expect_ident()?;
        if !self.expect_next(&TokenKind::Assign) {
            return None;
        }
        self.advance(); // move onto the first token of the value expression
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::Var { ident, value }, token))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::Return { value }, token))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::ExpressionStmt { expr }, token))
    }

    fn parse_function_decl(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let name = self.expect_ident()?;
        let params = self.parse_parameter_list()?;
        let body = self.parse_block()?;
        Some(Stmt::new(
            StmtKind::FunctionDecl { name, params, body },
            token,
        ))
    }

    /// `( IDENT (, IDENT)* )`, empty allowed.
    pub(super) fn parse_parameter_list(&mut self) -> Option<Vec<String>> {
        if !self.expect_next(&TokenKind::LPar) {
            return None;
        }

        let mut params = Vec::new();

        if self.next_is(&TokenKind::RPar) {
            self.advance();
            return Some(params);
        }

        let first = self.expect_ident()?;
        params.push(first);

        while self.next_is(&TokenKind::Comma) {
            self.advance(); // onto comma
            let name = self.expect_ident()?;
            params.push(name);
        }

        if !self.expect_next(&TokenKind::RPar) {
            return None;
        }

        Some(params)
    }

    /// `{ statement* }`. Leaves `current` on the closing `}`.
    pub(super) fn parse_block(&mut self) -> Option<Block> {
        if !self.expect_next(&TokenKind::LBrac) {
            return None;
        }
        self.advance(); // onto first statement token (or `}`)

        let mut statements = Vec::new();
        while self.current.kind != TokenKind::RBrac && self.current.kind != TokenKind::Eof {
            if self.current.kind == TokenKind::Linebreak {
                self.advance();
                continue;
            }
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        if self.current.kind != TokenKind::RBrac {
            self.errors.push(super::ParseError::expected(
                "}",
                &self.current.kind,
                self.current_span(),
            ));
            return None;
        }

        Some(Block::new(statements))
    }
}
