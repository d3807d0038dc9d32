//! Pretty-printer: AST → indented, field-labeled text (§6.3).
//!
//! Two spaces per indentation level. Field labels follow the set named in
//! spec.md §6.3 (`var statement:`, `infix expression:`, `consequence:`, ...).
//! This is a hand-written recursive indenter, not a generic tree renderer —
//! the output format is a specific labeled-field layout, not a `TreeItem`.

use super::{Block, Expr, ExprKind, Program, Stmt, StmtKind};

/// Pretty-prints an entire program.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        print_stmt(stmt, 0, &mut out);
    }
    out
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn line(depth: usize, text: &str, out: &mut String) {
    indent(depth, out);
    out.push_str(text);
    out.push('\n');
}

fn print_block(block: &Block, depth: usize, out: &mut String) {
    for stmt in &block.statements {
        print_stmt(stmt, depth, out);
    }
}

fn print_stmt(stmt: &Stmt, depth: usize, out: &mut String) {
    match &stmt.kind {
        StmtKind::Var { ident, value } => {
            line(depth, "var statement:", out);
            line(depth + 1, "identifier:", out);
            line(depth + 2, ident, out);
            line(depth + 1, "value:", out);
            print_expr(value, depth + 2, out);
        }
        StmtKind::Return { value } => {
            line(depth, "return statement:", out);
            line(depth + 1, "value:", out);
            print_expr(value, depth + 2, out);
        }
        StmtKind::ExpressionStmt { expr } => {
            line(depth, "expression statement:", out);
            print_expr(expr, depth + 1, out);
        }
        StmtKind::Block(block) => {
            line(depth, "block statement:", out);
            print_block(block, depth + 1, out);
        }
        StmtKind::FunctionDecl { name, params, body } => {
            line(depth, "function statement:", out);
            line(depth + 1, "name:", out);
            line(depth + 2, name, out);
            line(depth + 1, "parameters:", out);
            for param in params {
                line(depth + 2, param, out);
            }
            line(depth + 1, "body:", out);
            print_block(body, depth + 2, out);
        }
    }
}

fn print_expr(expr: &Expr, depth: usize, out: &mut String) {
    match &expr.kind {
        ExprKind::Identifier(name) => line(depth, name, out),
        ExprKind::IntegerLit(value) => line(depth, &value.to_string(), out),
        ExprKind::StringLit(text) => line(depth, &format!("\"{text}\""), out),
        ExprKind::BoolLit(value) => line(depth, &value.to_string(), out),
        ExprKind::Prefix { op, right } => {
            line(depth, "prefix expression:", out);
            line(depth + 1, &format!("operator: {op}"), out);
            line(depth + 1, "right:", out);
            print_expr(right, depth + 2, out);
        }
        ExprKind::Infix { op, left, right } => {
            line(depth, "infix expression:", out);
            line(depth + 1, "left:", out);
            print_expr(left, depth + 2, out);
            line(depth + 1, &format!("operator: {op}"), out);
            line(depth + 1, "right:", out);
            print_expr(right, depth + 2, out);
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            line(depth, "if expression:", out);
            line(depth + 1, "condition:", out);
            print_expr(condition, depth + 2, out);
            line(depth + 1, "consequence:", out);
            print_block(consequence, depth + 2, out);
            if let Some(alt) = alternative {
                line(depth + 1, "alternative:", out);
                print_block(alt, depth + 2, out);
            }
        }
        ExprKind::FunctionLit { params, body } => {
            line(depth, "function literal:", out);
            line(depth + 1, "parameters:", out);
            for param in params {
                line(depth + 2, param, out);
            }
            line(depth + 1, "body:", out);
            print_block(body, depth + 2, out);
        }
        ExprKind::Call { callee, args } => {
            line(depth, "function call:", out);
            line(depth + 1, "function:", out);
            print_expr(callee, depth + 2, out);
            line(depth + 1, "arguments:", out);
            for arg in args {
                print_expr(arg, depth + 2, out);
            }
        }
        ExprKind::ForLoop { iterations, body } => {
            line(depth, "for loop:", out);
            line(depth + 1, &format!("iterations: {iterations}"), out);
            line(depth + 1, "body:", out);
            print_block(body, depth + 2, out);
        }
    }
}
