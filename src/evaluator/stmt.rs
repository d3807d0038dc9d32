//! Statement and block evaluation, including the RUNNING/PROPAGATING traversal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Block, Stmt, StmtKind};
use crate::environment::Environment;
use crate::value::{self, Value};

use super::expr::eval_expr;

/// Evaluates a block's statements in order, in the given environment
/// (blocks do not introduce their own scope). Stops and returns immediately
/// on the first `Error` or `ReturnWrapper` — the PROPAGATING state from
/// §4.3 — without unwrapping it.
pub fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = value::NULL.clone();
    for stmt in &block.statements {
        if env.borrow().deadline_exceeded() {
            return Value::timeout_exceeded();
        }
        result = eval_stmt(stmt, env);
        if result.halts_block() {
            return result;
        }
    }
    result
}

pub fn eval_stmt(stmt: &Stmt, env: &Rc<RefCell<Environment>>) -> Value {
    match &stmt.kind {
        StmtKind::Var { ident, value } => {
            let evaluated = eval_expr(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            env.borrow_mut().set(ident.clone(), evaluated);
            value::NULL.clone()
        }
        StmtKind::Return { value } => {
            let evaluated = eval_expr(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            Value::ReturnWrapper(Box::new(evaluated))
        }
        StmtKind::ExpressionStmt { expr } => eval_expr(expr, env),
        StmtKind::Block(block) => eval_block(block, env),
        StmtKind::FunctionDecl { name, params, body } => {
            let function = Value::Function(Rc::new(crate::value::FunctionValue {
                params: params.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            }));
            env.borrow_mut().set(name.clone(), function);
            value::NULL.clone()
        }
    }
}
