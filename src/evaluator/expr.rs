//! Expression evaluation: dispatch on `ExprKind` per §4.3.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Expr, ExprKind};
use crate::environment::Environment;
use crate::value::{self, Value};

use super::stmt::eval_block;

pub fn eval_expr(expr: &Expr, env: &Rc<RefCell<Environment>>) -> Value {
    match &expr.kind {
        ExprKind::IntegerLit(value) => Value::Integer(*value),
        ExprKind::StringLit(text) => Value::String(text.clone()),
        ExprKind::BoolLit(value) => value::boolean(*value),
        ExprKind::Identifier(name) => match env.borrow().get(name) {
            Some(value) => value,
            None => Value::identifier_not_found(name),
        },
        ExprKind::Prefix { op, right } => {
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(op, right)
        }
        ExprKind::Infix { op, left, right } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            eval_infix(op, left, right, env)
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => eval_if(condition, consequence, alternative.as_ref(), env),
        ExprKind::FunctionLit { params, body } => {
            Value::Function(Rc::new(crate::value::FunctionValue {
                params: params.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            }))
        }
        ExprKind::Call { callee, args } => eval_call(callee, args, env),
        ExprKind::ForLoop { iterations, body } => eval_for_loop(*iterations, body, env),
    }
}

fn eval_prefix(op: &str, right: Value) -> Value {
    match op {
        "!" => match right {
            Value::Boolean(b) => value::boolean(!b),
            other => Value::expected_boolean_for_bang(&other),
        },
        "-" => match right {
            Value::Integer(i) => Value::Integer(i.wrapping_neg()),
            other => Value::expected_integer_for_minus(&other),
        },
        _ => Value::unsupported_operator(op),
    }
}

fn eval_infix(op: &str, left: Value, right_expr: &Expr, env: &Rc<RefCell<Environment>>) -> Value {
    match left {
        Value::Integer(l) => {
            let right = eval_expr(right_expr, env);
            if right.is_error() {
                return right;
            }
            let Value::Integer(r) = right else {
                return Value::expected_integer(op, &right);
            };
            eval_integer_infix(op, l, r)
        }
        Value::Boolean(l) => {
            let right = eval_expr(right_expr, env);
            if right.is_error() {
                return right;
            }
            let Value::Boolean(r) = right else {
                return Value::expected_boolean(&right);
            };
            eval_boolean_infix(op, l, r)
        }
        Value::String(l) => {
            let right = eval_expr(right_expr, env);
            if right.is_error() {
                return right;
            }
            let Value::String(r) = right else {
                return Value::Error(format!(
                    "Expected right value of '{op}' to be a string. Got: {}",
                    right.type_name()
                ));
            };
            eval_string_infix(op, &l, &r)
        }
        _ => Value::unsupported_infix(op),
    }
}

fn eval_integer_infix(op: &str, left: i64, right: i64) -> Value {
    match op {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::division_by_zero()
            } else {
                Value::Integer(left / right)
            }
        }
        "<" => value::boolean(left < right),
        ">" => value::boolean(left > right),
        "==" => value::boolean(left == right),
        "!=" => value::boolean(left != right),
        _ => Value::unsupported_infix(op),
    }
}

fn eval_boolean_infix(op: &str, left: bool, right: bool) -> Value {
    match op {
        "==" => value::boolean(left == right),
        "!=" => value::boolean(left != right),
        _ => Value::unsupported_infix(op),
    }
}

fn eval_string_infix(op: &str, left: &str, right: &str) -> Value {
    match op {
        "+" => Value::String(format!("{left}{right}")),
        "==" => value::boolean(left == right),
        "!=" => value::boolean(left != right),
        _ => Value::unsupported_infix(op),
    }
}

fn eval_if(
    condition: &Expr,
    consequence: &crate::ast::Block,
    alternative: Option<&crate::ast::Block>,
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let condition = eval_expr(condition, env);
    let Value::Boolean(is_true) = condition else {
        return Value::expected_boolean_for_if(&condition);
    };

    if is_true {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        value::NULL.clone()
    }
}

fn eval_call(callee: &Expr, args: &[Expr], env: &Rc<RefCell<Environment>>) -> Value {
    let callee_value = eval_expr(callee, env);
    if callee_value.is_error() {
        return callee_value;
    }
    let Value::Function(function) = callee_value else {
        let name = match &callee.kind {
            ExprKind::Identifier(name) => name.clone(),
            _ => callee_value.inspect(),
        };
        return Value::function_not_found(&name);
    };

    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        let value = eval_expr(arg, env);
        if value.is_error() {
            return value;
        }
        evaluated_args.push(value);
    }

    if evaluated_args.len() != function.params.len() {
        return Value::argument_count_mismatch();
    }

    let call_env = match Environment::new_call_frame(&function.env, env) {
        Ok(env) => env,
        Err(()) => return Value::max_recursion(),
    };

    for (param, value) in function.params.iter().zip(evaluated_args) {
        call_env.borrow_mut().set(param.clone(), value);
    }

    match eval_block(&function.body, &call_env) {
        Value::ReturnWrapper(inner) => *inner,
        other => other,
    }
}

fn eval_for_loop(iterations: i64, body: &crate::ast::Block, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = value::NULL.clone();
    for _ in 0..iterations.max(0) {
        if env.borrow().deadline_exceeded() {
            return Value::timeout_exceeded();
        }
        result = eval_block(body, env);
        if result.halts_block() {
            return result;
        }
    }
    result
}
