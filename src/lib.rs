//! A tree-walking interpreter for a small, expression-oriented scripting
//! language with Spanish-inflected keywords (`var`, `si`/`sino`, `func`,
//! `retorna`, `repetir`).
//!
//! # Pipeline
//!
//! Source text flows through three stages, each its own module:
//!
//! - [`lexer`] — source text → [`token`] stream
//! - [`parser`] — tokens → [`ast`]
//! - [`evaluator`] — AST → [`value::Value`], against an [`environment::Environment`]
//!
//! [`diagnostics`], [`repl`], and [`cli`] make up the host boundary around
//! that pipeline.

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod token;
pub mod value;

use std::cell::RefCell;
use std::rc::Rc;

use environment::Environment;
use parser::ParseError;
use value::Value;

/// Parses and evaluates `source` against a fresh root environment in one
/// call, for embedding and for end-to-end tests. Returns the accumulated
/// parse errors instead of a value if parsing failed; evaluation never
/// fails this way since runtime errors are ordinary `Value::Error` values.
pub fn run_source(source: &str) -> Result<Value, Vec<ParseError>> {
    let env = Environment::new_root();
    run_source_with_env(source, &env)
}

/// Same as [`run_source`] but against a caller-supplied environment, so a
/// sequence of snippets can share bindings the way a REPL session does.
pub fn run_source_with_env(
    source: &str,
    env: &Rc<RefCell<Environment>>,
) -> Result<Value, Vec<ParseError>> {
    let mut p = parser::Parser::new(lexer::Lexer::new(source));
    let (program, errors) = p.parse_program();
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(evaluator::eval_program(&program, env))
}
