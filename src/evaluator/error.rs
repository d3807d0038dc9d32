//! Thin diagnostic wrapper around a terminal runtime error.
//!
//! Runtime errors are ordinary `Value::Error` values per §7 — evaluation
//! never unwinds the host stack. `EvalError` exists only so the CLI/REPL
//! driver has something uniform to hand to the diagnostics module when the
//! program's final value (or the REPL's per-line result) turns out to be an
//! error, for exit-status and pretty-printing purposes.

#[derive(Debug)]
pub struct EvalError {
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}
