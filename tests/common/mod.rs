//! Shared helpers for end-to-end tests: run a snippet through the full
//! lex/parse/eval pipeline via the library's public [`interprete::run_source`].

use interprete::value::Value;

/// Runs `source` to completion and returns its `Inspect` form, panicking on
/// a parse error (the e2e suite only exercises syntactically valid programs;
/// syntax-error behavior belongs to `parser_tests.rs`).
pub fn run(source: &str) -> Value {
    interprete::run_source(source).unwrap_or_else(|errors| {
        panic!("unexpected parse errors for {source:?}: {errors:?}")
    })
}

pub fn run_ok(source: &str) -> String {
    run(source).inspect()
}

pub fn assert_error_contains(source: &str, needle: &str) {
    match run(source) {
        Value::Error(message) => assert!(
            message.contains(needle),
            "expected error containing {needle:?}, got {message:?}"
        ),
        other => panic!("expected an error, got {other:?}"),
    }
}
