//! End-to-end tests for boolean literals and the `!` operator.

mod common;

use common::run_ok;

#[test]
fn test_true_literal() {
    assert_eq!(run_ok("true;"), "true");
}

#[test]
fn test_false_literal() {
    assert_eq!(run_ok("false;"), "false");
}

#[test]
fn test_bang_negates() {
    assert_eq!(run_ok("!true;"), "false");
    assert_eq!(run_ok("!false;"), "true");
}

#[test]
fn test_double_bang() {
    assert_eq!(run_ok("!!true;"), "true");
}

#[test]
fn test_bang_on_non_boolean_is_an_error() {
    common::assert_error_contains("!5;", "boolean");
}
