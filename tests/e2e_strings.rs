//! End-to-end tests for string literals and concatenation.

mod common;

use common::run_ok;

#[test]
fn test_string_literal() {
    assert_eq!(run_ok("\"hola\";"), "hola");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run_ok("\"hola\" + \" \" + \"mundo\";"), "hola mundo");
}

#[test]
fn test_empty_string() {
    assert_eq!(run_ok("\"\";"), "");
}

#[test]
fn test_string_in_variable() {
    assert_eq!(run_ok("var saludo = \"hola\"; saludo;"), "hola");
}

#[test]
fn test_string_plus_integer_is_an_error() {
    common::assert_error_contains("\"a\" + 1;", "string");
}
