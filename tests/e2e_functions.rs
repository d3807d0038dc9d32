//! End-to-end tests for function declarations, literals, calls and closures.

mod common;

use common::run_ok;

#[test]
fn test_function_declaration_and_call() {
    assert_eq!(run_ok("func suma(a, b) { retorna a + b } suma(2, 3);"), "5");
}

#[test]
fn test_function_literal_bound_to_variable() {
    assert_eq!(run_ok("var doble = func(x) { retorna x * 2 }; doble(21);"), "42");
}

#[test]
fn test_function_without_explicit_return_yields_last_expression() {
    assert_eq!(run_ok("func f() { 1 + 1 } f();"), "2");
}

#[test]
fn test_closures_capture_their_defining_environment() {
    let source = r#"
        func make_adder(x) {
            retorna func(y) { retorna x + y }
        }
        var add5 = make_adder(5);
        add5(10);
    "#;
    assert_eq!(run_ok(source), "15");
}

#[test]
fn test_recursive_function() {
    let source = r#"
        func factorial(n) {
            si (n == 0) { retorna 1 }
            retorna n * factorial(n - 1)
        }
        factorial(5);
    "#;
    assert_eq!(run_ok(source), "120");
}

#[test]
fn test_wrong_argument_count_is_an_error() {
    common::assert_error_contains("func f(a) { retorna a } f(1, 2);", "Arguments");
}

#[test]
fn test_calling_a_non_function_is_an_error() {
    common::assert_error_contains("var a = 1; a();", "not found");
}
