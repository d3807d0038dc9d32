use super::eval_program;
use crate::environment::Environment;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;

fn run(input: &str) -> Value {
    let mut parser = Parser::new(Lexer::new(input));
    let (program, errors) = parser.parse_program();
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    let env = Environment::new_root();
    eval_program(&program, &env)
}

fn assert_integer(value: Value, expected: i64) {
    match value {
        Value::Integer(i) => assert_eq!(i, expected),
        other => panic!("expected integer {expected}, got {other:?}"),
    }
}

fn assert_boolean(value: Value, expected: bool) {
    match value {
        Value::Boolean(b) => assert_eq!(b, expected),
        other => panic!("expected boolean {expected}, got {other:?}"),
    }
}

#[test]
fn test_integer_literal() {
    assert_integer(run("1123;"), 1123);
}

#[test]
fn test_bang_and_negation() {
    assert_boolean(run("!true"), false);
    assert_integer(run("-12"), -12);
}

#[test]
fn test_arithmetic_and_comparison() {
    assert_integer(run("-12 + 24 - -12"), 24);
    assert_boolean(run("(-12 + 24) == 12"), true);
    assert_boolean(run("-(11 + 1) != 2"), true);
}

#[test]
fn test_string_concat_and_equality() {
    assert_eq!(run("\"Hola\" + \"chau\"").inspect(), "Holachau");
    assert_boolean(run("\"Hola\" == \"Hola\""), true);
}

#[test]
fn test_if_else_and_return_short_circuit() {
    assert_boolean(run("si(false){true}sino{false}"), false);
    assert_integer(run("2*8; retorna 2; 2*2"), 2);
    assert_integer(run("si(true){retorna 123}; true"), 123);
}

#[test]
fn test_var_bindings() {
    assert_integer(run("var a=3; var b=4; a+b;"), 7);
}

#[test]
fn test_function_declaration_and_call() {
    assert_integer(run("func algo(a, b){ retorna a * b } algo(2, 8);"), 16);
}

#[test]
fn test_integer_operator_type_error() {
    match run("2*true") {
        Value::Error(message) => {
            assert!(message.starts_with("Expected right value of '*' to be an integer."))
        }
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_if_condition_type_error() {
    match run("si(true*2){2}") {
        Value::Error(message) => assert!(
            message.starts_with("Expected boolean expression for 'if' condition.")
        ),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_if_condition_error_value_still_reports_condition_error() {
    // The condition itself evaluating to an Error doesn't short-circuit past
    // the if-condition type check; the outer message still wins.
    match run("si(true*2){2}") {
        Value::Error(message) => assert_eq!(
            message,
            "Expected boolean expression for 'if' condition. Got: error"
        ),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_integer_overflow_wraps_instead_of_panicking() {
    assert_integer(run("9223372036854775807 + 1"), i64::MIN);
    assert_integer(run("-9223372036854775807 - 2"), i64::MAX);
    assert_integer(run("9223372036854775807 * 2"), -2);
}

#[test]
fn test_unary_minus_on_non_integer_is_a_dedicated_error() {
    match run("-true") {
        Value::Error(message) => {
            assert_eq!(message, "Expected integer expression for '-' operator. Got: boolean")
        }
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_identifier_not_found() {
    match run("x") {
        Value::Error(message) => assert_eq!(message, "Identifier 'x' not found"),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_division_by_zero_is_an_error_not_a_panic() {
    match run("1 / 0") {
        Value::Error(_) => {}
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_closure_capture() {
    let source = r#"
        var make = func() {
            var x = 1;
            func inner() { retorna x }
            retorna inner
        }
        var f = make();
        var x = 999;
        f();
    "#;
    assert_integer(run(source), 1);
}

#[test]
fn test_recursion_within_cap_works() {
    let source = r#"
        func countdown(n) {
            si (n == 0) { retorna 0 }
            retorna countdown(n - 1)
        }
        countdown(50);
    "#;
    assert_integer(run(source), 0);
}

#[test]
fn test_recursion_cap_surfaces_as_error_not_a_crash() {
    let source = r#"
        func loop(n) {
            retorna loop(n + 1)
        }
        loop(0);
    "#;
    match run(source) {
        Value::Error(message) => assert_eq!(message, "Max level of recursion reached"),
        other => panic!("expected recursion error, got {other:?}"),
    }
}

#[test]
fn test_empty_program_evaluates_to_null() {
    assert!(matches!(run(""), Value::Null));
}

#[test]
fn test_for_loop_zero_iterations_is_null() {
    assert!(matches!(run("repetir 0 { 1 }"), Value::Null));
}

#[test]
fn test_for_loop_runs_body_n_times() {
    assert_integer(run("var total = 0; repetir 3 { var total = total + 1 } total;"), 3);
}

#[test]
fn test_if_without_else_is_null_on_false_branch() {
    assert!(matches!(run("si(false){1}"), Value::Null));
}

#[test]
fn test_argument_count_mismatch() {
    match run("func f(a){ retorna a } f(1, 2);") {
        Value::Error(message) => {
            assert_eq!(message, "Number of Arguments mismatch with number of Parameters")
        }
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_error_short_circuits_infix_right_operand() {
    // If `x` (undefined) errors, the right operand `1/0` must never be evaluated.
    match run("x + (1/0)") {
        Value::Error(message) => assert_eq!(message, "Identifier 'x' not found"),
        other => panic!("expected the left error to win, got {other:?}"),
    }
}

#[test]
fn test_named_function_shadowing_permitted() {
    assert_integer(run("func f(){ retorna 1 } var f = 2; f;"), 2);
}

#[test]
fn test_evaluation_purity() {
    let source = "var a = 1; var b = 2; a + b;";
    assert_integer(run(source), 3);
    assert_integer(run(source), 3);
}
