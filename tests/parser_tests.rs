//! Integration-level coverage of the parser through its public API:
//! syntax-error accumulation and pretty-printed output shape.

use interprete::ast::print_program;
use interprete::lexer::Lexer;
use interprete::parser::Parser;

fn parse(source: &str) -> (String, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let (program, errors) = parser.parse_program();
    (
        print_program(&program),
        errors.into_iter().map(|e| e.to_string()).collect(),
    )
}

#[test]
fn test_valid_program_has_no_errors() {
    let (_, errors) = parse("var a = 1; a + 2;");
    assert!(errors.is_empty());
}

#[test]
fn test_missing_closing_paren_is_an_error_not_a_panic() {
    let (_, errors) = parse("(1 + 2");
    assert!(!errors.is_empty());
}

#[test]
fn test_error_in_one_statement_does_not_abort_the_rest() {
    let (printed, errors) = parse("(1 + ; var a = 5;");
    assert!(!errors.is_empty());
    assert!(printed.contains("var statement:"));
}

#[test]
fn test_pretty_print_labels_var_statement() {
    let (printed, _) = parse("var a = 1;");
    assert!(printed.contains("var statement:"));
    assert!(printed.contains("identifier:"));
}

#[test]
fn test_pretty_print_labels_if_expression() {
    let (printed, _) = parse("si (true) { 1 } sino { 2 }");
    assert!(printed.contains("if expression:"));
    assert!(printed.contains("consequence:"));
    assert!(printed.contains("alternative:"));
}

#[test]
fn test_pretty_print_omits_alternative_when_absent() {
    let (printed, _) = parse("si (true) { 1 }");
    assert!(!printed.contains("alternative:"));
}

#[test]
fn test_pretty_print_labels_function_declaration() {
    let (printed, _) = parse("func suma(a, b) { retorna a + b }");
    assert!(printed.contains("function statement:"));
    assert!(printed.contains("parameters:"));
}

#[test]
fn test_optional_trailing_semicolons() {
    let (_, errors_with) = parse("var a = 1;");
    let (_, errors_without) = parse("var a = 1");
    assert!(errors_with.is_empty());
    assert!(errors_without.is_empty());
}
