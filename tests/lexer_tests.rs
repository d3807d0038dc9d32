//! Integration-level coverage of the lexer through its public API.

use interprete::lexer::Lexer;
use interprete::token::TokenKind;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .tokenize_all()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_keywords_are_recognized() {
    let got = kinds("var func si sino retorna repetir true false");
    assert_eq!(
        got,
        vec![
            TokenKind::Var,
            TokenKind::Function,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::For,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_a_full_statement() {
    let got = kinds("var x = 5;");
    assert_eq!(
        got,
        vec![
            TokenKind::Var,
            TokenKind::Ident("x".to_string()),
            TokenKind::Assign,
            TokenKind::Number("5".to_string()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_literal_is_read_verbatim() {
    let got = kinds(r#""hola mundo""#);
    assert_eq!(
        got,
        vec![TokenKind::StringLit("hola mundo".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_illegal_byte_becomes_an_illegal_token() {
    let got = kinds("@");
    assert_eq!(got, vec![TokenKind::Illegal('@'), TokenKind::Eof]);
}

#[test]
fn test_comment_to_end_of_line_is_skipped() {
    let got = kinds("1 // a comment\n2");
    assert_eq!(
        got,
        vec![
            TokenKind::Number("1".to_string()),
            TokenKind::Number("2".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_standalone_newline_becomes_a_linebreak() {
    let got = kinds("1\n2");
    assert_eq!(
        got,
        vec![
            TokenKind::Number("1".to_string()),
            TokenKind::Linebreak,
            TokenKind::Number("2".to_string()),
            TokenKind::Eof,
        ]
    );
}
