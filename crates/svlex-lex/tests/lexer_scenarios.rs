//! End-to-end lexer scenarios, one per row of the concrete scenario table.

use svlex_lex::{Lexer, TokenKind, TokenPayload};
use svlex_util::diagnostic::Handler;

fn lex_all(source: &str) -> Vec<TokenKind> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, &handler);
    let mut kinds = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        kinds.push(tok.kind);
        if done {
            break;
        }
    }
    kinds
}

fn lex_non_eof(source: &str) -> Vec<TokenKind> {
    let mut kinds = lex_all(source);
    kinds.pop();
    kinds
}

#[test]
fn line_comment_produces_no_tokens() {
    assert_eq!(lex_non_eof("// comment\n"), Vec::<TokenKind>::new());
}

#[test]
fn block_comment_spanning_lines_produces_no_tokens() {
    assert_eq!(lex_non_eof("/* a\nb */"), Vec::<TokenKind>::new());
}

#[test]
fn mixed_bases_reclassify_digits_after_base_marker() {
    use TokenKind::*;
    assert_eq!(
        lex_non_eof("659\n'h 837FF\n'o7460\n"),
        vec![IntegerLiteral, IntegerBase, IntegerLiteral, IntegerBase, IntegerLiteral]
    );
}

#[test]
fn sized_literals_reclassify_x_as_a_digit() {
    use TokenKind::*;
    assert_eq!(
        lex_non_eof("4'b1001\n12'hx\n"),
        vec![
            IntegerLiteral,
            IntegerBase,
            IntegerLiteral,
            IntegerLiteral,
            IntegerBase,
            IntegerLiteral
        ]
    );
}

#[test]
fn unbased_unsized_literals_are_two_bytes_each() {
    use TokenKind::*;
    assert_eq!(
        lex_non_eof("'0\n'1\n'x\n'z"),
        vec![
            UnbasedUnsizedLiteral,
            UnbasedUnsizedLiteral,
            UnbasedUnsizedLiteral,
            UnbasedUnsizedLiteral,
        ]
    );
}

#[test]
fn time_unit_suffixes_classify_as_time_literals() {
    use TokenKind::*;
    assert_eq!(lex_non_eof("2.1ns\n40ps"), vec![TimeLiteral, TimeLiteral]);
}

#[test]
fn scientific_notation_with_sign_is_a_real_literal() {
    assert_eq!(lex_non_eof("1.30e-2"), vec![TokenKind::RealLiteral]);
}

#[test]
fn wide_operator_forms_resolve_to_the_longest_match() {
    use TokenKind::*;
    assert_eq!(
        lex_non_eof("<<<= <-> ->>"),
        vec![LessLessLessEqual, LessMinusGreater, MinusGreaterGreater]
    );
}

#[test]
fn escaped_identifier_stops_at_whitespace() {
    assert_eq!(lex_non_eof("\\busa+index\n"), vec![TokenKind::EscapedIdentifier]);
}

#[test]
fn system_tf_identifiers_keep_the_dollar_sign() {
    let handler = Handler::new();
    let source = "$display\n$finish";
    let mut lexer = Lexer::new(source, &handler);

    let first = lexer.next_token();
    assert_eq!(first.kind, TokenKind::SystemTfIdentifier);
    assert_eq!(first.spelling(source), "$display");

    let second = lexer.next_token();
    assert_eq!(second.kind, TokenKind::SystemTfIdentifier);
    assert_eq!(second.spelling(source), "$finish");

    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn hex_escapes_decode_to_the_expected_bytes() {
    let handler = Handler::new();
    let source = r#""\x48\x65\x6c\x6c\x6f""#;
    let mut lexer = Lexer::new(source, &handler);

    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::StringLiteral);
    match &tok.payload {
        TokenPayload::DecodedString(bytes) => assert_eq!(&**bytes, b"Hello"),
        other => panic!("expected decoded string payload, got {other:?}"),
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert!(!handler.has_errors());
}
