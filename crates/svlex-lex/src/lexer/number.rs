//! Numeric literal lexing: plain number bodies and the base-format marker
//! that follows an apostrophe.

use super::core::Lexer;
use crate::char_class::{is_decimal_digit, is_number_body, is_unbased_unsized_value};
use crate::token::{Token, TokenKind};

/// Trailing run of alphabetic bytes in `text`, used to detect a time-unit
/// suffix (`s`, `ms`, `us`, `ns`, `ps`, `fs`) without needing to look at the
/// whole token up front.
fn trailing_alpha(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut i = bytes.len();
    while i > 0 && bytes[i - 1].is_ascii_alphabetic() {
        i -= 1;
    }
    &text[i..]
}

fn classify_body(text: &str) -> TokenKind {
    let suffix = trailing_alpha(text);
    if matches!(suffix, "s" | "ms" | "us" | "ns" | "ps" | "fs") {
        return TokenKind::TimeLiteral;
    }
    if text.contains('.') || text.contains('e') || text.contains('E') {
        return TokenKind::RealLiteral;
    }
    TokenKind::IntegerLiteral
}

impl<'a> Lexer<'a> {
    /// Consumes a run of number-body characters (alnum, `_`, `.`), with the
    /// one extension for a signed exponent (`1.0e+10`, `1.0e-10`), and
    /// classifies the result. Entered both for ordinary number literals
    /// (first byte is a decimal digit) and for the base-digit
    /// reclassification that follows an `INTEGER_BASE` token.
    pub(super) fn lex_number_body(&mut self) -> Token {
        let start = self.cursor.position();
        while let Some(b) = self.cursor.current_byte() {
            if is_number_body(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let ends_in_exponent_marker = matches!(
            self.cursor.slice_from(start).as_bytes().last(),
            Some(b'e') | Some(b'E')
        );
        if ends_in_exponent_marker && matches!(self.cursor.current_byte(), Some(b'+') | Some(b'-')) {
            self.cursor.advance();
            while let Some(b) = self.cursor.current_byte() {
                if is_decimal_digit(b) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        let text = self.cursor.slice_from(start);
        let kind = classify_body(text);
        Token::new(kind, start, text.len())
    }

    /// Entered on `'`, after the `'{` case (aggregate-literal introducer)
    /// has already been ruled out by the caller.
    pub(super) fn lex_base_format_marker(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // the apostrophe
        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Unknown, start, 1);
        }
        if matches!(self.cursor.current_byte(), Some(b's') | Some(b'S')) {
            self.cursor.advance();
            if self.cursor.is_at_end() {
                return Token::new(TokenKind::IntegerBase, start, self.cursor.position() - start);
            }
            // A sign flag always precedes a base letter, never an
            // unbased-unsized value.
            self.cursor.advance();
            return Token::new(TokenKind::IntegerBase, start, self.cursor.position() - start);
        }
        let value = self.cursor.current_byte();
        self.cursor.advance();
        let len = self.cursor.position() - start;
        match value {
            Some(b) if is_unbased_unsized_value(b) => Token::new(TokenKind::UnbasedUnsizedLiteral, start, len),
            _ => Token::new(TokenKind::IntegerBase, start, len),
        }
    }
}
