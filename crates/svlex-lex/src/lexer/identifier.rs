//! Identifier lexing: simple identifiers, escaped identifiers, and
//! system task/function identifiers.

use super::core::Lexer;
use crate::char_class::{is_identifier_continue, is_printable, is_whitespace};
use crate::token::{Token, TokenKind, TokenPayload};
use svlex_util::Symbol;

impl<'a> Lexer<'a> {
    /// Entered on `[A-Za-z_]`.
    pub(super) fn lex_simple_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while let Some(b) = self.cursor.current_byte() {
            if is_identifier_continue(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        Token::with_payload(
            TokenKind::Identifier,
            start,
            text.len(),
            TokenPayload::Ident(Symbol::intern(text)),
        )
    }

    /// Entered on `\`. Consumes printable bytes up to the first whitespace
    /// byte, which is itself consumed (it delimits the token) but excluded
    /// from the interned spelling.
    pub(super) fn lex_escaped_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // the backslash
        while let Some(b) = self.cursor.current_byte() {
            if is_printable(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let content_end = self.cursor.position();
        if let Some(b) = self.cursor.current_byte() {
            if is_whitespace(b) {
                self.cursor.advance();
            }
        }
        let len = self.cursor.position() - start;
        let spelling = &self.cursor.source()[start..content_end];
        Token::with_payload(
            TokenKind::EscapedIdentifier,
            start,
            len,
            TokenPayload::Ident(Symbol::intern(spelling)),
        )
    }

    /// Entered on `$` once the caller has confirmed the next byte starts a
    /// simple identifier; a lone `$` is punctuation, not a system TF name.
    pub(super) fn lex_system_tf_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // the dollar sign
        while let Some(b) = self.cursor.current_byte() {
            if is_identifier_continue(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        Token::with_payload(
            TokenKind::SystemTfIdentifier,
            start,
            text.len(),
            TokenPayload::Ident(Symbol::intern(text)),
        )
    }
}
