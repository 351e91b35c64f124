//! String literal lexing and escape decoding.

use super::core::Lexer;
use crate::token::{Token, TokenKind, TokenPayload};
use svlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use svlex_util::span::Span;

fn hex_value(b: u8) -> u32 {
    (b as char).to_digit(16).unwrap_or(0)
}

impl<'a> Lexer<'a> {
    /// Entered on `"`. Decodes escapes into `TokenPayload::DecodedString`
    /// while `location`/`length` continue to describe the original
    /// spelling, quotes included.
    pub(super) fn lex_string(&mut self) -> Token {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // opening quote
        let mut decoded = Vec::new();

        loop {
            if self.cursor.is_at_end() {
                self.report_unterminated_string(start, start_line, start_column);
                break;
            }
            let Some(b) = self.cursor.current_byte() else {
                // Non-ASCII byte mid-string: not a recognized escape
                // trigger, just content. Push its UTF-8 encoding and move
                // on a full character at a time to stay on a char boundary.
                let mut buf = [0u8; 4];
                decoded.extend_from_slice(self.cursor.current_char().encode_utf8(&mut buf).as_bytes());
                self.cursor.advance();
                continue;
            };
            if b == b'"' {
                self.cursor.advance();
                break;
            }
            if b != b'\\' {
                decoded.push(b);
                self.cursor.advance();
                continue;
            }
            self.cursor.advance(); // the backslash
            if self.cursor.is_at_end() {
                self.report_unterminated_string(start, start_line, start_column);
                break;
            }
            let Some(c) = self.cursor.current_byte() else {
                // `\` followed by a non-ASCII byte: unknown escape, drop
                // the backslash and keep the character.
                let mut buf = [0u8; 4];
                decoded.extend_from_slice(self.cursor.current_char().encode_utf8(&mut buf).as_bytes());
                self.cursor.advance();
                continue;
            };
            match c {
                b'n' => {
                    decoded.push(b'\n');
                    self.cursor.advance();
                }
                b't' => {
                    decoded.push(b'\t');
                    self.cursor.advance();
                }
                b'\\' => {
                    decoded.push(b'\\');
                    self.cursor.advance();
                }
                b'"' => {
                    decoded.push(b'"');
                    self.cursor.advance();
                }
                0x0B => {
                    decoded.push(0x0B);
                    self.cursor.advance();
                }
                0x0C => {
                    decoded.push(0x0C);
                    self.cursor.advance();
                }
                0x07 => {
                    decoded.push(0x07);
                    self.cursor.advance();
                }
                b'\n' => {
                    // backslash-newline: line continuation, both bytes dropped
                    self.cursor.advance();
                }
                b'\r' => {
                    self.cursor.advance();
                    if self.cursor.current_byte() == Some(b'\n') {
                        self.cursor.advance();
                    }
                }
                b'0'..=b'7' => {
                    let mut value: u32 = 0;
                    let mut digits = 0;
                    while digits < 3 {
                        match self.cursor.current_byte() {
                            Some(d @ b'0'..=b'7') => {
                                value = value * 8 + (d - b'0') as u32;
                                self.cursor.advance();
                                digits += 1;
                            }
                            _ => break,
                        }
                    }
                    decoded.push(value as u8);
                }
                b'x' => {
                    self.cursor.advance();
                    let mut value: u32 = 0;
                    let mut digits = 0;
                    while digits < 2 {
                        match self.cursor.current_byte() {
                            Some(d) if d.is_ascii_hexdigit() => {
                                value = value * 16 + hex_value(d);
                                self.cursor.advance();
                                digits += 1;
                            }
                            _ => break,
                        }
                    }
                    decoded.push(value as u8);
                }
                other => {
                    // Unknown escape: drop the backslash, keep the byte.
                    decoded.push(other);
                    self.cursor.advance();
                }
            }
        }

        let len = self.cursor.position() - start;
        Token::with_payload(
            TokenKind::StringLiteral,
            start,
            len,
            TokenPayload::DecodedString(decoded.into_boxed_slice()),
        )
    }

    fn report_unterminated_string(&self, start: usize, line: u32, column: u32) {
        let span = Span::new(start, self.cursor.position(), line, column);
        DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(span)
            .emit(self.handler);
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{TokenKind, TokenPayload};
    use svlex_util::diagnostic::Handler;

    #[test]
    fn decodes_standard_escapes() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(r#""a\nb\tc""#, &handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        match tok.payload {
            TokenPayload::DecodedString(bytes) => assert_eq!(&*bytes, b"a\nb\tc"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn drops_unknown_escape_backslash() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(r#""a\qb""#, &handler);
        let tok = lexer.next_token();
        match tok.payload {
            TokenPayload::DecodedString(bytes) => assert_eq!(&*bytes, b"aqb"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn decodes_octal_and_hex_escapes() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(r#""\101\x42""#, &handler);
        let tok = lexer.next_token();
        match tok.payload {
            TokenPayload::DecodedString(bytes) => assert_eq!(&*bytes, b"AB"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_reports_fatal_error() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("\"abc", &handler);
        let _ = lexer.next_token();
        assert!(handler.has_errors());
    }
}
