//! Whitespace and comment skipping.
//!
//! Block comments here are deliberately non-nesting: the first `*/`
//! terminates the comment regardless of any `/*` encountered inside it,
//! matching how SystemVerilog source treats them (unlike this crate's own
//! Rust source, where nested block comments are legal).

use super::core::Lexer;
use crate::char_class::is_whitespace;
use svlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use svlex_util::span::Span;

impl<'a> Lexer<'a> {
    /// Consumes whitespace and comments in a loop; produces no tokens.
    /// Returns with the cursor either at end of input or on the first byte
    /// of the next real token.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_byte() {
                None => return,
                Some(b) if is_whitespace(b) => {
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.skip_line_comment();
                }
                Some(b'/') if self.cursor.peek_byte(1) == Some(b'*') => {
                    if !self.skip_block_comment() {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance(); // first /
        self.cursor.advance(); // second /
        while let Some(b) = self.cursor.current_byte() {
            if b == b'\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Returns `true` if the comment terminated normally, `false` if it
    /// ran off the end of the buffer (a fatal diagnostic was already
    /// reported and the cursor is left at `buffer_end`).
    fn skip_block_comment(&mut self) -> bool {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // /
        self.cursor.advance(); // *
        loop {
            if self.cursor.is_at_end() {
                let span = Span::new(start, self.cursor.position(), start_line, start_column);
                DiagnosticBuilder::error("unterminated block comment")
                    .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
                    .span(span)
                    .emit(self.handler);
                return false;
            }
            match self.cursor.current_byte() {
                Some(b'*') if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return true;
                }
                _ => self.cursor.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;
    use svlex_util::diagnostic::Handler;

    #[test]
    fn line_comment_produces_no_token() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("// hello\n+", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    }

    #[test]
    fn block_comment_does_not_nest() {
        let handler = Handler::new();
        // The first `*/` terminates the comment; the remaining `*/` is a
        // standalone STAR_SLASH-less pair of tokens (`*` then `/`).
        let mut lexer = Lexer::new("/* /* inner */ */", &handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Star);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Slash);
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("/* never closes", &handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Eof);
        assert!(handler.has_errors());
    }

    #[test]
    fn non_ascii_byte_inside_block_comment_is_not_unterminated() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("/* caf\u{00e9} */+", &handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Plus);
        assert!(!handler.has_errors());
    }
}
