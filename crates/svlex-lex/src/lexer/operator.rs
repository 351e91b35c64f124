//! Punctuation and operator lexing.
//!
//! Every `lex_*` function here is entered with the cursor sitting on the
//! token's first byte (not yet consumed) and returns with the cursor
//! positioned one byte past the token. Multi-byte punctuation is resolved
//! by peeking ahead without consuming, so a mismatched prefix (`<` followed
//! by `-` followed by something other than `>`) never has to be un-consumed.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_plus(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'+') => self.punct(TokenKind::PlusPlus, start, 2),
            Some(b'=') => self.punct(TokenKind::PlusEqual, start, 2),
            Some(b':') => self.punct(TokenKind::PlusColon, start, 2),
            _ => self.punct(TokenKind::Plus, start, 1),
        }
    }

    pub(super) fn lex_minus(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'-') => self.punct(TokenKind::MinusMinus, start, 2),
            Some(b'=') => self.punct(TokenKind::MinusEqual, start, 2),
            Some(b':') => self.punct(TokenKind::MinusColon, start, 2),
            Some(b'>') => match self.cursor.peek_byte(2) {
                Some(b'>') => self.punct(TokenKind::MinusGreaterGreater, start, 3),
                _ => self.punct(TokenKind::Arrow, start, 2),
            },
            _ => self.punct(TokenKind::Minus, start, 1),
        }
    }

    pub(super) fn lex_star(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'*') => self.punct(TokenKind::StarStar, start, 2),
            Some(b'=') => self.punct(TokenKind::StarEqual, start, 2),
            Some(b'>') => self.punct(TokenKind::StarGreater, start, 2),
            Some(b')') => self.punct(TokenKind::StarRParen, start, 2),
            _ => self.punct(TokenKind::Star, start, 1),
        }
    }

    /// Entered only when `skip_whitespace_and_comments` has already
    /// determined the following bytes are not `//` or `/*`.
    pub(super) fn lex_slash(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'=') => self.punct(TokenKind::SlashEqual, start, 2),
            _ => self.punct(TokenKind::Slash, start, 1),
        }
    }

    pub(super) fn lex_percent(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'=') => self.punct(TokenKind::PercentEqual, start, 2),
            _ => self.punct(TokenKind::Percent, start, 1),
        }
    }

    pub(super) fn lex_equal(&mut self) -> Token {
        let start = self.cursor.position();
        match (self.cursor.peek_byte(1), self.cursor.peek_byte(2)) {
            (Some(b'='), Some(b'=')) => self.punct(TokenKind::EqualEqualEqual, start, 3),
            (Some(b'='), Some(b'?')) => self.punct(TokenKind::EqualEqualQuestion, start, 3),
            (Some(b'='), _) => self.punct(TokenKind::EqualEqual, start, 2),
            _ => self.punct(TokenKind::Equal, start, 1),
        }
    }

    pub(super) fn lex_exclaim(&mut self) -> Token {
        let start = self.cursor.position();
        match (self.cursor.peek_byte(1), self.cursor.peek_byte(2)) {
            (Some(b'='), Some(b'=')) => self.punct(TokenKind::ExclaimEqualEqual, start, 3),
            (Some(b'='), Some(b'?')) => self.punct(TokenKind::ExclaimEqualQuestion, start, 3),
            (Some(b'='), _) => self.punct(TokenKind::ExclaimEqual, start, 2),
            _ => self.punct(TokenKind::Exclaim, start, 1),
        }
    }

    pub(super) fn lex_less(&mut self) -> Token {
        let start = self.cursor.position();
        let c1 = self.cursor.peek_byte(1);
        let c2 = self.cursor.peek_byte(2);
        let c3 = self.cursor.peek_byte(3);
        if c1 == Some(b'-') && c2 == Some(b'>') {
            return self.punct(TokenKind::LessMinusGreater, start, 3);
        }
        if c1 == Some(b'<') && c2 == Some(b'<') && c3 == Some(b'=') {
            return self.punct(TokenKind::LessLessLessEqual, start, 4);
        }
        if c1 == Some(b'<') && c2 == Some(b'<') {
            return self.punct(TokenKind::LessLessLess, start, 3);
        }
        if c1 == Some(b'<') && c2 == Some(b'=') {
            return self.punct(TokenKind::LessLessEqual, start, 3);
        }
        if c1 == Some(b'<') {
            return self.punct(TokenKind::LessLess, start, 2);
        }
        if c1 == Some(b'=') {
            return self.punct(TokenKind::LessEqual, start, 2);
        }
        self.punct(TokenKind::Less, start, 1)
    }

    pub(super) fn lex_greater(&mut self) -> Token {
        let start = self.cursor.position();
        let c1 = self.cursor.peek_byte(1);
        let c2 = self.cursor.peek_byte(2);
        let c3 = self.cursor.peek_byte(3);
        if c1 == Some(b'>') && c2 == Some(b'>') && c3 == Some(b'=') {
            return self.punct(TokenKind::GreaterGreaterGreaterEqual, start, 4);
        }
        if c1 == Some(b'>') && c2 == Some(b'>') {
            return self.punct(TokenKind::GreaterGreaterGreater, start, 3);
        }
        if c1 == Some(b'>') && c2 == Some(b'=') {
            return self.punct(TokenKind::GreaterGreaterEqual, start, 3);
        }
        if c1 == Some(b'>') {
            return self.punct(TokenKind::GreaterGreater, start, 2);
        }
        if c1 == Some(b'=') {
            return self.punct(TokenKind::GreaterEqual, start, 2);
        }
        self.punct(TokenKind::Greater, start, 1)
    }

    pub(super) fn lex_amp(&mut self) -> Token {
        let start = self.cursor.position();
        let c1 = self.cursor.peek_byte(1);
        let c2 = self.cursor.peek_byte(2);
        if c1 == Some(b'&') && c2 == Some(b'&') {
            return self.punct(TokenKind::AmpAmpAmp, start, 3);
        }
        if c1 == Some(b'&') {
            return self.punct(TokenKind::AmpAmp, start, 2);
        }
        if c1 == Some(b'=') {
            return self.punct(TokenKind::AmpEqual, start, 2);
        }
        self.punct(TokenKind::Amp, start, 1)
    }

    pub(super) fn lex_pipe(&mut self) -> Token {
        let start = self.cursor.position();
        let c1 = self.cursor.peek_byte(1);
        let c2 = self.cursor.peek_byte(2);
        if c1 == Some(b'-') && c2 == Some(b'>') {
            return self.punct(TokenKind::PipeMinusGreater, start, 3);
        }
        if c1 == Some(b'=') && c2 == Some(b'>') {
            return self.punct(TokenKind::PipeEqualGreater, start, 3);
        }
        if c1 == Some(b'=') {
            return self.punct(TokenKind::PipeEqual, start, 2);
        }
        if c1 == Some(b'|') {
            return self.punct(TokenKind::PipePipe, start, 2);
        }
        self.punct(TokenKind::Pipe, start, 1)
    }

    pub(super) fn lex_caret(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'~') => self.punct(TokenKind::CaretTilde, start, 2),
            Some(b'=') => self.punct(TokenKind::CaretEqual, start, 2),
            _ => self.punct(TokenKind::Caret, start, 1),
        }
    }

    pub(super) fn lex_tilde(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'&') => self.punct(TokenKind::TildeAmp, start, 2),
            Some(b'|') => self.punct(TokenKind::TildePipe, start, 2),
            Some(b'^') => self.punct(TokenKind::TildeCaret, start, 2),
            _ => self.punct(TokenKind::Tilde, start, 1),
        }
    }

    pub(super) fn lex_colon(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'=') => self.punct(TokenKind::ColonEqual, start, 2),
            Some(b'/') => self.punct(TokenKind::ColonSlash, start, 2),
            Some(b':') => self.punct(TokenKind::ColonColon, start, 2),
            _ => self.punct(TokenKind::Colon, start, 1),
        }
    }

    pub(super) fn lex_lparen(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'*') => self.punct(TokenKind::LParenStar, start, 2),
            _ => self.punct(TokenKind::LParen, start, 1),
        }
    }

    pub(super) fn lex_period(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'*') => self.punct(TokenKind::PeriodStar, start, 2),
            _ => self.punct(TokenKind::Period, start, 1),
        }
    }

    pub(super) fn lex_at(&mut self) -> Token {
        let start = self.cursor.position();
        match self.cursor.peek_byte(1) {
            Some(b'@') => self.punct(TokenKind::AtAt, start, 2),
            _ => self.punct(TokenKind::At, start, 1),
        }
    }

    pub(super) fn lex_hash(&mut self) -> Token {
        let start = self.cursor.position();
        let c1 = self.cursor.peek_byte(1);
        let c2 = self.cursor.peek_byte(2);
        if c1 == Some(b'#') {
            return self.punct(TokenKind::HashHash, start, 2);
        }
        if c1 == Some(b'-') && c2 == Some(b'#') {
            return self.punct(TokenKind::HashMinusHash, start, 3);
        }
        if c1 == Some(b'=') && c2 == Some(b'#') {
            return self.punct(TokenKind::HashEqualHash, start, 3);
        }
        self.punct(TokenKind::Hash, start, 1)
    }

    /// One-byte-only punctuation: no continuation ever extends these.
    pub(super) fn lex_single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        self.punct(kind, start, 1)
    }

    /// Consumes `len` bytes (already known to be present) and builds the
    /// resulting token. `len` is always in 7-bit ASCII bytes here, so
    /// byte count and `advance_n`'s character count coincide.
    fn punct(&mut self, kind: TokenKind, start: usize, len: usize) -> Token {
        self.cursor.advance_n(len);
        Token::new(kind, start, len)
    }
}
