//! Compiler-directive preprocessing.
//!
//! [`Preprocessor`] wraps a [`crate::lexer::Lexer`] and intercepts
//! backtick-introduced directives before they reach the caller. Only
//! `` `define `` is handled semantically (the macro table is built and
//! queryable); the other eighteen directive kinds are recognized,
//! consumed, and dropped so that unknown-directive detection has a
//! complete name list to check against. None of the recognized
//! directives are expanded back into the output token stream - a `` `define ``
//! line, like every other directive line, produces no tokens at all.

mod arena;
mod dump;
mod macro_info;

pub use arena::{MacroArena, MacroTable};
pub use dump::dump_token;
pub use macro_info::{MacroFormalArgument, MacroInfo};

use crate::directive::{lookup_directive, DirectiveKind};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, TokenPayload};
use svlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use svlex_util::span::Span;
use svlex_util::Symbol;

struct OwnedFormal {
    name: Symbol,
    default: Vec<Token>,
}

fn is_backtick(tok: &Token, source: &str) -> bool {
    tok.kind == TokenKind::Unknown && tok.spelling(source) == "`"
}

fn is_comma(tok: &Token, source: &str) -> bool {
    tok.kind == TokenKind::Unknown && tok.spelling(source) == ","
}

/// A lexer with compiler-directive handling layered on top.
pub struct Preprocessor<'a, 'arena> {
    lexer: Lexer<'a>,
    handler: &'a Handler,
    arena: &'arena MacroArena,
    macros: MacroTable<'arena>,
}

impl<'a, 'arena> Preprocessor<'a, 'arena> {
    pub fn new(source: &'a str, handler: &'a Handler, arena: &'arena MacroArena) -> Self {
        Self {
            lexer: Lexer::new(source, handler),
            handler,
            arena,
            macros: MacroTable::new(),
        }
    }

    pub fn macros(&self) -> &MacroTable<'arena> {
        &self.macros
    }

    pub fn source(&self) -> &'a str {
        self.lexer.source()
    }

    /// Returns the next non-directive token. Directive lines are consumed
    /// internally and never surface here.
    pub fn next_token(&mut self) -> Token {
        loop {
            let tok = self.lexer.next_token();
            if !is_backtick(&tok, self.lexer.source()) {
                return tok;
            }
            self.handle_directive(tok.location);
        }
    }

    fn handle_directive(&mut self, backtick_location: usize) {
        let name_tok = self.lexer.next_token();
        if name_tok.kind == TokenKind::Eof {
            // A trailing lone backtick: nothing to dispatch on.
            return;
        }
        let name = name_tok.spelling(self.lexer.source());
        match lookup_directive(name) {
            Some(DirectiveKind::Define) => self.collect_define(),
            Some(_) => self.skip_to_eol(),
            None => {
                self.report_unknown_directive(backtick_location, name);
                self.skip_to_eol();
            }
        }
    }

    /// Implements the five-step `` `define `` collection algorithm: read
    /// the macro name, detect function-like vs. object-like by a
    /// zero-gap `(`, parse formal arguments if function-like, then collect
    /// body tokens up to end-of-line (backslash-newline extends it).
    fn collect_define(&mut self) {
        let name_tok = self.lexer.next_token();
        if name_tok.kind != TokenKind::Identifier {
            self.report_malformed_macro(name_tok.location);
            self.skip_to_eol();
            return;
        }
        let TokenPayload::Ident(name) = name_tok.payload else {
            self.report_malformed_macro(name_tok.location);
            self.skip_to_eol();
            return;
        };

        let is_function_like = self.lexer.peek_raw_byte() == Some(b'(');
        let formals = if is_function_like {
            self.lexer.next_token(); // consume the zero-gap '('
            match self.parse_formal_args() {
                Some(formals) => formals,
                None => {
                    self.report_malformed_macro(name_tok.location);
                    self.skip_to_eol();
                    return;
                }
            }
        } else {
            Vec::new()
        };

        let body_text = self.arena.alloc_str(&self.collect_logical_line());
        let body_tokens = self.lex_body(body_text);

        let arena_formals: Vec<MacroFormalArgument> = formals
            .into_iter()
            .map(|f| MacroFormalArgument {
                name: f.name,
                default: self.arena.alloc_tokens(f.default),
            })
            .collect();

        self.macros.define(MacroInfo {
            name,
            is_function_like,
            formals: self.arena.alloc_formals(arena_formals),
            body: self.arena.alloc_tokens(body_tokens),
            body_text,
        });
    }

    fn parse_formal_args(&mut self) -> Option<Vec<OwnedFormal>> {
        let source = self.lexer.source();
        let mut formals = Vec::new();
        loop {
            let name_tok = self.lexer.next_token();
            if name_tok.kind == TokenKind::RParen && formals.is_empty() {
                return Some(formals);
            }
            let TokenPayload::Ident(name) = name_tok.payload else {
                return None;
            };
            if name_tok.kind != TokenKind::Identifier {
                return None;
            }

            let next = self.lexer.next_token();
            if next.kind == TokenKind::Equal {
                let mut default = Vec::new();
                // A `(`/`)` inside default text (e.g. `a=f(x,y)`) must not
                // be mistaken for the formal-argument list's own closing
                // paren or its comma separators; only terminate once
                // nesting has returned to the top level.
                let mut depth: u32 = 0;
                loop {
                    let t = self.lexer.next_token();
                    if t.kind == TokenKind::Eof {
                        return None;
                    }
                    if depth == 0 && t.kind == TokenKind::RParen {
                        formals.push(OwnedFormal { name, default });
                        return Some(formals);
                    }
                    if depth == 0 && is_comma(&t, source) {
                        break;
                    }
                    match t.kind {
                        TokenKind::LParen => depth += 1,
                        TokenKind::RParen => depth -= 1,
                        _ => {}
                    }
                    default.push(t);
                }
                formals.push(OwnedFormal { name, default });
                continue;
            }

            formals.push(OwnedFormal { name, default: Vec::new() });
            match next.kind {
                TokenKind::RParen => return Some(formals),
                TokenKind::Eof => return None,
                _ if is_comma(&next, source) => continue,
                _ => return None,
            }
        }
    }

    /// Collects the raw remainder of the current physical line, splicing
    /// across `\<newline>` continuations (which are dropped, replaced by a
    /// single space so adjacent tokens don't fuse across the join).
    fn collect_logical_line(&mut self) -> String {
        let mut out = String::new();
        loop {
            match self.lexer.peek_raw_byte() {
                None => break,
                Some(b'\n') => {
                    self.lexer.consume_raw_char();
                    break;
                }
                Some(b'\\') if self.lexer.peek_raw_byte_at(1) == Some(b'\n') => {
                    self.lexer.consume_raw_char();
                    self.lexer.consume_raw_char();
                    out.push(' ');
                }
                Some(_) => out.push(self.lexer.consume_raw_char()),
            }
        }
        out
    }

    fn lex_body(&self, body_text: &'arena str) -> Vec<Token> {
        let mut body_lexer = Lexer::new(body_text, self.handler);
        let mut tokens = Vec::new();
        loop {
            let tok = body_lexer.next_token();
            if tok.kind == TokenKind::Eof {
                break;
            }
            tokens.push(tok);
        }
        tokens
    }

    fn skip_to_eol(&mut self) {
        loop {
            match self.lexer.peek_raw_byte() {
                None => break,
                Some(b'\n') => {
                    self.lexer.consume_raw_char();
                    break;
                }
                Some(_) => {
                    self.lexer.consume_raw_char();
                }
            }
        }
    }

    fn report_unknown_directive(&self, location: usize, name: &str) {
        let span = Span::new(location, location + 1, self.lexer.line(), self.lexer.column());
        DiagnosticBuilder::error(format!("unknown compiler directive `{name}`"))
            .code(DiagnosticCode::E_PP_UNKNOWN_DIRECTIVE)
            .span(span)
            .help("directives are matched against a fixed list; check for a typo")
            .emit(self.handler);
    }

    fn report_malformed_macro(&self, location: usize) {
        let span = Span::new(location, location + 1, self.lexer.line(), self.lexer.column());
        DiagnosticBuilder::error("malformed macro definition")
            .code(DiagnosticCode::E_PP_MALFORMED_MACRO)
            .span(span)
            .emit(self.handler);
    }
}
