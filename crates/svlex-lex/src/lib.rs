//! svlex-lex - SystemVerilog lexical analysis and compiler-directive
//! preprocessing.
//!
//! This crate turns raw source text into a token stream in two layers:
//!
//! - [`lexer::Lexer`] performs lexical analysis proper: whitespace and
//!   comment skipping, numeric/string/identifier recognition, and the full
//!   punctuation table of IEEE 1800 §5.
//! - [`preprocessor::Preprocessor`] sits on top of a `Lexer` and intercepts
//!   the backtick-introduced compiler directives of §22, most notably
//!   `` `define ``, leaving everything else to skip to end of line.
//!
//! Neither layer does semantic analysis; both are strictly text-to-tokens.

pub mod char_class;
pub mod cursor;
pub mod directive;
pub mod lexer;
pub mod preprocessor;
pub mod token;

pub use directive::{lookup_directive, DirectiveKind};
pub use lexer::Lexer;
pub use preprocessor::{dump_token, MacroArena, MacroFormalArgument, MacroInfo, MacroTable, Preprocessor};
pub use token::{Token, TokenKind, TokenPayload};
