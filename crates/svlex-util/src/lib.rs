//! svlex-util - Core utilities shared by the lexer and preprocessor.
//!
//! This crate hosts the foundation types used throughout the SystemVerilog
//! front end: interned identifiers ([`Symbol`]), source location tracking
//! ([`Span`], [`SourceMap`]), and diagnostic reporting ([`Handler`],
//! [`Diagnostic`]). None of these types are specific to SystemVerilog; they
//! exist so the lexer and preprocessor crates can stay free of bookkeeping
//! concerns.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult, SymbolError, SymbolResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
