//! Data model for a recorded `` `define `` macro.

use crate::token::Token;
use svlex_util::Symbol;

/// One formal argument of a function-like macro: a name, and an optional
/// default-text token sequence used when the call site omits that
/// argument.
#[derive(Clone, Debug)]
pub struct MacroFormalArgument<'arena> {
    pub name: Symbol,
    pub default: &'arena [Token],
}

/// A recorded macro definition. Object-like macros have `formals` empty
/// and `is_function_like` false; function-like macros (the name
/// immediately followed by `(` with no gap) have at least the parameter
/// list, possibly empty.
#[derive(Clone, Debug)]
pub struct MacroInfo<'arena> {
    pub name: Symbol,
    pub is_function_like: bool,
    pub formals: &'arena [MacroFormalArgument<'arena>],
    pub body: &'arena [Token],
    /// The buffer `body`'s token offsets are relative to: the macro's
    /// physical lines joined at backslash-newline continuations. Needed to
    /// recover a body token's spelling with [`Token::spelling`].
    pub body_text: &'arena str,
}
