//! Bump-allocated storage for macro records.
//!
//! Macro bodies and formal-argument lists live for the lifetime of the
//! whole preprocessing run, are never individually freed, and are
//! typically small; a `bumpalo::Bump` is a better fit than per-macro
//! `Vec` allocations that the allocator would otherwise have to manage
//! one at a time.

use super::macro_info::{MacroFormalArgument, MacroInfo};
use crate::token::Token;
use bumpalo::Bump;
use svlex_util::{FxHashMap, Symbol};

pub struct MacroArena {
    bump: Bump,
}

impl MacroArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    pub fn alloc_tokens(&self, tokens: Vec<Token>) -> &[Token] {
        self.bump.alloc_slice_fill_iter(tokens)
    }

    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    pub fn alloc_formals<'arena>(
        &'arena self,
        formals: Vec<MacroFormalArgument<'arena>>,
    ) -> &'arena [MacroFormalArgument<'arena>] {
        self.bump.alloc_slice_fill_iter(formals)
    }
}

impl Default for MacroArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Name-keyed macro table. Redefining a name silently replaces the prior
/// record (the old arena allocation is simply abandoned; the bump arena
/// does not reclaim it until the whole table is dropped).
#[derive(Default)]
pub struct MacroTable<'arena> {
    macros: FxHashMap<Symbol, MacroInfo<'arena>>,
}

impl<'arena> MacroTable<'arena> {
    pub fn new() -> Self {
        Self {
            macros: FxHashMap::default(),
        }
    }

    pub fn define(&mut self, info: MacroInfo<'arena>) {
        self.macros.insert(info.name, info);
    }

    pub fn get(&self, name: Symbol) -> Option<&MacroInfo<'arena>> {
        self.macros.get(&name)
    }

    pub fn is_defined(&self, name: Symbol) -> bool {
        self.macros.contains_key(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn redefinition_replaces_prior_record() {
        let arena = MacroArena::new();
        let mut table = MacroTable::new();
        let name = Symbol::intern("FOO");

        table.define(MacroInfo {
            name,
            is_function_like: false,
            formals: &[],
            body: arena.alloc_tokens(vec![Token::new(TokenKind::IntegerLiteral, 0, 1)]),
            body_text: "1",
        });
        assert_eq!(table.get(name).unwrap().body.len(), 1);

        table.define(MacroInfo {
            name,
            is_function_like: false,
            formals: &[],
            body: arena.alloc_tokens(vec![]),
            body_text: "",
        });
        assert_eq!(table.get(name).unwrap().body.len(), 0);
    }
}
