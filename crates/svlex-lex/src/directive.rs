//! Compiler-directive kinds and the read-only spelling lookup table.
//!
//! Built once at first use (a `const fn`-friendly match, no runtime table
//! construction is needed for 19 entries).

/// The closed set of compiler-directive kinds. Only `Define` is handled
/// semantically by the preprocessor; the rest are recognized so that
/// unknown-directive detection has a complete list to check against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Define,
    Undef,
    Ifdef,
    Ifndef,
    Else,
    Elsif,
    Endif,
    Include,
    Timescale,
    Resetall,
    Celldefine,
    Endcelldefine,
    DefaultNettype,
    Line,
    Pragma,
    BeginKeywords,
    EndKeywords,
    File,
    LineMacro,
}

/// Looks up a directive by its spelling, without the leading grave accent.
///
/// Returns `None` for any identifier that is not a known compiler
/// directive; the caller treats that as an unknown-directive error.
pub fn lookup_directive(spelling: &str) -> Option<DirectiveKind> {
    use DirectiveKind::*;
    Some(match spelling {
        "define" => Define,
        "undef" => Undef,
        "ifdef" => Ifdef,
        "ifndef" => Ifndef,
        "else" => Else,
        "elsif" => Elsif,
        "endif" => Endif,
        "include" => Include,
        "timescale" => Timescale,
        "resetall" => Resetall,
        "celldefine" => Celldefine,
        "endcelldefine" => Endcelldefine,
        "default_nettype" => DefaultNettype,
        "line" => Line,
        "pragma" => Pragma,
        "begin_keywords" => BeginKeywords,
        "end_keywords" => EndKeywords,
        "__FILE__" => File,
        "__LINE__" => LineMacro,
        _ => return None,
    })
}
