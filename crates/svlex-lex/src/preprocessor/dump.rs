//! The `DumpToken` diagnostic text format: one line per token, used by the
//! driver crate's `--dump-tokens` mode and by this crate's own tests.

use crate::token::Token;
use svlex_util::span::SourceFile;

/// Formats a token as `KIND` + backtick-quoted spelling + tab + `line:col`,
/// with `line`/`col` resolved from `file` (1-based).
pub fn dump_token(token: &Token, file: &SourceFile) -> String {
    let (line, col) = file.offset_to_line_col(token.location);
    let spelling = token.spelling(file.content());
    format!("{}\t`{}`\t{}:{}", token.kind.name(), spelling, line, col)
}
