//! Universal invariants that must hold for every source buffer, checked
//! with property-based testing, plus the punctuation round-trip table.

use proptest::prelude::*;
use svlex_lex::{Lexer, TokenKind};
use svlex_util::diagnostic::Handler;

/// Every closed punctuation kind paired with its canonical spelling, taken
/// from the external interface table.
const PUNCTUATION: &[(&str, TokenKind)] = {
    use TokenKind::*;
    &[
        ("+", Plus),
        ("++", PlusPlus),
        ("+=", PlusEqual),
        ("+:", PlusColon),
        ("-", Minus),
        ("--", MinusMinus),
        ("-=", MinusEqual),
        ("-:", MinusColon),
        ("->", Arrow),
        ("->>", MinusGreaterGreater),
        ("*", Star),
        ("**", StarStar),
        ("*=", StarEqual),
        ("*>", StarGreater),
        ("*)", StarRParen),
        ("/", Slash),
        ("/=", SlashEqual),
        ("%", Percent),
        ("%=", PercentEqual),
        ("&", Amp),
        ("&&", AmpAmp),
        ("&&&", AmpAmpAmp),
        ("&=", AmpEqual),
        ("|", Pipe),
        ("||", PipePipe),
        ("|->", PipeMinusGreater),
        ("|=>", PipeEqualGreater),
        ("|=", PipeEqual),
        ("^", Caret),
        ("^~", CaretTilde),
        ("^=", CaretEqual),
        ("<", Less),
        ("<=", LessEqual),
        ("<->", LessMinusGreater),
        ("<<", LessLess),
        ("<<<", LessLessLess),
        ("<<=", LessLessEqual),
        ("<<<=", LessLessLessEqual),
        (">", Greater),
        (">=", GreaterEqual),
        (">>", GreaterGreater),
        (">>>", GreaterGreaterGreater),
        (">>=", GreaterGreaterEqual),
        (">>>=", GreaterGreaterGreaterEqual),
        ("?", Question),
        ("~", Tilde),
        ("~&", TildeAmp),
        ("~|", TildePipe),
        ("~^", TildeCaret),
        ("!", Exclaim),
        ("!=", ExclaimEqual),
        ("!==", ExclaimEqualEqual),
        ("!=?", ExclaimEqualQuestion),
        (":", Colon),
        (":=", ColonEqual),
        (":/", ColonSlash),
        ("::", ColonColon),
        ("'{", ApostropheLBrace),
        ("(", LParen),
        ("(*", LParenStar),
        (")", RParen),
        ("{", LBrace),
        ("}", RBrace),
        ("[", LSquare),
        ("]", RSquare),
        ("@", At),
        ("@@", AtAt),
        (";", Semi),
        ("#", Hash),
        ("##", HashHash),
        ("#-#", HashMinusHash),
        ("#=#", HashEqualHash),
        (".", Period),
        (".*", PeriodStar),
        ("$", Dollar),
        ("=", Equal),
        ("==", EqualEqual),
        ("===", EqualEqualEqual),
        ("==?", EqualEqualQuestion),
    ]
};

#[test]
fn every_punctuation_kind_round_trips_in_isolation() {
    for &(spelling, kind) in PUNCTUATION {
        let handler = Handler::new();
        let mut lexer = Lexer::new(spelling, &handler);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, kind, "lexing {spelling:?} produced {:?}, expected {:?}", tok.kind, kind);
        assert_eq!(tok.location, 0);
        assert_eq!(tok.length, spelling.len());
        assert_eq!(lexer.next_token().kind, TokenKind::Eof, "trailing token after {spelling:?}");
    }
}

fn tokenize(source: &str) -> Vec<(TokenKind, usize, usize)> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, &handler);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        out.push((tok.kind, tok.location, tok.length));
        if done {
            break;
        }
    }
    out
}

proptest! {
    /// Monotonicity: consecutive tokens have non-overlapping, ordered
    /// source ranges.
    #[test]
    fn tokens_are_monotonically_ordered(source in "\\PC{0,200}") {
        let tokens = tokenize(&source);
        for pair in tokens.windows(2) {
            let (_, loc_a, len_a) = pair[0];
            let (_, loc_b, _) = pair[1];
            prop_assert!(loc_a + len_a <= loc_b);
        }
    }

    /// Termination: lexing any buffer yields a finite token count bounded
    /// by length(buffer) + 1 (every non-EOF token is at least one byte).
    #[test]
    fn token_count_is_bounded_by_source_length(source in "\\PC{0,200}") {
        let tokens = tokenize(&source);
        prop_assert!(tokens.len() <= source.len() + 1);
    }

    /// Idempotent EOF: once EOF is produced, every further call also
    /// produces EOF.
    #[test]
    fn eof_is_a_sticky_terminal_state(source in "\\PC{0,100}") {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        loop {
            if lexer.next_token().kind == TokenKind::Eof {
                break;
            }
        }
        for _ in 0..5 {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    /// Coverage: the last token's end is always the buffer length, i.e.
    /// nothing trails the final EOF and no byte range is skipped without
    /// being claimed by some token or by whitespace/comment trivia implicit
    /// between consecutive token ranges.
    #[test]
    fn final_eof_location_is_the_buffer_length(source in "\\PC{0,200}") {
        let tokens = tokenize(&source);
        let (last_kind, last_loc, _) = *tokens.last().unwrap();
        prop_assert_eq!(last_kind, TokenKind::Eof);
        prop_assert_eq!(last_loc, source.len());
    }
}
