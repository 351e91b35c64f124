//! svlex-drv - command-line driver for the lexer and preprocessor.
//!
//! Reads each input file, runs the [`svlex_lex::Preprocessor`] over it, and
//! writes one `DumpToken` line per token to standard error, terminated by
//! the file's `EOF` token. This is a diagnostic front end, not a compiler:
//! there is no parser or code generator downstream of it.

use std::path::PathBuf;

use svlex_lex::{dump_token, MacroArena, Preprocessor, TokenKind};
use svlex_util::{Handler, SourceMap};

/// Driver configuration, built from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source files to process, in the order given on the command line.
    pub input_files: Vec<PathBuf>,
    /// Echo each file name to stderr before processing it.
    pub verbose: bool,
    /// Treat a clean lex (zero errors) as a failure if any warnings fired.
    pub warnings_as_errors: bool,
}

impl Config {
    /// Parses a flat argument list (normally `std::env::args().skip(1)`).
    /// Every argument that isn't a recognized flag is treated as an input
    /// file path.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, DriverError> {
        let mut config = Config::default();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => config.verbose = true,
                "--warnings-as-errors" => config.warnings_as_errors = true,
                _ => config.input_files.push(PathBuf::from(arg)),
            }
        }
        if config.input_files.is_empty() {
            return Err(DriverError::NoInputFiles);
        }
        Ok(config)
    }
}

/// Errors the driver can report; propagated to `main` as an `anyhow::Error`.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("no input files given")]
    NoInputFiles,
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("{0} of {1} file(s) did not lex cleanly")]
    LexFailed(usize, usize),
}

/// One driver invocation: the files to process and the source text loaded
/// from them so far.
pub struct Session {
    config: Config,
    sources: SourceMap,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
        }
    }

    /// Processes every configured input file. A file that can't be read is
    /// reported and counted as a failure but does not stop the remaining
    /// files from being processed. Returns `Ok(())` only if every file
    /// lexed without a fatal error (and, under `warnings_as_errors`,
    /// without any warning either).
    pub fn run(&mut self) -> Result<(), DriverError> {
        let total = self.config.input_files.len();
        let mut failed = 0;
        for path in self.config.input_files.clone() {
            if self.config.verbose {
                eprintln!("svlex: processing {}", path.display());
            }
            match self.process_file(&path) {
                Ok(true) => {}
                Ok(false) => failed += 1,
                Err(e) => {
                    eprintln!("error: {e}");
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            return Err(DriverError::LexFailed(failed, total));
        }
        Ok(())
    }

    /// Lexes and preprocesses one file, dumping its token stream to
    /// stderr. Returns `true` if the file's diagnostics were clean under
    /// the configured policy.
    fn process_file(&mut self, path: &PathBuf) -> Result<bool, DriverError> {
        let content = std::fs::read_to_string(path).map_err(|e| DriverError::Io(path.clone(), e))?;
        let file_id = self.sources.add_file(path.display().to_string(), content);
        let file = self.sources.get(file_id).expect("file was just added to the source map");

        let handler = Handler::new();
        let arena = MacroArena::new();
        let mut pp = Preprocessor::new(file.content(), &handler, &arena);

        loop {
            let tok = pp.next_token();
            let at_eof = tok.kind == TokenKind::Eof;
            eprintln!("{}", dump_token(&tok, &file));
            if at_eof {
                break;
            }
        }

        for diag in handler.diagnostics() {
            let (line, column) = file.offset_to_line_col(diag.span.start);
            eprintln!("{}: {} --> {}:{}:{}", diag.level, diag.message, file.name(), line, column);
        }

        Ok(if self.config.warnings_as_errors {
            handler.error_count() == 0 && handler.warning_count() == 0
        } else {
            !handler.has_errors()
        })
    }
}

/// Entry point shared by `main.rs`: parses `std::env::args`, runs the
/// session, and maps any failure onto a single `anyhow::Error`.
pub fn run() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    let mut session = Session::new(config);
    session.run()?;
    Ok(())
}
