use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Sink for recoverable lexical errors. The scanner reports through this
/// and keeps going; deciding whether a run failed is up to the caller.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, message: &str);
}

impl<F> ErrorReporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexicalError {
    pub line: usize,
    pub message: String,
}

impl LexicalError {
    pub fn new(line: usize, message: String) -> Self {
        Self { line, message }
    }
}

impl Error for LexicalError {}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Records every reported error in order.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<LexicalError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.errors.push(LexicalError::new(line, message.to_string()));
    }
}

/// Writes errors to a sink as they arrive and counts them until `reset`.
pub struct ConsoleReporter<W: Write> {
    sink: W,
    errors: usize,
}

impl ConsoleReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, errors: 0 }
    }

    pub fn had_error(&self) -> bool {
        self.errors > 0
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn reset(&mut self) {
        self.errors = 0;
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, line: usize, message: &str) {
        self.errors += 1;
        // A closed stderr shouldn't stop the scan.
        let _ = writeln!(self.sink, "{}", LexicalError::new(line, message.to_string()));
    }
}

#[derive(Debug)]
pub enum LoxError {
    Usage(String),
    Io { path: PathBuf, source: io::Error },
    Lexical { count: usize },
    Config { path: PathBuf, source: serde_json::Error },
}

impl LoxError {
    /// Process exit status, following sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoxError::Usage(_) => 64,
            LoxError::Lexical { .. } => 65,
            LoxError::Io { .. } => 74,
            LoxError::Config { .. } => 78,
        }
    }
}

impl Error for LoxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoxError::Io { source, .. } => Some(source),
            LoxError::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoxError::Usage(program) => write!(f, "Usage: {} [script]", program),
            LoxError::Io { path, source } => write!(f, "IOError: {}: {}", path.display(), source),
            LoxError::Lexical { count } => write!(f, "{} lexical error(s)", count),
            LoxError::Config { path, source } => {
                write!(f, "ConfigError: {}: {}", path.display(), source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_keep_errors_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());

        diagnostics.report(1, "Unexpected character.");
        diagnostics.report(3, "Unterminated string.");

        assert!(diagnostics.had_error());
        assert_eq!(
            diagnostics.errors(),
            &[
                LexicalError::new(1, "Unexpected character.".to_string()),
                LexicalError::new(3, "Unterminated string.".to_string()),
            ]
        );
    }

    #[test]
    fn console_reporter_writes_and_resets() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(2, "Unexpected character.");
        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 1);

        reporter.reset();
        assert!(!reporter.had_error());

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(written, "[line 2] Error: Unexpected character.\n");
    }

    #[test]
    fn closures_are_reporters() {
        let mut lines = Vec::new();
        {
            let mut reporter = |line: usize, _: &str| lines.push(line);
            reporter.report(7, "x");
        }
        assert_eq!(lines, vec![7]);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(LoxError::Usage("lox".to_string()).exit_code(), 64);
        assert_eq!(LoxError::Lexical { count: 2 }.exit_code(), 65);
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(LoxError::Io { path: PathBuf::from("a.lox"), source: io }.exit_code(), 74);
        assert_eq!(LoxError::Usage("lox".to_string()).to_string(), "Usage: lox [script]");
    }
}
