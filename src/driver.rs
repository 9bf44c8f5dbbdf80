use crate::config::{Config, OutputFormat};
use crate::error::{ConsoleReporter, ErrorReporter, LoxError};
use crate::scanner::Scanner;
use crate::token::Token;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub struct Lox {
    config: Config,
}

impl Lox {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans `source` once and writes every token to `out`.
    pub fn run(
        &self,
        source: &str,
        reporter: &mut dyn ErrorReporter,
        out: &mut dyn Write,
    ) -> io::Result<Vec<Token>> {
        let mut errors = 0;
        let tokens = {
            let mut counting = |line: usize, message: &str| {
                errors += 1;
                reporter.report(line, message);
            };
            Scanner::new(source).scan_tokens(&mut counting)
        };

        if self.config.debug {
            eprintln!("[debug] scanned {} token(s), {} error(s)", tokens.len(), errors);
        }

        for token in &tokens {
            self.write_token(token, out)?;
        }

        Ok(tokens)
    }

    fn write_token(&self, token: &Token, out: &mut dyn Write) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => writeln!(out, "{}", token),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)
            }
        }
    }

    /// Runs a script file. Any lexical error fails the whole run, but only
    /// after the full scan has completed.
    pub fn run_file(&self, path: &Path) -> Result<(), LoxError> {
        let source_code = fs::read_to_string(path).map_err(|source| LoxError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reporter = ConsoleReporter::stderr();
        let stdout = io::stdout();
        self.run(&source_code, &mut reporter, &mut stdout.lock())
            .map_err(|source| LoxError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;

        if reporter.had_error() {
            return Err(LoxError::Lexical {
                count: reporter.error_count(),
            });
        }

        Ok(())
    }

    /// Reads and scans one line at a time until a blank line or end of
    /// input. Errors are reported to `errors` and forgotten after each line.
    pub fn run_prompt<R, W, E>(&self, input: R, mut output: W, errors: E) -> Result<(), LoxError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let io_error = |source: io::Error| LoxError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        };

        let mut reporter = ConsoleReporter::new(errors);
        let mut lines = input.lines();

        loop {
            write!(output, "{}", self.config.prompt).map_err(io_error)?;
            output.flush().map_err(io_error)?;

            let line = match lines.next() {
                Some(line) => line.map_err(io_error)?,
                None => break,
            };
            if line.trim_end_matches('\r').is_empty() {
                break;
            }

            self.run(&line, &mut reporter, &mut output).map_err(io_error)?;
            reporter.reset();
        }

        Ok(())
    }
}
