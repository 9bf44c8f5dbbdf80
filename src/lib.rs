//! Scanner for the Lox scripting language.
//!
//! Turns source text into a flat list of [`Token`]s ending in a single
//! `Eof`. Malformed input never aborts a scan: each lexical error is handed
//! to an [`ErrorReporter`] and scanning carries on with the next character.
//!
//! ```
//! use lox_scanner::{scan, Diagnostics, Kind, Literal};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = scan("var x = 12;\n", &mut diagnostics);
//!
//! let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![Kind::Var, Kind::Identifier, Kind::Equal, Kind::Number, Kind::Semicolon, Kind::Eof]
//! );
//! assert_eq!(tokens[3].literal(), Some(&Literal::Number(12.0)));
//! assert_eq!(tokens[5].line(), 2);
//! assert!(!diagnostics.had_error());
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use crate::config::{Config, OutputFormat};
pub use crate::driver::Lox;
pub use crate::error::{ConsoleReporter, Diagnostics, ErrorReporter, LexicalError, LoxError};
pub use crate::keywords::{keyword, KEYWORDS};
pub use crate::scanner::{dispatch, Action, Scanner};
pub use crate::token::{Kind, Literal, Token};

/// Scans `source` in one pass, reporting lexical errors to `reporter`.
pub fn scan(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}
