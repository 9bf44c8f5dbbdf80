use crate::error::ErrorReporter;
use crate::keywords::keyword;
use crate::token::{Kind, Literal, Token};

/// What the scanner does with the character it just consumed, decided from
/// that character and one character of lookahead.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    /// Emit a single-character token.
    Emit(Kind),
    /// Consume the lookahead `=` as well and emit the two-character token.
    EmitPair(Kind),
    LineComment,
    Whitespace,
    Newline,
    String,
    Number,
    Identifier,
    Unexpected,
}

pub fn dispatch(c: char, next: Option<char>) -> Action {
    let followed_by_equals = next == Some('=');

    match c {
        '(' => Action::Emit(Kind::LeftParen),
        ')' => Action::Emit(Kind::RightParen),
        '{' => Action::Emit(Kind::LeftBrace),
        '}' => Action::Emit(Kind::RightBrace),
        ',' => Action::Emit(Kind::Comma),
        '.' => Action::Emit(Kind::Dot),
        '-' => Action::Emit(Kind::Minus),
        '+' => Action::Emit(Kind::Plus),
        ';' => Action::Emit(Kind::Semicolon),
        '*' => Action::Emit(Kind::Star),
        '!' if followed_by_equals => Action::EmitPair(Kind::BangEqual),
        '!' => Action::Emit(Kind::Bang),
        '=' if followed_by_equals => Action::EmitPair(Kind::EqualEqual),
        '=' => Action::Emit(Kind::Equal),
        '<' if followed_by_equals => Action::EmitPair(Kind::LessEqual),
        '<' => Action::Emit(Kind::Less),
        '>' if followed_by_equals => Action::EmitPair(Kind::GreaterEqual),
        '>' => Action::Emit(Kind::Greater),
        '/' if next == Some('/') => Action::LineComment,
        '/' => Action::Emit(Kind::Slash),
        ' ' | '\r' | '\t' => Action::Whitespace,
        '\n' => Action::Newline,
        '"' => Action::String,
        c if c.is_ascii_digit() => Action::Number,
        c if is_identifier_start(c) => Action::Identifier,
        _ => Action::Unexpected,
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Single-use tokenizer over one source buffer. `start` and `current` are
/// byte offsets and always sit on `char` boundaries.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source. Lexical errors go to `reporter` and never
    /// stop the pass; the result always ends with exactly one `Eof`.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
        while !self.is_eof() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn ErrorReporter) {
        let c = self.advance();

        match dispatch(c, self.peek()) {
            Action::Emit(kind) => self.add_token(kind, None),
            Action::EmitPair(kind) => {
                self.advance();
                self.add_token(kind, None);
            }
            Action::LineComment => {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            }
            Action::Whitespace => {}
            Action::Newline => self.line += 1,
            Action::String => self.string(reporter),
            Action::Number => self.number(),
            Action::Identifier => self.identifier(),
            Action::Unexpected => reporter.report(self.line, "Unexpected character."),
        }
    }

    fn string(&mut self, reporter: &mut dyn ErrorReporter) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_eof() {
            reporter.report(self.line, "Unterminated string.");
            return;
        }

        self.advance(); // closing quote
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token(Kind::String, Some(Literal::String(value.to_string())));
    }

    fn number(&mut self) {
        self.digits();

        // A trailing '.' without a digit after it belongs to the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.digits();
        }

        // digits[.digits] always parses; a failure here is a scanner bug.
        let value = match self.lexeme().parse::<f64>() {
            Ok(value) => value,
            Err(e) => panic!("scanned number {:?} failed to parse: {}", self.lexeme(), e),
        };
        self.add_token(Kind::Number, Some(Literal::Number(value)));
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_part) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(Kind::Identifier);
        self.add_token(kind, None);
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: Kind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn is_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> char {
        match self.peek() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => panic!(
                "scanner advanced past end of source (offset {})",
                self.current
            ),
        }
    }
}
