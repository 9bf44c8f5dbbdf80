use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Token {
    kind: Kind,
    lexeme: String,
    literal: Option<Literal>,
    line: usize,
}

impl Token {
    pub(crate) fn new(kind: Kind, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    pub(crate) fn eof(line: usize) -> Self {
        Self::new(Kind::Eof, String::new(), None, line)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The exact source text consumed for this token. Empty for `Eof`.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// 1-based line on which the token finished scanning.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}

/// Decoded value carried by `String` and `Number` tokens.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    // Single-character punctuation
    LeftParen,   // (
    RightParen,  // )
    LeftBrace,   // {
    RightBrace,  // }
    Comma,       // ,
    Dot,         // .
    Minus,       // -
    Plus,        // +
    Semicolon,   // ;
    Slash,       // /
    Star,        // *

    // One or two character operators
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof, // End of file marker
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::LeftParen => "LEFT_PAREN",
            Kind::RightParen => "RIGHT_PAREN",
            Kind::LeftBrace => "LEFT_BRACE",
            Kind::RightBrace => "RIGHT_BRACE",
            Kind::Comma => "COMMA",
            Kind::Dot => "DOT",
            Kind::Minus => "MINUS",
            Kind::Plus => "PLUS",
            Kind::Semicolon => "SEMICOLON",
            Kind::Slash => "SLASH",
            Kind::Star => "STAR",
            Kind::Bang => "BANG",
            Kind::BangEqual => "BANG_EQUAL",
            Kind::Equal => "EQUAL",
            Kind::EqualEqual => "EQUAL_EQUAL",
            Kind::Greater => "GREATER",
            Kind::GreaterEqual => "GREATER_EQUAL",
            Kind::Less => "LESS",
            Kind::LessEqual => "LESS_EQUAL",
            Kind::Identifier => "IDENTIFIER",
            Kind::String => "STRING",
            Kind::Number => "NUMBER",
            Kind::And => "AND",
            Kind::Class => "CLASS",
            Kind::Else => "ELSE",
            Kind::False => "FALSE",
            Kind::Fun => "FUN",
            Kind::For => "FOR",
            Kind::If => "IF",
            Kind::Nil => "NIL",
            Kind::Or => "OR",
            Kind::Print => "PRINT",
            Kind::Return => "RETURN",
            Kind::Super => "SUPER",
            Kind::This => "THIS",
            Kind::True => "TRUE",
            Kind::Var => "VAR",
            Kind::While => "WHILE",
            Kind::Eof => "EOF",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
