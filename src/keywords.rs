use crate::token::Kind;

/// Every reserved word, in alphabetical order.
pub const KEYWORDS: [(&str, Kind); 16] = [
    ("and", Kind::And),
    ("class", Kind::Class),
    ("else", Kind::Else),
    ("false", Kind::False),
    ("fun", Kind::Fun),
    ("for", Kind::For),
    ("if", Kind::If),
    ("nil", Kind::Nil),
    ("or", Kind::Or),
    ("print", Kind::Print),
    ("return", Kind::Return),
    ("super", Kind::Super),
    ("this", Kind::This),
    ("true", Kind::True),
    ("var", Kind::Var),
    ("while", Kind::While),
];

/// Reclassifies a fully scanned identifier. Returns `None` for anything
/// that isn't an exact reserved word.
pub fn keyword(ident: &str) -> Option<Kind> {
    match ident {
        "and" => Some(Kind::And),
        "class" => Some(Kind::Class),
        "else" => Some(Kind::Else),
        "false" => Some(Kind::False),
        "fun" => Some(Kind::Fun),
        "for" => Some(Kind::For),
        "if" => Some(Kind::If),
        "nil" => Some(Kind::Nil),
        "or" => Some(Kind::Or),
        "print" => Some(Kind::Print),
        "return" => Some(Kind::Return),
        "super" => Some(Kind::Super),
        "this" => Some(Kind::This),
        "true" => Some(Kind::True),
        "var" => Some(Kind::Var),
        "while" => Some(Kind::While),
        _ => None,
    }
}
