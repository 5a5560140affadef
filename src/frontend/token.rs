use super::span::Span;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Single-character delimiters
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Caret,
    Equals,

    // Literals
    Identifier(String),
    Number(f64),

    // Miscellaneous
    Error(String),
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}
