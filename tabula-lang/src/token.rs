//! Shared token set
//!
//! Every notation lexes into the same token kinds; only the surface
//! spellings differ. Tokens carry their byte span so parse errors can
//! point back into the original text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    And,
    Or,
    Xor,
    Not,
    LParen,
    RParen,
    Comma,
    Ident(String),
    Const(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token's first character in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl TokenKind {
    /// Short description used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::And => "'and'".to_string(),
            TokenKind::Or => "'or'".to_string(),
            TokenKind::Xor => "'xor'".to_string(),
            TokenKind::Not => "'not'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Const(v) => format!("constant '{}'", v),
        }
    }
}
