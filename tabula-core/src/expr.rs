//! Abstract Syntax Tree
//!
//! Canonical, notation-independent representation of one boolean
//! expression. Nodes are immutable values: two nodes are equal iff their
//! structure is equal, and the derived `Hash` follows that equality so
//! expressions can key maps and sets directly.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// Literal true/false.
    Constant(bool),
    /// Free variable reference; name matches `[A-Za-z][A-Za-z0-9_]*`.
    Variable(String),
    BinaryOp(Box<Expr>, BinOp, Box<Expr>),
    UnaryOp(UnOp, Box<Expr>),
    /// Explicit parenthesization. Transparent for evaluation but preserved
    /// so the display layer can round-trip the user's grouping.
    Group(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinOp {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnOp {
    Not,
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(left), op, Box::new(right))
    }

    pub fn not(inner: Expr) -> Self {
        Expr::UnaryOp(UnOp::Not, Box::new(inner))
    }

    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }

    /// True for bare `Variable`/`Constant` roots, which are not worth a
    /// dedicated truth-table column.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Variable(_) | Expr::Constant(_))
    }
}

/// Renders in the bare math notation (`¬`, `∧`, `∨`, `⊕`).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(true) => write!(f, "⊤"),
            Expr::Constant(false) => write!(f, "⊥"),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::BinaryOp(l, op, r) => write!(f, "{} {} {}", l, op, r),
            Expr::UnaryOp(UnOp::Not, inner) => write!(f, "¬{}", inner),
            Expr::Group(inner) => write!(f, "({})", inner),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::And => write!(f, "∧"),
            BinOp::Or => write!(f, "∨"),
            BinOp::Xor => write!(f, "⊕"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let a = Expr::binary(Expr::var("a"), BinOp::And, Expr::var("b"));
        let b = Expr::binary(Expr::var("a"), BinOp::And, Expr::var("b"));
        assert_eq!(a, b);
        assert_ne!(a, Expr::binary(Expr::var("b"), BinOp::And, Expr::var("a")));
    }

    #[test]
    fn test_group_is_not_transparent_for_equality() {
        let bare = Expr::var("a");
        let grouped = Expr::group(Expr::var("a"));
        assert_ne!(bare, grouped);
    }

    #[test]
    fn test_usable_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Expr::binary(Expr::var("a"), BinOp::Or, Expr::var("b")));
        set.insert(Expr::binary(Expr::var("a"), BinOp::Or, Expr::var("b")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_math_notation() {
        let e = Expr::binary(
            Expr::not(Expr::var("a")),
            BinOp::And,
            Expr::group(Expr::binary(Expr::var("b"), BinOp::Xor, Expr::Constant(true))),
        );
        assert_eq!(format!("{}", e), "¬a ∧ (b ⊕ ⊤)");
    }
}
