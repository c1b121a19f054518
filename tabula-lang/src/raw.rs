//! Raw parse nodes and normalization
//!
//! Each grammar produces `RawNode`s; `normalize` maps them into the
//! canonical, structurally-comparable [`Expr`] of `tabula-core`. The
//! mapping is total and pure, and keeps one explicit `Group` per
//! syntactic parenthesization so display round-trips the user's input.

use tabula_core::{BinOp, Expr, UnOp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    Literal(bool),
    Ident(String),
    Group(Box<RawNode>),
    Not(Box<RawNode>),
    Binary(Box<RawNode>, RawOp, Box<RawNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOp {
    And,
    Or,
    Xor,
}

/// Convert a raw parse node into the canonical AST.
pub fn normalize(node: RawNode) -> Expr {
    match node {
        RawNode::Literal(value) => Expr::Constant(value),
        RawNode::Ident(name) => Expr::Variable(name),
        RawNode::Group(inner) => Expr::group(normalize(*inner)),
        RawNode::Not(inner) => Expr::not(normalize(*inner)),
        RawNode::Binary(left, op, right) => {
            let op = match op {
                RawOp::And => BinOp::And,
                RawOp::Or => BinOp::Or,
                RawOp::Xor => BinOp::Xor,
            };
            Expr::binary(normalize(*left), op, normalize(*right))
        }
    }
}
