//! Tabula Core - Fundamental types
//!
//! This crate provides the core types used throughout Tabula:
//! - `Expr`: canonical boolean-expression AST with structural equality
//! - `Notation` / `ConcreteNotation`: the closed set of input syntaxes
//! - `SyntaxError` / `ParseError`: parse failures as values, with caret
//!   precision locations

mod error;
mod expr;
mod notation;

pub use error::{codes, Location, ParseError, SyntaxError};
pub use expr::{BinOp, Expr, UnOp};
pub use notation::{ConcreteNotation, Notation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BinOp, ConcreteNotation, Expr, Notation, ParseError, SyntaxError, UnOp};
}
