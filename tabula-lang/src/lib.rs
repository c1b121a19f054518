//! Tabula Lang - Notation grammars and auto-detection
//!
//! The language layer of Tabula:
//! - per-notation tokenizers plus a shared precedence parser (C-like,
//!   Python-like, LaTeX-like, bare math)
//! - the normalizer from raw parse nodes to the canonical AST
//! - the notation registry with first-success auto-detection and the
//!   furthest-failure diagnostic when nothing parses
//! - a renderer from AST back to any notation's surface syntax

mod lexer;
mod parser;
mod raw;
mod registry;
mod render;
mod token;

pub use parser::parse;
pub use raw::{normalize, RawNode, RawOp};
pub use registry::{parse_document, ParsedDocument, DETECTION_ORDER};
pub use render::{render, render_document};

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{BinOp, ConcreteNotation, Expr, Notation};

    fn parse_one(text: &str, notation: ConcreteNotation) -> Expr {
        let doc = parse_document(text, notation.into()).unwrap();
        assert_eq!(doc.expressions.len(), 1);
        doc.expressions.into_iter().next().unwrap()
    }

    /// Rendering a parsed AST and parsing it again yields a structurally
    /// equal AST, for every concrete notation.
    #[test]
    fn test_round_trip_every_notation() {
        let expr = parse_one("!(a && b) || c ^ (true && !d)", ConcreteNotation::C);
        for notation in DETECTION_ORDER {
            let text = render(&expr, notation);
            let reparsed = parse_one(&text, notation);
            assert_eq!(reparsed, expr, "round trip failed for {}", notation);
        }
    }

    #[test]
    fn test_round_trip_hand_built_ast() {
        // (a ∨ b) ⊕ ¬⊥ with an explicit group, as the parser would shape it.
        let expr = Expr::binary(
            Expr::group(Expr::binary(Expr::var("a"), BinOp::Or, Expr::var("b"))),
            BinOp::Xor,
            Expr::not(Expr::Constant(false)),
        );
        for notation in DETECTION_ORDER {
            let text = render(&expr, notation);
            assert_eq!(parse_one(&text, notation), expr);
        }
    }

    #[test]
    fn test_round_trip_document_list() {
        let doc = parse_document("a && b, !c", Notation::C).unwrap();
        let text = render_document(&doc.expressions, ConcreteNotation::Python);
        let reparsed = parse_document(&text, Notation::Python).unwrap();
        assert_eq!(reparsed.expressions, doc.expressions);
    }
}
