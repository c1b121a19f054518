//! Notation renderer
//!
//! Serializes a canonical AST back to one notation's surface syntax.
//! Parentheses come only from `Group` nodes, so text produced from a
//! parsed expression re-parses to a structurally equal AST.

use tabula_core::{BinOp, ConcreteNotation, Expr, UnOp};

/// Render one expression in the given notation.
pub fn render(expr: &Expr, notation: ConcreteNotation) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, notation);
    out
}

/// Render a top-level expression list, comma-separated.
pub fn render_document(expressions: &[Expr], notation: ConcreteNotation) -> String {
    expressions
        .iter()
        .map(|e| render(e, notation))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_expr(out: &mut String, expr: &Expr, notation: ConcreteNotation) {
    match expr {
        Expr::Constant(value) => out.push_str(constant(*value, notation)),
        Expr::Variable(name) => out.push_str(name),
        Expr::BinaryOp(l, op, r) => {
            write_expr(out, l, notation);
            out.push(' ');
            out.push_str(binary_op(*op, notation));
            out.push(' ');
            write_expr(out, r, notation);
        }
        Expr::UnaryOp(UnOp::Not, inner) => {
            out.push_str(not_prefix(notation));
            write_expr(out, inner, notation);
        }
        Expr::Group(inner) => {
            out.push('(');
            write_expr(out, inner, notation);
            out.push(')');
        }
    }
}

fn binary_op(op: BinOp, notation: ConcreteNotation) -> &'static str {
    match notation {
        ConcreteNotation::C => match op {
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Xor => "^",
        },
        ConcreteNotation::Python => match op {
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Xor => "^",
        },
        ConcreteNotation::Latex => match op {
            BinOp::And => "\\land",
            BinOp::Or => "\\lor",
            BinOp::Xor => "\\oplus",
        },
        ConcreteNotation::Math => match op {
            BinOp::And => "∧",
            BinOp::Or => "∨",
            BinOp::Xor => "⊕",
        },
    }
}

fn not_prefix(notation: ConcreteNotation) -> &'static str {
    match notation {
        ConcreteNotation::C => "!",
        ConcreteNotation::Python => "not ",
        ConcreteNotation::Latex => "\\lnot ",
        ConcreteNotation::Math => "¬",
    }
}

fn constant(value: bool, notation: ConcreteNotation) -> &'static str {
    match notation {
        ConcreteNotation::C => {
            if value {
                "true"
            } else {
                "false"
            }
        }
        ConcreteNotation::Python => {
            if value {
                "True"
            } else {
                "False"
            }
        }
        ConcreteNotation::Latex => {
            if value {
                "\\top"
            } else {
                "\\bot"
            }
        }
        ConcreteNotation::Math => {
            if value {
                "⊤"
            } else {
                "⊥"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::BinOp;

    fn sample() -> Expr {
        // !a && (b ^ true)
        Expr::binary(
            Expr::not(Expr::var("a")),
            BinOp::And,
            Expr::group(Expr::binary(Expr::var("b"), BinOp::Xor, Expr::Constant(true))),
        )
    }

    #[test]
    fn test_render_c() {
        assert_eq!(render(&sample(), ConcreteNotation::C), "!a && (b ^ true)");
    }

    #[test]
    fn test_render_python() {
        assert_eq!(
            render(&sample(), ConcreteNotation::Python),
            "not a and (b ^ True)"
        );
    }

    #[test]
    fn test_render_latex() {
        assert_eq!(
            render(&sample(), ConcreteNotation::Latex),
            "\\lnot a \\land (b \\oplus \\top)"
        );
    }

    #[test]
    fn test_render_math() {
        assert_eq!(render(&sample(), ConcreteNotation::Math), "¬a ∧ (b ⊕ ⊤)");
    }

    #[test]
    fn test_render_document_joins_with_commas() {
        let exprs = vec![Expr::var("a"), Expr::not(Expr::var("b"))];
        assert_eq!(render_document(&exprs, ConcreteNotation::C), "a, !b");
    }
}
