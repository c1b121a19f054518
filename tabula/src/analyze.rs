//! Document analyzer
//!
//! Derives the free-variable list and the sub-expression set from a list
//! of top-level expressions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tabula_core::Expr;

/// What the analyzer extracts from a parsed expression list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Free variables, each once, in first-discovery order across the
    /// expression list (left-to-right, depth-first).
    pub identifiers: Vec<String>,
    /// Every node reachable from any top-level expression, roots included,
    /// deduplicated by structural equality in first-occurrence order.
    pub sub_expressions: Vec<Expr>,
    /// Top-level expressions that are not a bare variable or constant.
    pub top_level_expressions: Vec<Expr>,
}

pub fn analyze(expressions: &[Expr]) -> Analysis {
    let mut identifiers = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut sub_expressions = Vec::new();
    let mut seen_exprs: HashSet<Expr> = HashSet::new();

    for expr in expressions {
        collect(expr, &mut identifiers, &mut seen_names, &mut sub_expressions, &mut seen_exprs);
    }

    let top_level_expressions = expressions
        .iter()
        .filter(|e| !e.is_leaf())
        .cloned()
        .collect();

    Analysis {
        identifiers,
        sub_expressions,
        top_level_expressions,
    }
}

// Pre-order: record the node itself, then descend left-to-right.
fn collect(
    expr: &Expr,
    identifiers: &mut Vec<String>,
    seen_names: &mut HashSet<String>,
    sub_expressions: &mut Vec<Expr>,
    seen_exprs: &mut HashSet<Expr>,
) {
    if seen_exprs.insert(expr.clone()) {
        sub_expressions.push(expr.clone());
    }
    match expr {
        Expr::Constant(_) => {}
        Expr::Variable(name) => {
            if seen_names.insert(name.clone()) {
                identifiers.push(name.clone());
            }
        }
        Expr::BinaryOp(left, _, right) => {
            collect(left, identifiers, seen_names, sub_expressions, seen_exprs);
            collect(right, identifiers, seen_names, sub_expressions, seen_exprs);
        }
        Expr::UnaryOp(_, inner) | Expr::Group(inner) => {
            collect(inner, identifiers, seen_names, sub_expressions, seen_exprs);
        }
    }
}
