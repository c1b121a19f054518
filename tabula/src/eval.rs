//! Expression evaluator
//!
//! Maps an AST plus a variable assignment to a boolean, and builds the
//! per-row evaluation record used for truth-table display. The assignment
//! is always constructed from exactly the document's identifier list, so
//! a missing variable is a contract violation, not a user-facing error.

use crate::analyze::Analysis;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use tabula_core::{BinOp, Expr, UnOp};

/// Evaluate one expression under a variable assignment.
pub fn evaluate(expr: &Expr, assignment: &HashMap<String, bool>) -> bool {
    match expr {
        Expr::Constant(value) => *value,
        Expr::Variable(name) => *assignment
            .get(name)
            .unwrap_or_else(|| unreachable!("assignment is built from the document's identifiers")),
        Expr::BinaryOp(left, op, right) => {
            let l = evaluate(left, assignment);
            let r = evaluate(right, assignment);
            match op {
                BinOp::And => l && r,
                BinOp::Or => l || r,
                BinOp::Xor => l ^ r,
            }
        }
        Expr::UnaryOp(UnOp::Not, inner) => !evaluate(inner, assignment),
        Expr::Group(inner) => evaluate(inner, assignment),
    }
}

/// Decode a row bitmask into an assignment: bit `i` of `row` is the truth
/// value of `identifiers[i]`. Bits beyond the identifier count are never
/// read.
pub fn assignment_for_row(identifiers: &[String], row: u64) -> HashMap<String, bool> {
    identifiers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), (row >> i) & 1 == 1))
        .collect()
}

/// Per-row evaluation result: variable values by name, expression values
/// by structural key. The two key spaces are distinct, so both are
/// available for lookup while a row is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub variables: HashMap<String, bool>,
    #[serde(serialize_with = "serialize_expr_map")]
    pub expressions: HashMap<Expr, bool>,
}

impl Evaluation {
    /// Evaluate every sub-expression of the analyzed document for `row`.
    ///
    /// This covers all top-level expressions (they are roots of the
    /// sub-expression set), so the display layer can label both the main
    /// columns and the sub-expression columns.
    pub fn for_row(analysis: &Analysis, row: u64) -> Self {
        Self::compute(&analysis.identifiers, &analysis.sub_expressions, row)
    }

    pub(crate) fn compute(identifiers: &[String], sub_expressions: &[Expr], row: u64) -> Self {
        let variables = assignment_for_row(identifiers, row);
        let expressions = sub_expressions
            .iter()
            .map(|e| (e.clone(), evaluate(e, &variables)))
            .collect();
        Self {
            variables,
            expressions,
        }
    }

    pub fn variable(&self, name: &str) -> Option<bool> {
        self.variables.get(name).copied()
    }

    pub fn value_of(&self, expr: &Expr) -> Option<bool> {
        self.expressions.get(expr).copied()
    }
}

// Expr keys serialize as their math-notation rendering, sorted so the
// output is deterministic.
fn serialize_expr_map<S: Serializer>(
    map: &HashMap<Expr, bool>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let rendered: BTreeMap<String, bool> =
        map.iter().map(|(e, v)| (e.to_string(), *v)).collect();
    let mut out = serializer.serialize_map(Some(rendered.len()))?;
    for (key, value) in rendered {
        out.serialize_entry(&key, &value)?;
    }
    out.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    fn assignment(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_connectives() {
        let a = assignment(&[("a", true), ("b", false)]);
        let and = Expr::binary(Expr::var("a"), BinOp::And, Expr::var("b"));
        let or = Expr::binary(Expr::var("a"), BinOp::Or, Expr::var("b"));
        let xor = Expr::binary(Expr::var("a"), BinOp::Xor, Expr::var("b"));
        assert!(!evaluate(&and, &a));
        assert!(evaluate(&or, &a));
        assert!(evaluate(&xor, &a));
        assert!(!evaluate(
            &Expr::binary(Expr::var("a"), BinOp::Xor, Expr::var("a")),
            &a
        ));
    }

    #[test]
    fn test_group_is_transparent() {
        let a = assignment(&[("a", true)]);
        assert!(evaluate(&Expr::group(Expr::var("a")), &a));
        assert!(!evaluate(&Expr::not(Expr::group(Expr::var("a"))), &a));
    }

    #[test]
    fn test_constants() {
        let empty = HashMap::new();
        assert!(evaluate(&Expr::Constant(true), &empty));
        assert!(!evaluate(&Expr::Constant(false), &empty));
    }

    #[test]
    fn test_a_and_not_b() {
        // identifiers = [a, b]; row 1 -> a=true, b=false.
        let expr = Expr::binary(Expr::var("a"), BinOp::And, Expr::not(Expr::var("b")));
        let row1 = assignment_for_row(&["a".to_string(), "b".to_string()], 1);
        assert!(evaluate(&expr, &row1));
        // row 3 -> a=true, b=true.
        let row3 = assignment_for_row(&["a".to_string(), "b".to_string()], 3);
        assert!(!evaluate(&expr, &row3));
    }

    #[test]
    fn test_assignment_bit_decoding() {
        let ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let assignment = assignment_for_row(&ids, 5);
        assert_eq!(assignment["a"], true);
        assert_eq!(assignment["b"], false);
        assert_eq!(assignment["c"], true);
    }

    #[test]
    fn test_evaluation_covers_sub_expressions() {
        let expr = Expr::binary(Expr::var("a"), BinOp::And, Expr::not(Expr::var("b")));
        let analysis = analyze(std::slice::from_ref(&expr));
        let evaluation = Evaluation::for_row(&analysis, 1);
        assert_eq!(evaluation.value_of(&expr), Some(true));
        assert_eq!(evaluation.value_of(&Expr::not(Expr::var("b"))), Some(true));
        assert_eq!(evaluation.variable("a"), Some(true));
        assert_eq!(evaluation.variable("b"), Some(false));
        assert_eq!(evaluation.variable("missing"), None);
    }

    #[test]
    fn test_evaluation_serializes_rendered_keys() {
        let expr = Expr::binary(Expr::var("a"), BinOp::And, Expr::var("b"));
        let analysis = analyze(std::slice::from_ref(&expr));
        let evaluation = Evaluation::for_row(&analysis, 3);
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["expressions"]["a ∧ b"], serde_json::json!(true));
        assert_eq!(json["variables"]["a"], serde_json::json!(true));
    }
}
