//! Notation registry and auto-detection
//!
//! For a concrete notation the registry delegates straight to that
//! grammar. For `Notation::Auto` it tries every grammar in a fixed
//! priority order and the first success wins. If all grammars fail, the
//! one that consumed the most input before failing is assumed to be the
//! intended notation and its diagnostic is reported, still tagged with
//! that best guess.

use crate::parser;
use crate::raw::normalize;
use serde::{Deserialize, Serialize};
use tabula_core::{ConcreteNotation, Expr, Notation, ParseError, SyntaxError};
use tracing::debug;

/// Auto-detection priority order. First success wins; on total failure,
/// ties on the failure offset also resolve in this order.
pub const DETECTION_ORDER: [ConcreteNotation; 4] = [
    ConcreteNotation::C,
    ConcreteNotation::Python,
    ConcreteNotation::Latex,
    ConcreteNotation::Math,
];

/// Result of parsing one input string under one notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub notation: Notation,
    /// Populated only when parsing was done via auto-detect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_notation: Option<ConcreteNotation>,
    pub source: String,
    pub expressions: Vec<Expr>,
}

/// Parse `text` under the requested notation.
///
/// Failures are wrapped into a [`ParseError`] that carries the source
/// text, the failing grammar's message/location, and (for auto mode) the
/// best-guess detected notation.
pub fn parse_document(text: &str, notation: Notation) -> Result<ParsedDocument, ParseError> {
    match notation.as_concrete() {
        Some(concrete) => {
            let expressions = parse_concrete(text, concrete)
                .map_err(|e| ParseError::syntax(notation, text, e))?;
            Ok(ParsedDocument {
                notation,
                detected_notation: None,
                source: text.to_string(),
                expressions,
            })
        }
        None => detect(text),
    }
}

fn parse_concrete(text: &str, notation: ConcreteNotation) -> Result<Vec<Expr>, SyntaxError> {
    let raw = parser::parse(text, notation)?;
    Ok(raw.into_iter().map(normalize).collect())
}

fn detect(text: &str) -> Result<ParsedDocument, ParseError> {
    let mut failures: Vec<(ConcreteNotation, SyntaxError)> = Vec::new();
    for notation in DETECTION_ORDER {
        match parse_concrete(text, notation) {
            Ok(expressions) => {
                debug!(%notation, "auto-detect succeeded");
                return Ok(ParsedDocument {
                    notation: Notation::Auto,
                    detected_notation: Some(notation),
                    source: text.to_string(),
                    expressions,
                });
            }
            Err(e) => {
                debug!(%notation, offset = e.location.offset, "auto-detect candidate failed");
                failures.push((notation, e));
            }
        }
    }
    // All grammars failed: the one that got furthest before failing is the
    // best guess for what the user meant. `max_by_key` on a reversed scan
    // keeps the first-in-priority-order grammar on ties.
    let (best_guess, error) = failures
        .into_iter()
        .rev()
        .max_by_key(|(_, e)| e.location.offset)
        .expect("detection order is never empty");
    debug!(best_guess = %best_guess, "auto-detect failed for every notation");
    Err(ParseError::auto_detect(best_guess, text, error))
}
