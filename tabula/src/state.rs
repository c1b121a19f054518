//! Output state record
//!
//! One `State` per recomputation, consumed as plain data by the external
//! rendering layer. It carries everything that layer needs: the parsed
//! and analyzed document (or the parse error), the passthrough display
//! flag, and the current row selection with its evaluation.

use crate::analyze::Analysis;
use crate::eval::Evaluation;
use serde::Serialize;
use tabula_core::{ConcreteNotation, Expr, Notation, ParseError};
use tabula_lang::ParsedDocument;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    pub notation: Notation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_notation: Option<ConcreteNotation>,
    pub source: String,
    pub expressions: Vec<Expr>,
    pub identifiers: Vec<String>,
    pub sub_expressions: Vec<Expr>,
    pub top_level_expressions: Vec<Expr>,
    /// Passthrough for the rendering layer; no effect on semantics.
    pub show_sub_expressions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ParseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_row: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    /// Identifies the document this state was derived from; row-selection
    /// events carrying a stale generation are ignored.
    pub generation: u64,
}

impl State {
    pub(crate) fn from_document(
        document: ParsedDocument,
        analysis: Analysis,
        show_sub_expressions: bool,
        generation: u64,
    ) -> Self {
        Self {
            notation: document.notation,
            detected_notation: document.detected_notation,
            source: document.source,
            expressions: document.expressions,
            identifiers: analysis.identifiers,
            sub_expressions: analysis.sub_expressions,
            top_level_expressions: analysis.top_level_expressions,
            show_sub_expressions,
            error: None,
            selected_row: None,
            evaluation: None,
            generation,
        }
    }

    pub(crate) fn from_error(
        error: ParseError,
        show_sub_expressions: bool,
        generation: u64,
    ) -> Self {
        Self {
            notation: error.notation,
            detected_notation: error.detected_notation,
            source: error.input.clone(),
            expressions: Vec::new(),
            identifiers: Vec::new(),
            sub_expressions: Vec::new(),
            top_level_expressions: Vec::new(),
            show_sub_expressions,
            error: Some(error),
            selected_row: None,
            evaluation: None,
            generation,
        }
    }

    /// Number of truth-table rows for this document (`2^identifiers`),
    /// saturating at `u64::MAX` for 64 or more identifiers.
    pub fn row_count(&self) -> u64 {
        1u64.checked_shl(self.identifiers.len() as u32)
            .unwrap_or(u64::MAX)
    }
}
