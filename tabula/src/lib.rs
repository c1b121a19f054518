//! Tabula - Multi-notation boolean-expression engine
//!
//! Parses boolean expressions written in one of several concrete
//! notations (or auto-detected), analyzes them into free variables and
//! sub-expressions, and evaluates them row by row for truth-table
//! display. The engine is pure and synchronous: every input change
//! recomputes the whole output state from scratch, and row selection is
//! the only mutation applied between recomputes.

mod analyze;
mod eval;
mod state;

pub use analyze::{analyze, Analysis};
pub use eval::{assignment_for_row, evaluate, Evaluation};
pub use state::State;

pub use tabula_core::{
    BinOp, ConcreteNotation, Expr, Location, Notation, ParseError, SyntaxError, UnOp,
};
pub use tabula_lang::{parse_document, render, render_document, ParsedDocument};

use tracing::{debug, trace};

/// The engine: holds the current output state and applies input changes
/// and row-selection events to it.
///
/// Any change to text, notation, or the sub-expression flag discards the
/// derived state, recomputes it, bumps the generation and resets the row
/// selection (latest value wins). Row-selection events carry the
/// generation they were issued against; events for a superseded document
/// are ignored rather than applied to the wrong identifier ordering.
pub struct Engine {
    state: State,
}

impl Engine {
    pub fn new() -> Self {
        let mut engine = Self {
            state: State::from_document(
                ParsedDocument {
                    notation: Notation::Auto,
                    detected_notation: None,
                    source: String::new(),
                    expressions: Vec::new(),
                },
                Analysis::default(),
                false,
                0,
            ),
        };
        engine.update("", Notation::Auto, false);
        engine
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Recompute the full pipeline for new input. A parse failure lands in
    /// `state.error` with the document fields emptied; it never escapes.
    pub fn update(&mut self, text: &str, notation: Notation, show_sub_expressions: bool) -> &State {
        let generation = self.state.generation + 1;
        self.state = match parse_document(text, notation) {
            Ok(document) => {
                let analysis = analyze(&document.expressions);
                debug!(
                    generation,
                    expressions = document.expressions.len(),
                    identifiers = analysis.identifiers.len(),
                    "document recomputed"
                );
                State::from_document(document, analysis, show_sub_expressions, generation)
            }
            Err(error) => {
                debug!(generation, %error, "document recompute failed");
                State::from_error(error, show_sub_expressions, generation)
            }
        };
        &self.state
    }

    /// Toggle row selection: selecting the current row deselects it,
    /// selecting another row replaces it. Events whose `generation` does
    /// not match the current document are ignored.
    pub fn select_row(&mut self, generation: u64, row: u64) -> &State {
        if generation != self.state.generation {
            trace!(
                generation,
                current = self.state.generation,
                "ignoring stale row selection"
            );
            return &self.state;
        }
        let selected = if self.state.selected_row == Some(row) {
            None
        } else {
            Some(row)
        };
        let evaluation = selected.map(|row| {
            Evaluation::compute(&self.state.identifiers, &self.state.sub_expressions, row)
        });
        self.state.selected_row = selected;
        self.state.evaluation = evaluation;
        trace!(row = ?selected, "row selection changed");
        &self.state
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
