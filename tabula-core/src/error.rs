//! Structured parse errors
//!
//! Errors never crash the engine. They are values that end up in the
//! output state's `error` field, carrying enough location information to
//! underline a caret in the source text.

use crate::{ConcreteNotation, Notation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
    pub const AUTO_DETECT_FAILURE: &str = "AUTO_DETECT_FAILURE";
}

/// A position in the original input text.
///
/// `offset` is a byte offset; `line`/`column` are 1-based and derived from
/// it, counting columns in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Compute line/column for a byte offset into `text`.
    ///
    /// An offset at or past the end of the text points just after the last
    /// character, so errors at end-of-input still locate precisely.
    pub fn at(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let mut line = 1;
        let mut column = 1;
        for (pos, c) in text.char_indices() {
            if pos >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location {
            offset,
            line,
            column,
        }
    }
}

/// One concrete grammar failed to consume the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} at {}:{}", location.line, location.column)]
pub struct SyntaxError {
    pub message: String,
    pub location: Location,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Registry-level parse failure, surfaced in the output state.
///
/// When `notation` was `Auto` and every grammar failed, `detected_notation`
/// still carries the best guess (the grammar that consumed the most input
/// before failing) and `code` is [`codes::AUTO_DETECT_FAILURE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{code}] {message} at {}:{}", location.line, location.column)]
pub struct ParseError {
    pub code: String,
    pub notation: Notation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_notation: Option<ConcreteNotation>,
    /// The input text the failure refers to. Named `input` because
    /// thiserror reserves `source` for error chaining; the serialized
    /// name stays `source` for the display layer.
    #[serde(rename = "source")]
    pub input: String,
    pub message: String,
    pub location: Location,
}

impl ParseError {
    /// A concrete grammar was chosen explicitly and failed.
    pub fn syntax(notation: Notation, input: impl Into<String>, inner: SyntaxError) -> Self {
        Self {
            code: codes::SYNTAX_ERROR.to_string(),
            notation,
            detected_notation: None,
            input: input.into(),
            message: inner.message,
            location: inner.location,
        }
    }

    /// Auto-detection tried every grammar and all failed; `best_guess` is
    /// the grammar whose failure consumed the most input.
    pub fn auto_detect(
        best_guess: ConcreteNotation,
        input: impl Into<String>,
        inner: SyntaxError,
    ) -> Self {
        Self {
            code: codes::AUTO_DETECT_FAILURE.to_string(),
            notation: Notation::Auto,
            detected_notation: Some(best_guess),
            input: input.into(),
            message: inner.message,
            location: inner.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_at_start() {
        let loc = Location::at("a && b", 0);
        assert_eq!((loc.line, loc.column), (1, 1));
    }

    #[test]
    fn test_location_second_line() {
        let loc = Location::at("a,\nb &&", 5);
        assert_eq!(loc.offset, 5);
        assert_eq!((loc.line, loc.column), (2, 3));
    }

    #[test]
    fn test_location_clamps_past_end() {
        let loc = Location::at("ab", 99);
        assert_eq!(loc.offset, 2);
        assert_eq!((loc.line, loc.column), (1, 3));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::syntax(
            Notation::C,
            "a &",
            SyntaxError::new("expected '&' after '&'", Location::at("a &", 2)),
        );
        let display = format!("{}", err);
        assert!(display.contains("SYNTAX_ERROR"));
        assert!(display.contains("1:3"));
    }

    #[test]
    fn test_parse_error_input_is_not_an_error_source() {
        // The carried input text must not participate in error chaining;
        // it only serializes under the `source` key.
        let err = ParseError::syntax(
            Notation::C,
            "a &",
            SyntaxError::new("expected '&' after '&'", Location::at("a &", 2)),
        );
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.input, "a &");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["source"], "a &");
    }
}
