//! Notation identifiers
//!
//! The set of concrete syntaxes is closed: no plugin mechanism, just a
//! fixed enum behind one shared parse capability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One concrete textual syntax for boolean expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcreteNotation {
    C,
    Python,
    Latex,
    Math,
}

/// What the user asked for: a concrete notation, or auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Auto,
    C,
    Python,
    Latex,
    Math,
}

impl Notation {
    /// `None` for `Auto`.
    pub fn as_concrete(self) -> Option<ConcreteNotation> {
        match self {
            Notation::Auto => None,
            Notation::C => Some(ConcreteNotation::C),
            Notation::Python => Some(ConcreteNotation::Python),
            Notation::Latex => Some(ConcreteNotation::Latex),
            Notation::Math => Some(ConcreteNotation::Math),
        }
    }
}

impl From<ConcreteNotation> for Notation {
    fn from(n: ConcreteNotation) -> Self {
        match n {
            ConcreteNotation::C => Notation::C,
            ConcreteNotation::Python => Notation::Python,
            ConcreteNotation::Latex => Notation::Latex,
            ConcreteNotation::Math => Notation::Math,
        }
    }
}

impl fmt::Display for ConcreteNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConcreteNotation::C => "c",
            ConcreteNotation::Python => "python",
            ConcreteNotation::Latex => "latex",
            ConcreteNotation::Math => "math",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_concrete() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "auto"),
        }
    }
}
