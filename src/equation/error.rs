use std::fmt;

use thiserror::Error;

use crate::formula::FormulaError;

/// Which side of an equation a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Reactants,
    Products,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reactants => f.write_str("reactant"),
            Side::Products => f.write_str("product"),
        }
    }
}

/// Errors produced when parsing an equation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquationError {
    /// No `=` anywhere in the input.
    #[error("no '=' separator found in equation")]
    MissingSeparator,
    /// A leading coefficient that is zero, zero-padded or too large.
    #[error("invalid coefficient '{text}' on {side} {index}")]
    InvalidCoefficient {
        side: Side,
        index: usize,
        text: String,
    },
    /// A segment's formula failed to parse.
    #[error("invalid {side} {index}: {source}")]
    Formula {
        side: Side,
        index: usize,
        source: FormulaError,
    },
}
