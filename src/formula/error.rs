use thiserror::Error;

/// Errors produced when parsing a formula string.
///
/// Positions are character offsets into the plain-digit form of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The input string was empty.
    #[error("empty formula")]
    EmptyInput,
    /// A character that cannot start any token.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },
    /// A quantity written with a leading zero, including a bare `0`.
    #[error("quantity with leading zero at position {pos}")]
    LeadingZero { pos: usize },
    /// A quantity too large to represent.
    #[error("quantity overflow at position {pos}")]
    QuantityOverflow { pos: usize },
    /// A well-formed symbol that names no element.
    #[error("unknown element '{symbol}' at position {pos}")]
    UnknownElement { pos: usize, symbol: String },
    /// A token that the grammar does not allow at this point.
    #[error("unexpected '{token}' at position {pos}")]
    UnexpectedToken { pos: usize, token: String },
    /// Input ended inside a group.
    #[error("unexpected end of formula")]
    UnexpectedEnd,
}

/// Coarse classification of a [`FormulaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text could not be split into tokens.
    Tokenization,
    /// A symbol is missing from the periodic table.
    UnknownElement,
    /// The tokens are individually fine but their order is not.
    Grammar,
}

impl FormulaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::UnexpectedChar { .. }
            | Self::LeadingZero { .. }
            | Self::QuantityOverflow { .. } => ErrorKind::Tokenization,
            Self::UnknownElement { .. } => ErrorKind::UnknownElement,
            Self::UnexpectedToken { .. } | Self::UnexpectedEnd => ErrorKind::Grammar,
        }
    }
}

/// Errors produced when rebuilding a model value from its plain data form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("{0} must be at least 1")]
    ZeroQuantity(&'static str),
    #[error("group has no members")]
    EmptyGroup,
    #[error("unknown state marker '{0}'")]
    UnknownStateMarker(String),
}
