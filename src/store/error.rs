use thiserror::Error;

use crate::formula::DataError;

/// Errors produced by [`Store`](super::Store) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A substance with a structurally equal formula is already tracked.
    #[error("substance {formula} already exists")]
    DuplicateSubstance { formula: String },

    /// An equal equation is already recorded.
    #[error("equation {equation} already exists")]
    DuplicateEquation { equation: String },

    /// A document could not be restored. The store is left unchanged.
    #[error("restore failed: {0}")]
    RestoreIntegrity(#[from] RestoreError),

    /// [`Store::restore_snapshot`](super::Store::restore_snapshot) was called
    /// before any snapshot was taken.
    #[error("no snapshot has been saved")]
    NoSnapshot,

    #[error("failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Why a document was rejected.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The text is not JSON, or not shaped like a document.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document is well-formed but names something that does not exist.
    #[error(transparent)]
    Integrity(#[from] DataError),
}
