//! Inventory error model.

use std::path::PathBuf;

use stockroom_core::DomainError;
use thiserror::Error;

pub type StockResult<T> = Result<T, StockError>;

/// Failure of a store operation.
///
/// Every failure has already been recorded on the store's event sink by the
/// time the caller sees it; the store is never left half-updated.
#[derive(Debug, Error)]
pub enum StockError {
    /// Input rejected before touching the store (blank name, bad quantity).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The inventory file does not exist. The store is left as it was.
    #[error("inventory file {} not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its top level is not a JSON object.
    #[error("expected a JSON object in {}, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl StockError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StockError::FileNotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StockError::Domain(e) if e.is_validation())
    }
}
