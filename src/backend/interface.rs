use thiserror::Error;

use crate::core::{Branch, FinancialRecord};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend unavailable: {0}")]
    Unavailable(String)
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Durable home of branch ledgers.
///
/// A backend always deals in whole collections: `save` replaces
/// everything stored for the branch.
pub trait LedgerBackend {
    fn read(&self, branch: Branch) -> Result<Vec<FinancialRecord>>;
    fn save(&self, branch: Branch, records: &[FinancialRecord]) -> Result<()>;
    fn describe(&self) -> String;
}
