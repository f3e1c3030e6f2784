pub mod branch;
pub mod record;
pub mod ledger;
pub mod summary;
pub mod error;

pub use branch::Branch;
pub use record::{Amount, Category, FinancialRecord, NewRecord, RecordId, RecordPatch};
pub use ledger::Ledger;
pub use summary::{BranchSummary, Summary};
pub use error::ValidationError;
