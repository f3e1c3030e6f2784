mod core;
pub mod backend;
pub mod config;
pub mod store;

pub use crate::core::{Branch, Category, FinancialRecord, Ledger, NewRecord, RecordPatch, Summary};
pub use crate::core::{branch, record, ledger, summary, error};
pub use crate::config::AppConfig;
pub use crate::store::LedgerStore;
