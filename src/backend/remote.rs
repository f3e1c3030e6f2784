use log::warn;

use crate::backend::interface::{LedgerBackend, Result};
use crate::core::{Branch, FinancialRecord};

/// Placeholder for the hosted relational database, one table per branch.
///
/// No client is wired in yet: reads come back empty and writes are
/// dropped, both reporting success.
#[derive(Debug, Clone, Default)]
pub struct RemoteStub {
    url: Option<String>
}

impl RemoteStub {
    pub fn new(url: Option<String>) -> RemoteStub {
        RemoteStub { url }
    }
}

impl LedgerBackend for RemoteStub {
    fn read(&self, branch: Branch) -> Result<Vec<FinancialRecord>> {
        warn!("remote backend not connected, {} reads as empty", branch.table_name());
        return Ok(Vec::new());
    }

    fn save(&self, branch: Branch, records: &[FinancialRecord]) -> Result<()> {
        warn!("remote backend not connected, skipping write of {} records to {}",
            records.len(), branch.table_name());
        return Ok(());
    }

    fn describe(&self) -> String {
        match &self.url {
            Some(url) => format!("remote database at {}", url),
            None => "remote database (unconfigured)".to_owned()
        }
    }
}
