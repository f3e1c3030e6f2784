use std::rc::Rc;

use chrono::Utc;
use log::{debug, error, info};
use uuid::Uuid;

use crate::backend::LedgerBackend;
use crate::core::{Branch, FinancialRecord, Ledger, NewRecord, RecordPatch, Summary};

/// Working copy of one branch's ledger on top of a persistence backend.
///
/// Mutations write the whole updated collection to the backend first and
/// only adopt it in memory once the write went through. Failures never
/// escape: operations answer `false` and leave a message in `last_error`.
pub struct LedgerStore {
    backend: Rc<dyn LedgerBackend>,
    branch: Branch,
    ledger: Ledger,
    loading: bool,
    error: Option<String>
}

impl LedgerStore {
    pub fn new(backend: Rc<dyn LedgerBackend>, branch: Branch) -> LedgerStore {
        let mut store = LedgerStore {
            backend,
            branch,
            ledger: Ledger::default(),
            loading: false,
            error: None
        };
        store.load();
        return store;
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Points the store at another branch, reloading if it changed.
    pub fn set_branch(&mut self, branch: Branch) {
        if branch != self.branch {
            self.branch = branch;
            self.load();
        }
    }

    pub fn records(&self) -> &[FinancialRecord] {
        self.ledger.records()
    }

    pub fn get(&self, id: &str) -> Option<&FinancialRecord> {
        self.ledger.get(id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.backend.read(self.branch) {
            Ok(records) => {
                debug!("loaded {} records for {} from {}",
                    records.len(), self.branch, self.backend.describe());
                self.ledger = Ledger::new(records);
            },
            Err(err) => {
                error!("error loading records for {}: {}", self.branch, err);
                self.ledger = Ledger::default();
                self.error = Some("Failed to load records".to_owned());
            }
        }

        self.loading = false;
    }

    pub fn create(&mut self, new: NewRecord) -> bool {
        let record = FinancialRecord::from_new(new, Uuid::new_v4().to_string(), Utc::now());
        info!("adding record {} to {}", record.id, self.branch);

        let next = self.ledger.prepended(record);
        self.commit(next, "Failed to add record")
    }

    /// Merges `patch` into the record with `id`. The stored balance is
    /// not recomputed; callers changing amounts pass a balance too.
    pub fn update(&mut self, id: &str, patch: RecordPatch) -> bool {
        info!("updating record {} in {}", id, self.branch);
        let next = self.ledger.patched(id, &patch);
        self.commit(next, "Failed to update record")
    }

    pub fn delete(&mut self, id: &str) -> bool {
        info!("deleting record {} from {}", id, self.branch);
        let next = self.ledger.without(id);
        self.commit(next, "Failed to delete record")
    }

    pub fn summarize(&self) -> Summary {
        self.ledger.summarize()
    }

    fn commit(&mut self, next: Ledger, failure: &str) -> bool {
        match self.backend.save(self.branch, next.records()) {
            Ok(()) => {
                self.ledger = next;
                true
            },
            Err(err) => {
                error!("{} for {}: {}", failure, self.branch, err);
                self.error = Some(failure.to_owned());
                false
            }
        }
    }
}
