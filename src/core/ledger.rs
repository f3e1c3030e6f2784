use serde::{Serialize, Deserialize};

use crate::core::record::{FinancialRecord, RecordPatch};
use crate::core::summary::Summary;

/// The records of one branch, newest first by insertion.
///
/// Transitions return a new ledger instead of mutating in place, so a
/// caller can persist the result before adopting it.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<FinancialRecord>
}

impl Ledger {
    pub fn new(records: Vec<FinancialRecord>) -> Ledger {
        Ledger { records }
    }

    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FinancialRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn prepended(&self, record: FinancialRecord) -> Ledger {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Ledger { records }
    }

    /// Unknown ids leave the ledger as it is.
    pub fn patched(&self, id: &str, patch: &RecordPatch) -> Ledger {
        let records = self.records.iter()
            .cloned()
            .map(|mut record| {
                if record.id == id {
                    patch.apply_to(&mut record);
                }
                record
            })
            .collect();
        Ledger { records }
    }

    /// Unknown ids leave the ledger as it is.
    pub fn without(&self, id: &str) -> Ledger {
        let records = self.records.iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        Ledger { records }
    }

    pub fn summarize(&self) -> Summary {
        Summary::of(&self.records)
    }
}


#[cfg(test)]
mod tests {
    use crate::core::{Category, FinancialRecord, Ledger, RecordPatch};

    use chrono::{NaiveDate, Utc};
    use rstest::{fixture, rstest};

    fn record(id: &str, income: f64, expense: f64) -> FinancialRecord {
        FinancialRecord {
            id: id.to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            description: format!("entry {}", id),
            category: Category::Feed,
            income,
            expense,
            balance: income - expense,
            note: None,
            created_at: Utc::now()
        }
    }

    #[fixture]
    fn ledger() -> Ledger {
        Ledger::new(vec![])
            .prepended(record("a", 1000.0, 0.0))
            .prepended(record("b", 0.0, 400.0))
    }

    #[rstest]
    fn newest_first(ledger: Ledger) {
        let ids: Vec<_> = ledger.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(ledger.summarize().profit_loss, 600.0);
    }

    #[rstest]
    fn prepended_does_not_touch_original(ledger: Ledger) {
        let next = ledger.prepended(record("c", 5.0, 0.0));
        assert_eq!(ledger.len(), 2);
        assert_eq!(next.len(), 3);
        assert_eq!(next.records()[0].id, "c");
    }

    #[rstest]
    fn patch_one_record(ledger: Ledger) {
        let patch = RecordPatch { description: Some("Feed bags".to_owned()), ..RecordPatch::default() };
        let next = ledger.patched("b", &patch);

        assert_eq!(next.get("b").unwrap().description, "Feed bags");
        assert_eq!(next.get("a"), ledger.get("a"));
        assert_eq!(next.records()[0].id, "b");
    }

    #[rstest]
    fn patch_unknown_id(ledger: Ledger) {
        let patch = RecordPatch { income: Some(1.0), ..RecordPatch::default() };
        assert_eq!(ledger.patched("zzz", &patch), ledger);
    }

    #[rstest]
    fn remove_twice(ledger: Ledger) {
        let once = ledger.without("a");
        let twice = once.without("a");

        assert_eq!(once.len(), 1);
        assert_eq!(once, twice);
        assert!(once.get("a").is_none());
    }

    #[rstest]
    fn serializes_as_bare_array(ledger: Ledger) {
        let value = serde_json::to_value(&ledger).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);

        let parsed: Ledger = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, ledger);
    }

    #[test]
    fn empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.summarize().record_count, 0);
    }
}
