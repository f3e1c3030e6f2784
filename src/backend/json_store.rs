use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::backend::interface::{LedgerBackend, Result};
use crate::core::{Branch, FinancialRecord};

/// Local key-value store keeping each branch's collection as one JSON
/// array, one file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
    prefix: String
}

impl JsonStore {
    pub const DEFAULT_PREFIX: &'static str = "@kano_dairy_";

    pub fn new(dir: impl AsRef<Path>) -> JsonStore {
        JsonStore::with_prefix(dir, JsonStore::DEFAULT_PREFIX)
    }

    pub fn with_prefix(dir: impl AsRef<Path>, prefix: &str) -> JsonStore {
        JsonStore { dir: dir.as_ref().to_owned(), prefix: prefix.to_owned() }
    }

    pub fn key(&self, branch: Branch) -> String {
        format!("{}{}_records", self.prefix, branch.id())
    }

    fn path_for(&self, branch: Branch) -> PathBuf {
        self.dir.join(format!("{}.json", self.key(branch)))
    }
}

impl LedgerBackend for JsonStore {
    fn read(&self, branch: Branch) -> Result<Vec<FinancialRecord>> {
        let path = self.path_for(branch);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no records stored under {}", self.key(branch));
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into())
        };

        let records: Vec<FinancialRecord> = serde_json::from_str(&content)?;
        debug!("read {} records from {}", records.len(), path.display());
        return Ok(records);
    }

    fn save(&self, branch: Branch, records: &[FinancialRecord]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(branch);
        let staging = path.with_extension("json.tmp");

        {
            let mut writer = BufWriter::new(File::create(&staging)?);
            serde_json::to_writer(&mut writer, records)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        // the rename swaps the whole collection in one step
        fs::rename(&staging, &path)?;

        debug!("wrote {} records to {}", records.len(), path.display());
        return Ok(());
    }

    fn describe(&self) -> String {
        format!("local store at {}", self.dir.display())
    }
}
