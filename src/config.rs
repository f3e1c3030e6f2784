use std::{fs, path::{Path, PathBuf}, rc::Rc};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};
use log::{debug, info};

use crate::backend::{JsonStore, LedgerBackend, RemoteStub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Local,
    Remote
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: BackendKind,
    pub data_dir: PathBuf,
    pub key_prefix: String
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: BackendKind::Local,
            data_dir: PathBuf::from("data"),
            key_prefix: JsonStore::DEFAULT_PREFIX.to_owned()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub url: Option<String>
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub remote: RemoteConfig
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "dairy-ledger.toml";

    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let file_content = fs::read_to_string(filepath)
            .with_context(|| format!("failed to read config file {}", filepath.display()))?;
        return AppConfig::parse(&file_content)
            .with_context(|| format!("failed to parse config file {}", filepath.display()));
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)?;
        return Ok(config);
    }

    /// Reads `filepath` when given. Otherwise falls back to
    /// [`AppConfig::DEFAULT_PATH`], or the defaults if that is absent.
    pub fn load(filepath: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = filepath {
            return AppConfig::read(path);
        }

        let default_path = Path::new(Self::DEFAULT_PATH);
        if default_path.exists() {
            return AppConfig::read(default_path);
        }
        debug!("no {} found, using default configuration", Self::DEFAULT_PATH);
        return Ok(AppConfig::default());
    }

    /// Builds the backend every store of this process shares.
    pub fn open_backend(&self) -> Rc<dyn LedgerBackend> {
        let backend: Rc<dyn LedgerBackend> = match self.storage.backend {
            BackendKind::Local => Rc::new(
                JsonStore::with_prefix(&self.storage.data_dir, &self.storage.key_prefix)),
            BackendKind::Remote => Rc::new(RemoteStub::new(self.remote.url.clone()))
        };
        info!("using {}", backend.describe());
        return backend;
    }
}
