//! Portal configuration
//!
//! Loaded from JSON. Every field has a default, so an empty object (or no
//! file at all) gives the stock page layout with in-memory preferences.

use anyhow::{Context, Result};
use app_core::FormConfig;
use app_ui::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storage::{KvConfig, KvStore, MemoryStore, OriginStore, SettingsService};

/// Where page preferences live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    /// sled database path; `None` keeps preferences in memory
    pub path: Option<PathBuf>,
    /// Origin the preferences are scoped to
    pub origin: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Flush interval in milliseconds (None for flush on every write)
    pub flush_every_ms: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let kv = KvConfig::default();
        Self {
            path: None,
            origin: "local".to_string(),
            cache_capacity: kv.cache_capacity,
            flush_every_ms: kv.flush_every_ms,
        }
    }
}

/// Top-level configuration for the page behaviours
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    /// Preference storage
    pub storage: StorageConfig,
    /// Theme controller settings
    pub theme: ThemeConfig,
    /// Edit-profile form layout
    pub form: FormConfig,
    /// Default log filter when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl PortalConfig {
    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid portal configuration")
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Open the settings service described by the storage section
    pub fn open_settings(&self) -> Result<Arc<dyn SettingsService>> {
        let Some(path) = &self.storage.path else {
            tracing::debug!("No storage path configured, keeping preferences in memory");
            return Ok(Arc::new(MemoryStore::new()));
        };

        let kv_config = KvConfig::new(path.to_string_lossy())
            .cache_capacity(self.storage.cache_capacity)
            .flush_every_ms(self.storage.flush_every_ms);
        let kv = KvStore::new(kv_config)
            .with_context(|| format!("Failed to open preference store at {}", path.display()))?;

        Ok(Arc::new(OriginStore::new(Arc::new(kv), self.storage.origin.clone())))
    }
}
