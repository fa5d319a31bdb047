//! Persistent Key-Value Store Implementation
//!
//! Provides JSON file-based persistence with:
//! - Caller-supplied defaults merged under persisted content at startup
//! - Full-snapshot write on every mutation
//! - Corrupt-file recovery (treated as empty, never fatal)

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key consulted when a lookup misses and no explicit fallback is given.
pub const DEFAULT_KEY: &str = "text";

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing config name")]
    MissingConfigName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Store construction settings
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// File name stem for the backing file (`<config_name>.json`)
    pub config_name: String,
    /// Values used for keys absent from the persisted file
    pub defaults: Map<String, Value>,
    /// Override for the per-application data directory
    pub data_dir: Option<PathBuf>,
}

/// JSON-file-backed key-value store
///
/// The in-memory map and the on-disk file are kept consistent by rewriting
/// the whole file after every [`Store::set`]. Single writer by contract; no
/// eviction, no size bound, no TTL.
pub struct Store {
    data: Map<String, Value>,
    path: PathBuf,
}

impl Store {
    /// Create a store from `config`, merging `defaults` under whatever the
    /// backing file already holds.
    ///
    /// A missing, unreadable, or corrupt backing file is treated as empty;
    /// construction only fails when `config_name` is empty or the data
    /// directory cannot be created.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        if config.config_name.is_empty() {
            return Err(StoreError::MissingConfigName);
        }

        let dir = config.data_dir.unwrap_or_else(default_data_dir);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.json", config.config_name));

        let persisted = load_persisted(&path);
        let data = merge_defaults(persisted, config.defaults);

        tracing::info!(path = %path.display(), keys = data.len(), "store opened");

        Ok(Self { data, path })
    }

    /// Look up `key`, falling back to whatever is stored under `"text"`.
    ///
    /// The fallback is a *key* lookup, not a default value. Callers that
    /// want a different fallback key use [`Store::get_or`]. A miss on both
    /// keys returns `None`, never an error.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_or(key, DEFAULT_KEY)
    }

    /// Look up `key`, then `fallback_key`; `None` when neither exists.
    pub fn get_or(&self, key: &str, fallback_key: &str) -> Option<Value> {
        self.data
            .get(key)
            .or_else(|| self.data.get(fallback_key))
            .cloned()
    }

    /// Insert or overwrite `key`, then synchronously rewrite the backing
    /// file with the full snapshot.
    ///
    /// The in-memory map keeps the update even when the write fails; there
    /// is no rollback and no retry.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> StoreResult<()> {
        self.data.insert(key.into(), value);
        self.persist()
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Overlay `persisted` on top of `defaults`: persisted keys win on
/// collision, default keys without a persisted counterpart are retained.
pub fn merge_defaults(
    persisted: Map<String, Value>,
    defaults: Map<String, Value>,
) -> Map<String, Value> {
    let mut effective = defaults;
    for (key, value) in persisted {
        effective.insert(key, value);
    }
    effective
}

/// Parse the backing file as a top-level JSON object.
///
/// Any failure yields an empty map; a store never refuses to open because
/// of prior on-disk state.
fn load_persisted(path: &Path) -> Map<String, Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read store file, starting empty");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "store file is not a JSON object, starting empty");
            Map::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store file is corrupt, starting empty");
            Map::new()
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jotpad")
}
