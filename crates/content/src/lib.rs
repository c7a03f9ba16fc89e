//! Read-only page content store.
//!
//! Every page of the website (homepage, about, products, technology,
//! careers...) is described by one YAML document in the content directory.
//! The store loads them all once at startup, keyed by file stem, and serves
//! them as JSON values. Nothing writes to it afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

/// Page documents keyed by page name.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: BTreeMap<String, Value>,
}

impl ContentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.yaml` / `*.yml` file in `dir`.
    ///
    /// A missing directory yields an empty store. A file that cannot be read
    /// or parsed fails the whole load, naming the file.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "Content directory not found, serving no pages");
            return Ok(Self::new());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Read {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut store = Self::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ContentError::Read {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                })?
                .path();

            let Some(page) = page_name(&path) else {
                continue;
            };

            let raw = std::fs::read_to_string(&path).map_err(|e| ContentError::Read {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let doc = Self::parse(&raw).map_err(|reason| ContentError::Parse {
                path: path.clone(),
                reason,
            })?;

            debug!(page = %page, "Loaded page content");
            store.insert(page, doc);
        }

        info!(dir = %dir.display(), pages = store.len(), "Content store loaded");
        Ok(store)
    }

    /// Parse one YAML document into a JSON value.
    pub fn parse(yaml: &str) -> Result<Value, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Add or replace a page document.
    pub fn insert(&mut self, page: impl Into<String>, doc: Value) {
        self.pages.insert(page.into(), doc);
    }

    /// The document for `page`, if any.
    pub fn get(&self, page: &str) -> Option<&Value> {
        self.pages.get(page)
    }

    /// All page names, sorted.
    pub fn pages(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Page key for a content file, or `None` when the file is not YAML.
fn page_name(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => path.file_stem()?.to_str().map(String::from),
        _ => None,
    }
}

/// Content loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse content file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}
