//! Template storage backends.
//!
//! Stores hand back raw documents; parsing and the skip-on-corruption policy
//! live in the catalog.
//!
//! `AppState` holds the catalog, which carries an `Arc<dyn TemplateStore>`.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A raw template document as held by a store, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub key: String,
    pub contents: String,
}

/// Read-only capability over a collection of template documents.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Every document in the store, ordered by key.
    async fn enumerate(&self) -> Result<Vec<StoredDocument>>;

    /// The document stored under `key`, or `None` if there is none.
    async fn fetch(&self, key: &str) -> Result<Option<String>>;
}

// ────────────────────────────────────────────────────────────────────────────
// FsTemplateStore: one `{slug}.json` file per template
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn enumerate(&self) -> Result<Vec<StoredDocument>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Templates directory {} does not exist", self.dir.display());
                return Ok(vec![]);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read templates directory {}", self.dir.display())
                })
            }
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => documents.push(StoredDocument {
                    key: key.to_string(),
                    contents,
                }),
                Err(e) => warn!("Skipping unreadable template {}: {e}", path.display()),
            }
        }

        documents.sort_by(|a, b| a.key.cmp(&b.key));
        debug!("Enumerated {} template documents", documents.len());
        Ok(documents)
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{key}.json"));
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!("Template {} is unreadable: {e}", path.display());
                Ok(None)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryTemplateStore: fixed in-process documents
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    documents: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, key: impl Into<String>, contents: impl Into<String>) -> Self {
        self.documents.insert(key.into(), contents.into());
        self
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn enumerate(&self) -> Result<Vec<StoredDocument>> {
        Ok(self
            .documents
            .iter()
            .map(|(key, contents)| StoredDocument {
                key: key.clone(),
                contents: contents.clone(),
            })
            .collect())
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }
}
