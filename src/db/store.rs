// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON document store with typed load/save/update operations.
//!
//! Each record kind lives in one pretty-printed JSON array that is
//! rewritten wholesale on every mutation. Storage failures never surface
//! to callers: a missing or unreadable document reads as empty, and a
//! failed write is logged and dropped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::db::RecordKind;
use crate::error::AppError;

/// Where documents live: real files under a data directory, or an
/// in-memory map for tests.
enum Backend {
    File { dir: PathBuf },
    Memory { docs: DashMap<RecordKind, String> },
}

struct StoreInner {
    backend: Backend,
    /// One lock per record kind serializes load-transform-save cycles.
    locks: [Mutex<()>; RecordKind::ALL.len()],
}

/// Handle to the document store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

impl JsonStore {
    /// Open a file-backed store rooted at `dir`, creating the directory
    /// if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self::with_backend(Backend::File { dir }))
    }

    /// Create an in-memory store with identical semantics. Used in tests.
    pub fn in_memory() -> Self {
        Self::with_backend(Backend::Memory {
            docs: DashMap::new(),
        })
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend,
                locks: std::array::from_fn(|_| Mutex::new(())),
            }),
        }
    }

    /// Load every record of `kind`.
    ///
    /// An absent document yields an empty collection. An unreadable or
    /// unparsable one is logged and also yields an empty collection, so
    /// the API stays up even if a document is corrupted by hand-editing.
    pub async fn load<T: DeserializeOwned>(&self, kind: RecordKind) -> Vec<T> {
        let raw = match self.read_document(kind).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    document = kind.file_name(),
                    error = %e,
                    "Failed to read document, treating as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    document = kind.file_name(),
                    error = %e,
                    "Failed to parse document, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Serialize `records` and overwrite the document for `kind`.
    ///
    /// A failed write is logged and the document keeps its previous
    /// contents; the caller sees a no-op.
    pub async fn save<T: Serialize>(&self, kind: RecordKind, records: &[T]) {
        let json = match serde_json::to_string_pretty(records) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(
                    document = kind.file_name(),
                    error = %e,
                    "Failed to serialize records, document unchanged"
                );
                return;
            }
        };

        if let Err(e) = self.write_document(kind, json).await {
            tracing::error!(
                document = kind.file_name(),
                error = %e,
                "Failed to persist document"
            );
        }
    }

    /// Run a load-transform-save cycle over the records of `kind`.
    ///
    /// The kind's lock is held for the whole cycle, so concurrent
    /// mutations of the same document cannot lose updates. The document
    /// is persisted only when `f` returns `Ok`; on `Err` it is left
    /// untouched and the error is returned to the caller.
    pub async fn update<T, R, F>(&self, kind: RecordKind, f: F) -> Result<R, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> Result<R, AppError>,
    {
        let _guard = self.inner.locks[kind as usize].lock().await;

        let mut records = self.load(kind).await;
        let out = f(&mut records)?;
        self.save(kind, &records).await;
        Ok(out)
    }

    async fn read_document(&self, kind: RecordKind) -> std::io::Result<Option<String>> {
        match &self.inner.backend {
            Backend::File { dir } => {
                match tokio::fs::read_to_string(dir.join(kind.file_name())).await {
                    Ok(raw) => Ok(Some(raw)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(e),
                }
            }
            Backend::Memory { docs } => Ok(docs.get(&kind).map(|doc| doc.value().clone())),
        }
    }

    async fn write_document(&self, kind: RecordKind, json: String) -> std::io::Result<()> {
        match &self.inner.backend {
            Backend::File { dir } => tokio::fs::write(dir.join(kind.file_name()), json).await,
            Backend::Memory { docs } => {
                docs.insert(kind, json);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u32,
        label: String,
    }

    fn item(id: u32, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_document_is_empty() {
        let store = JsonStore::in_memory();
        let items: Vec<Item> = store.load(RecordKind::Users).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = JsonStore::in_memory();
        let items = vec![item(1, "first"), item(2, "second")];

        store.save(RecordKind::Progress, &items).await;
        let loaded: Vec<Item> = store.load(RecordKind::Progress).await;

        assert_eq!(loaded, items);
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let store = JsonStore::in_memory();
        store.save(RecordKind::Users, &[item(1, "user-doc")]).await;

        let other: Vec<Item> = store.load(RecordKind::Community).await;
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_update_persists_on_ok() {
        let store = JsonStore::in_memory();

        let count = store
            .update(RecordKind::Community, |items: &mut Vec<Item>| {
                items.push(item(7, "post"));
                Ok(items.len())
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
        let loaded: Vec<Item> = store.load(RecordKind::Community).await;
        assert_eq!(loaded, vec![item(7, "post")]);
    }

    #[tokio::test]
    async fn test_update_discards_changes_on_err() {
        let store = JsonStore::in_memory();
        store.save(RecordKind::Users, &[item(1, "kept")]).await;

        let result: Result<(), AppError> = store
            .update(RecordKind::Users, |items: &mut Vec<Item>| {
                items.push(item(2, "rejected"));
                Err(AppError::Validation("no room".to_string()))
            })
            .await;

        assert!(result.is_err());
        let loaded: Vec<Item> = store.load(RecordKind::Users).await;
        assert_eq!(loaded, vec![item(1, "kept")]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = JsonStore::in_memory();
        let clone = store.clone();

        store.save(RecordKind::Users, &[item(3, "shared")]).await;
        let loaded: Vec<Item> = clone.load(RecordKind::Users).await;

        assert_eq!(loaded, vec![item(3, "shared")]);
    }
}
