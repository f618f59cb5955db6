use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use crate::assets::decode::{SpriteImage, decode_image};
use crate::metadata::document::LayerDocument;
use crate::metadata::paths::COORD_FILE;
use crate::store::client::AssetStore;

/// Append-only memoization table keyed by normalized asset path.
///
/// Entries live for the lifetime of the process; nothing ever invalidates
/// them. Concurrent callers for the same uncached path may each run their
/// loader, but the first stored result wins and every caller observes it.
#[derive(Debug, Default)]
pub struct MemoTable<T: Clone> {
    entries: Mutex<HashMap<String, T>>,
}

impl<T: Clone> MemoTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `path`, or run `loader`, store its result
    /// (including negative results), and return the stored value.
    pub async fn get_or_load<F, Fut>(&self, path: &str, loader: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(hit) = self.peek(path) {
            return hit;
        }
        let loaded = loader().await;
        let mut entries = self.lock();
        entries.entry(path.to_string()).or_insert(loaded).clone()
    }

    /// Cached value for `path` without loading. `None` means "not yet
    /// checked", which is distinct from a cached negative value.
    pub fn peek(&self, path: &str) -> Option<T> {
        self.lock().get(path).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, T>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide asset caches: path existence, parsed metadata documents, and
/// decoded images, each memoized independently.
#[derive(Debug, Default)]
pub struct AssetCache {
    existence: MemoTable<bool>,
    documents: MemoTable<Option<Arc<LayerDocument>>>,
    images: MemoTable<Option<Arc<SpriteImage>>>,
}

impl AssetCache {
    /// Create empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized existence probe.
    pub async fn exists<S: AssetStore>(&self, store: &S, path: &str) -> bool {
        self.existence
            .get_or_load(path, || async {
                let hit = store.exists(path).await;
                tracing::debug!(path, hit, "existence probe");
                hit
            })
            .await
    }

    /// Memoized metadata document for an item folder.
    ///
    /// `None` is a confirmed-absent result: missing or malformed documents
    /// are normal for older item IDs and mean the piece contributes nothing.
    pub async fn document<S: AssetStore>(
        &self,
        store: &S,
        folder: &str,
    ) -> Option<Arc<LayerDocument>> {
        let path = format!("{folder}/{COORD_FILE}");
        self.documents
            .get_or_load(&path, || async {
                let bytes = store.fetch(&path).await?;
                match LayerDocument::parse(&bytes) {
                    Ok(doc) => {
                        tracing::debug!(path, sub_layers = doc.len(), "loaded layer document");
                        Some(Arc::new(doc))
                    }
                    Err(e) => {
                        tracing::debug!(path, error = %e, "unusable layer document");
                        None
                    }
                }
            })
            .await
    }

    /// Memoized decoded image, probing existence before fetching.
    ///
    /// `None` covers absence, transport failure, and undecodable bytes.
    pub async fn image<S: AssetStore>(&self, store: &S, path: &str) -> Option<Arc<SpriteImage>> {
        self.images
            .get_or_load(path, || async {
                if !self.exists(store, path).await {
                    return None;
                }
                let bytes = store.fetch(path).await?;
                match decode_image(&bytes) {
                    Ok(img) => Some(Arc::new(img)),
                    Err(e) => {
                        tracing::warn!(path, error = %e, "sprite decode failed");
                        None
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/cache.rs"]
mod tests;
