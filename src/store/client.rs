use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;

use crate::foundation::error::{LoomError, LoomResult};

/// Read-only key-value view of the game-asset namespace.
///
/// This is the only trait in the crate allowed to perform I/O. Both
/// operations fail soft: any transport error is reported as "does not exist"
/// or "no bytes", never raised to the caller.
pub trait AssetStore: Send + Sync {
    /// Probe whether a logical asset path exists.
    fn exists(&self, path: &str) -> impl Future<Output = bool> + Send;

    /// Fetch the raw bytes at a logical asset path.
    ///
    /// Absence and transport failures both yield `None`.
    fn fetch(&self, path: &str) -> impl Future<Output = Option<Vec<u8>>> + Send;
}

/// Normalize and validate a logical asset path.
///
/// The normalized result uses `/` separators and removes `.` segments.
/// Absolute paths and parent traversals (`..`) are rejected so a store can
/// never be walked outside its root.
pub fn normalize_asset_path(source: &str) -> LoomResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(LoomError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(LoomError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(LoomError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(LoomError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Filesystem-backed asset store rooted at a directory.
#[derive(Clone, Debug)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Create a store serving assets from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        match normalize_asset_path(path) {
            Ok(norm) => Some(self.root.join(norm)),
            Err(e) => {
                tracing::debug!(path, error = %e, "rejected asset path");
                None
            }
        }
    }
}

impl AssetStore for FsAssetStore {
    fn exists(&self, path: &str) -> impl Future<Output = bool> + Send {
        let resolved = self.resolve(path);
        async move {
            match resolved {
                Some(p) => tokio::fs::try_exists(&p).await.unwrap_or(false),
                None => false,
            }
        }
    }

    fn fetch(&self, path: &str) -> impl Future<Output = Option<Vec<u8>>> + Send {
        let resolved = self.resolve(path);
        async move {
            let p = resolved?;
            match tokio::fs::read(&p).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::debug!(path = %p.display(), error = %e, "asset fetch failed");
                    None
                }
            }
        }
    }
}

/// In-memory asset store.
///
/// Useful as a test double and for embedding small asset sets directly in a
/// consumer.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert bytes at a logical path, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(path.into(), bytes);
    }
}

impl AssetStore for MemoryAssetStore {
    fn exists(&self, path: &str) -> impl Future<Output = bool> + Send {
        let hit = self.entries.contains_key(path);
        async move { hit }
    }

    fn fetch(&self, path: &str) -> impl Future<Output = Option<Vec<u8>>> + Send {
        let bytes = self.entries.get(path).cloned();
        async move { bytes }
    }
}
