/*
    addressing.rs - Content-addressed storage seam

    Plaintext in, opaque reference out; reference in, plaintext back.
    Callers treat a failure as terminal for that single operation --
    there is no silent fallback to plaintext.

    The in-memory implementation addresses content by its blake3 digest
    and stands in for the real gateway in tests and offline sessions.
*/

use super::errors::{ContentError, ContentResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// Opaque reference to stored content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(pub String);

impl ContentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        ContentRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content-addressed storage contract as seen by the core
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store bytes and return an opaque reference to them
    async fn put(&self, data: &[u8]) -> ContentResult<ContentRef>;

    /// Fetch the bytes behind a reference
    async fn get(&self, reference: &ContentRef) -> ContentResult<Vec<u8>>;

    /// Store a text payload
    async fn put_text(&self, text: &str) -> ContentResult<ContentRef> {
        self.put(text.as_bytes()).await
    }

    /// Fetch a text payload
    async fn get_text(&self, reference: &ContentRef) -> ContentResult<String> {
        let bytes = self.get(reference).await?;
        String::from_utf8(bytes)
            .map_err(|e| ContentError::Corrupt(format!("not valid UTF-8: {}", e)))
    }
}

/// In-memory content store addressed by blake3 digest
#[derive(Default)]
pub struct MemoryContentStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        MemoryContentStore::default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn put(&self, data: &[u8]) -> ContentResult<ContentRef> {
        let digest = blake3::hash(data).to_hex().to_string();
        let mut blobs = self
            .blobs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        blobs.insert(digest.clone(), data.to_vec());
        Ok(ContentRef(digest))
    }

    async fn get(&self, reference: &ContentRef) -> ContentResult<Vec<u8>> {
        let blobs = self
            .blobs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        blobs
            .get(reference.as_str())
            .cloned()
            .ok_or_else(|| ContentError::NotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = MemoryContentStore::new();
        let reference = store.put_text("a quiet evening").await.unwrap();
        let back = store.get_text(&reference).await.unwrap();
        assert_eq!(back, "a quiet evening");
    }

    #[tokio::test]
    async fn test_same_content_same_reference() {
        let store = MemoryContentStore::new();
        let a = store.put_text("identical").await.unwrap();
        let b = store.put_text("identical").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_unknown_reference_is_an_error() {
        let store = MemoryContentStore::new();
        let missing = ContentRef::new("deadbeef");
        assert!(matches!(
            store.get(&missing).await,
            Err(ContentError::NotFound(_))
        ));
    }
}
