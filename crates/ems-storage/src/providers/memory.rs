//! In-process object store.
//!
//! Backs `storage.provider = "memory"` and the test suites. Write failures
//! can be injected to exercise retry handling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use ems_core::error::AppError;
use ems_core::result::AppResult;
use ems_core::traits::storage::ObjectStore;

/// [`ObjectStore`] held in a hash map.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<String, Bytes>>,
    failing_writes: AtomicU32,
    write_attempts: AtomicUsize,
}

impl MemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` writes fail with a storage error.
    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    /// Number of `write` calls seen, including failed ones.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// Paths of all stored objects, sorted.
    pub async fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.objects.read().await.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Whether the store holds no objects.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);

        let injected = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            return Err(AppError::storage(format!("Injected write failure: {path}")));
        }

        self.objects
            .write()
            .await
            .insert(path.to_string(), data);
        Ok(())
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        self.objects
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Object not found: {path}")))
    }
}
