//! Builds the configured object store.

use std::sync::Arc;

use tracing::info;

use ems_core::config::storage::StorageConfig;
use ems_core::error::AppError;
use ems_core::result::AppResult;
use ems_core::traits::storage::ObjectStore;

use crate::providers::{LocalObjectStore, MemoryObjectStore};

/// Create the [`ObjectStore`] selected by `storage.provider`.
pub async fn build_object_store(config: &StorageConfig) -> AppResult<Arc<dyn ObjectStore>> {
    let store: Arc<dyn ObjectStore> = match config.provider.as_str() {
        "local" => Arc::new(LocalObjectStore::new(&config.local.root_path).await?),
        "memory" => Arc::new(MemoryObjectStore::new()),
        #[cfg(feature = "s3")]
        "s3" => Arc::new(
            crate::providers::S3ObjectStore::new(&config.s3, &config.container).await?,
        ),
        #[cfg(not(feature = "s3"))]
        "s3" => {
            return Err(AppError::configuration(
                "storage.provider = \"s3\" requires the `s3` feature",
            ));
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown storage provider: {other}"
            )));
        }
    };

    info!(
        provider = store.provider_type(),
        container = %config.container,
        "Object store ready"
    );
    Ok(store)
}
