//! S3-compatible object store (requires the `s3` feature).
//!
//! The first path segment is the bucket, the rest is the object key.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use ems_core::config::storage::S3StorageConfig;
use ems_core::error::AppError;
use ems_core::result::AppResult;
use ems_core::traits::storage::ObjectStore;

/// [`ObjectStore`] backed by S3 or an S3-compatible service (MinIO, R2).
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    health_bucket: String,
}

impl S3ObjectStore {
    /// Build a client from configuration.
    ///
    /// Static credentials are used when both keys are set; otherwise the
    /// default AWS credential chain applies. A custom endpoint switches to
    /// path-style addressing.
    pub async fn new(config: &S3StorageConfig, health_bucket: &str) -> AppResult<Self> {
        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %health_bucket,
            "Initializing S3 object store"
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if !config.access_key.is_empty() && !config.secret_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "ems-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder
                .endpoint_url(config.endpoint.clone())
                .force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            health_bucket: health_bucket.to_string(),
        })
    }
}

fn split_path(path: &str) -> AppResult<(&str, &str)> {
    path.trim_start_matches('/')
        .split_once('/')
        .filter(|(bucket, key)| !bucket.is_empty() && !key.is_empty())
        .ok_or_else(|| AppError::validation(format!("Invalid object path: {path}")))
}

fn s3_error<E: std::error::Error>(op: &str, path: &str, e: E) -> AppError {
    AppError::storage(format!("S3 {op} failed for {path}: {}", DisplayErrorContext(e)))
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self
            .client
            .head_bucket()
            .bucket(&self.health_bucket)
            .send()
            .await
            .is_ok())
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let (bucket, key) = split_path(path)?;
        let len = data.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| s3_error("put_object", path, e))?;

        debug!(path, bytes = len, "Uploaded object");
        Ok(())
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let (bucket, key) = split_path(path)?;

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    AppError::not_found(format!("Object not found: {path}"))
                } else {
                    s3_error("get_object", path, e)
                }
            })?;

        let collected = output
            .body
            .collect()
            .await
            .map_err(|e| s3_error("read body", path, e))?;
        Ok(collected.into_bytes())
    }
}
