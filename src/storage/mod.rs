use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::types::ObjectIdentifier;

use crate::config::Config;

pub mod s3;

/// Type alias for a boxed Storage trait object.
pub type Storage = Box<dyn StorageTrait + Send + Sync>;

/// Core storage trait for the operations the sweep needs: listing keys and
/// bulk deletion. The S3 implementation lives in [`s3::S3Storage`]; tests
/// substitute mocks.
#[async_trait]
pub trait StorageTrait {
    /// List all object keys under the configured prefix, transparently
    /// following pagination until the listing is exhausted.
    ///
    /// `max_keys` controls the page size of each listing request, not the
    /// total number of keys returned.
    ///
    /// Listing failures are returned as errors; the
    /// [`ObjectLister`](crate::lister::ObjectLister) decides how to surface
    /// them.
    async fn list_objects(&self, max_keys: i32) -> Result<Vec<String>>;

    /// Delete multiple objects in a single DeleteObjects request.
    ///
    /// Accepts at most 1000 identifiers per call (S3 API limit); the caller
    /// is responsible for batching. Returns the per-key success/error
    /// records from the response.
    async fn delete_objects(&self, objects: Vec<ObjectIdentifier>) -> Result<DeleteObjectsOutput>;
}

/// Create the R2 storage instance for a sweep run.
///
/// Requires `config.client_config` to be present (guaranteed when the
/// config came through `Config::try_from(CLIArgs)`).
pub async fn create_storage(config: &Config) -> Result<Storage> {
    let client_config = config
        .client_config
        .as_ref()
        .context("client configuration is missing")?;

    let client = client_config.create_client().await;

    Ok(Box::new(s3::S3Storage::new(
        client,
        config.bucket.clone(),
        config.prefix.clone(),
    )))
}
