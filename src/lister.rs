//! Object listing for the sweep.
//!
//! Thin wrapper over [`StorageTrait::list_objects`] that converts listing
//! failures into an empty key list. The caller cannot distinguish a truly
//! empty bucket from a failed listing call; the failure is only visible in
//! the logs. This mirrors the tool's long-standing observable behavior.

use tracing::{debug, error};

use crate::storage::Storage;

/// Page size for each listing request (S3 ListObjectsV2 maximum).
pub const DEFAULT_MAX_KEYS: i32 = 1000;

/// Lists object keys from the target bucket.
pub struct ObjectLister<'a> {
    target: &'a Storage,
}

impl<'a> ObjectLister<'a> {
    pub fn new(target: &'a Storage) -> Self {
        Self { target }
    }

    /// List all object keys under the configured prefix.
    ///
    /// Returns the keys in listing order. On any listing error, logs the
    /// error and returns an empty list.
    pub async fn list_all(&self, max_keys: i32) -> Vec<String> {
        debug!("object listing has started.");

        match self.target.list_objects(max_keys).await {
            Ok(keys) => {
                debug!(count = keys.len(), "object listing has been completed.");
                keys
            }
            Err(e) => {
                error!(error = %e, "object listing failed; treating the bucket as empty.");
                Vec::new()
            }
        }
    }
}
