//! Sweep orchestration.
//!
//! The run proceeds through fixed stages: scan the bucket, preview the
//! matches, stop for dry-run, gate on the typed confirmation, delete in
//! batches, report. A batch failure never aborts the remaining batches;
//! objects deleted by earlier batches stay deleted.

use anyhow::Result;
use aws_sdk_s3::types::ObjectIdentifier;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::lister::{DEFAULT_MAX_KEYS, ObjectLister};
use crate::matcher;
use crate::safety::{PromptHandler, SafetyChecker};
use crate::storage::{self, Storage};
use crate::types::{FailedKey, MatchedObject, SweepSummary};

/// Maximum objects per batch DeleteObjects API call (S3 limit).
pub const MAX_BATCH_SIZE: usize = 1000;

/// Number of matched keys shown in the preview listing.
pub const PREVIEW_LIMIT: usize = 20;

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// The sweep executor.
///
/// ## Usage
///
/// ```no_run
/// # async fn example() -> anyhow::Result<()> {
/// use r2sweep::{Config, SweepPipeline};
/// use r2sweep::config::args::parse_from_args;
///
/// let args = parse_from_args(vec![
///     "r2sweep",
///     "--bucket", "my-bucket",
///     "--extensions", ".DS_Store,.tmp",
///     "--account-id", "account",
///     "--access-key-id", "key",
///     "--secret-access-key", "secret",
///     "--dry-run",
/// ])?;
/// let config = Config::try_from(args).map_err(anyhow::Error::msg)?;
/// let pipeline = SweepPipeline::new(config).await?;
/// let summary = pipeline.run().await?;
/// println!("{} deleted, {} errored", summary.deleted, summary.errored);
/// # Ok(())
/// # }
/// ```
pub struct SweepPipeline {
    config: Config,
    target: Storage,
    checker: SafetyChecker,
}

impl SweepPipeline {
    /// Create a pipeline with a real R2 storage backend and the interactive
    /// stdin/stdout confirmation prompt.
    pub async fn new(config: Config) -> Result<Self> {
        let target = storage::create_storage(&config).await?;
        Ok(Self {
            config,
            target,
            checker: SafetyChecker::new(),
        })
    }

    /// Assemble a pipeline from pre-built parts.
    ///
    /// Library seam: callers (and tests) can substitute the storage backend
    /// and the prompt handler.
    pub fn with_parts(
        config: Config,
        target: Storage,
        prompt_handler: Box<dyn PromptHandler>,
    ) -> Self {
        Self {
            config,
            target,
            checker: SafetyChecker::with_prompt_handler(prompt_handler),
        }
    }

    /// Run the sweep to completion.
    ///
    /// Returns the aggregate deletion outcome. Terminal states that delete
    /// nothing (empty bucket, no matches, dry run) return an empty summary;
    /// a declined confirmation returns `Err(SweepError::Cancelled)`.
    pub async fn run(&self) -> Result<SweepSummary> {
        self.print_banner();

        println!("Scanning bucket: {}", self.config.bucket);
        if !self.config.prefix.is_empty() {
            println!("With prefix: {}", self.config.prefix);
        }
        println!();

        let all_keys = ObjectLister::new(&self.target)
            .list_all(DEFAULT_MAX_KEYS)
            .await;

        if all_keys.is_empty() {
            println!("No objects found in bucket.");
            return Ok(SweepSummary::default());
        }

        println!("Found {} total objects", all_keys.len());
        self.print_criteria();

        let matched = self.match_keys(&all_keys);
        if matched.is_empty() {
            println!("No matching files found.");
            return Ok(SweepSummary::default());
        }

        self.print_preview(&matched);

        if self.config.dry_run {
            println!("DRY RUN MODE - No files will be deleted");
            return Ok(SweepSummary::default());
        }

        println!(
            "⚠️  WARNING: This will permanently delete {} files!",
            matched.len()
        );
        self.checker.confirm_deletion()?;

        println!("\n{}", separator());
        println!("Deleting files...");
        println!("{}\n", separator());

        let summary = self.delete_matched(&matched).await;

        println!("\n{}", separator());
        println!("Deletion complete!");
        println!("Successfully deleted: {} files", summary.deleted);
        if summary.errored > 0 {
            println!("Errors encountered: {} files", summary.errored);
        }
        println!("{}", separator());

        Ok(summary)
    }

    fn print_banner(&self) {
        println!("\n{}", separator());
        println!("R2 Pattern Deletion Tool");
        println!("Bucket: {}", self.config.bucket);
        if self.config.dry_run {
            println!("Mode: DRY RUN (preview only)");
        }
        println!("{}\n", separator());
    }

    fn print_criteria(&self) {
        println!("Filtering by:");
        if !self.config.criteria.extensions.is_empty() {
            println!(
                "  Extensions: {}",
                self.config.criteria.extensions.join(", ")
            );
        }
        if !self.config.criteria.patterns.is_empty() {
            println!("  Patterns: {}", self.config.criteria.patterns.join(", "));
        }
        println!();
    }

    /// Run the matcher over every listed key, preserving listing order.
    fn match_keys(&self, keys: &[String]) -> Vec<MatchedObject> {
        keys.iter()
            .filter_map(|key| {
                matcher::matches(key, &self.config.criteria).map(|reason| MatchedObject {
                    key: key.clone(),
                    reason,
                })
            })
            .collect()
    }

    fn print_preview(&self, matched: &[MatchedObject]) {
        println!("{}", separator());
        println!("Found {} files to delete:", matched.len());
        println!("{}\n", separator());

        for object in matched.iter().take(PREVIEW_LIMIT) {
            println!("  {} ({})", object.key, object.reason);
        }
        if matched.len() > PREVIEW_LIMIT {
            println!("\n  ... and {} more files", matched.len() - PREVIEW_LIMIT);
        }

        println!("\n{}", separator());
    }

    /// Delete the matched keys in contiguous batches of at most
    /// [`MAX_BATCH_SIZE`], accumulating per-key and per-batch outcomes.
    async fn delete_matched(&self, matched: &[MatchedObject]) -> SweepSummary {
        let mut summary = SweepSummary::default();

        for chunk in matched.chunks(MAX_BATCH_SIZE) {
            let identifiers: Vec<ObjectIdentifier> = chunk
                .iter()
                .map(|object| {
                    ObjectIdentifier::builder()
                        .key(&object.key)
                        .build()
                        .expect("ObjectIdentifier build failed")
                })
                .collect();

            debug!(
                batch_size = identifiers.len(),
                "sending DeleteObjects batch request."
            );

            match self.target.delete_objects(identifiers).await {
                Ok(response) => {
                    for deleted in response.deleted() {
                        summary.deleted += 1;
                        println!("  ✓ Deleted: {}", deleted.key().unwrap_or_default());
                    }

                    for err in response.errors() {
                        let key = err.key().unwrap_or("unknown").to_string();
                        let code = err.code().unwrap_or("unknown").to_string();
                        let message = err.message().unwrap_or("no message").to_string();

                        warn!(
                            key = key,
                            code = code,
                            message = message,
                            "DeleteObjects partial failure for key '{}': {} ({}).",
                            key,
                            code,
                            message,
                        );
                        println!("  ✗ Error deleting {key}: {code} - {message}");

                        summary.errored += 1;
                        summary.failed.push(FailedKey {
                            key,
                            error_code: code,
                            error_message: message,
                        });
                    }
                }
                Err(e) => {
                    // Whole batch counted as errored; later batches still run.
                    error!(
                        batch_size = chunk.len(),
                        error = %e,
                        "DeleteObjects batch request failed."
                    );
                    println!("Error in batch deletion: {e:#}");

                    summary.errored += chunk.len() as u64;
                    for object in chunk {
                        summary.failed.push(FailedKey {
                            key: object.key.clone(),
                            error_code: "N/A".to_string(),
                            error_message: e.to_string(),
                        });
                    }
                }
            }

            debug!(
                deleted = summary.deleted,
                errored = summary.errored,
                "DeleteObjects batch completed."
            );
        }

        summary
    }
}
