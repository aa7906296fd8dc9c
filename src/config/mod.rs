pub mod args;

use crate::matcher::Criteria;
use crate::types::AccessKeys;

/// Main configuration for a sweep run.
///
/// Holds the target bucket/prefix, the deletion criteria, the dry-run flag,
/// and the R2 client settings. Built from [`CLIArgs`](args::CLIArgs) via
/// `Config::try_from`, which performs all startup validation (required
/// bucket, required credentials, non-empty criteria).
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub prefix: String,
    pub criteria: Criteria,
    pub dry_run: bool,
    pub client_config: Option<ClientConfig>,
    pub tracing_config: Option<TracingConfig>,
}

/// R2 client configuration.
///
/// The endpoint URL is derived from the account identifier
/// (`https://{account_id}.r2.cloudflarestorage.com`); the region token is
/// always `"auto"` per the R2 S3-compatibility contract.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub account_id: String,
    pub access_keys: AccessKeys,
    pub force_path_style: bool,
}

/// Tracing (logging) configuration.
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub tracing_level: log::Level,
    pub disable_color_tracing: bool,
}
