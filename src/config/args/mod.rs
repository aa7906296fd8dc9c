use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::ffi::OsString;

use crate::config::{ClientConfig, Config, TracingConfig};
use crate::matcher::Criteria;
use crate::types::AccessKeys;


// ---------------------------------------------------------------------------
// Default constants
// ---------------------------------------------------------------------------

const DEFAULT_DRY_RUN: bool = false;
const DEFAULT_FORCE_PATH_STYLE: bool = true;
const DEFAULT_DISABLE_COLOR_TRACING: bool = false;

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

const ERROR_MESSAGE_MISSING_BUCKET: &str =
    "R2_BUCKET is not set. Pass --bucket or set it in the environment/.env file.";
const ERROR_MESSAGE_MISSING_CREDENTIALS: &str = "Missing required credentials. \
R2_ACCOUNT_ID, R2_ACCESS_KEY_ID and R2_SECRET_ACCESS_KEY must all be set.";
const ERROR_MESSAGE_EMPTY_CRITERIA: &str = r#"No deletion criteria specified.

Add to your .env file:
DELETE_EXTENSIONS=.DS_Store,.docx,.tmp
DELETE_PATTERNS=backup,temp,old

Or use both for combined filtering."#;

// ---------------------------------------------------------------------------
// CLIArgs (clap-derived argument struct)
// ---------------------------------------------------------------------------

/// r2sweep - Pattern-based object deletion for R2/S3-compatible buckets.
///
/// Scans a bucket, previews keys matching the configured extension or
/// substring criteria, and deletes them in batches after an explicit
/// typed confirmation.
///
/// Example:
///   r2sweep --bucket my-bucket --extensions .DS_Store,.tmp --dry-run
///   r2sweep --bucket my-bucket --prefix uploads/ --patterns backup,temp
///
/// Every option can also be supplied via the environment (a .env file is
/// loaded at startup): R2_BUCKET, R2_PREFIX, DELETE_EXTENSIONS,
/// DELETE_PATTERNS, DELETE_DRY_RUN, R2_ACCOUNT_ID, R2_ACCESS_KEY_ID,
/// R2_SECRET_ACCESS_KEY.
#[derive(Parser, Clone, Debug)]
#[command(name = "r2sweep", version, about, long_about = None)]
pub struct CLIArgs {
    /// Target bucket name.
    #[arg(long, env = "R2_BUCKET", help_heading = "Target")]
    pub bucket: Option<String>,

    /// Restrict the scan to keys starting with this prefix.
    #[arg(long, env = "R2_PREFIX", default_value = "", help_heading = "Target")]
    pub prefix: String,

    // -----------------------------------------------------------------------
    // Criteria options
    // -----------------------------------------------------------------------
    /// Comma-separated extension tokens. A bare token matches a filename
    /// exactly; a dot-prefixed token matches as a case-insensitive suffix.
    #[arg(
        long,
        env = "DELETE_EXTENSIONS",
        default_value = "",
        help_heading = "Criteria"
    )]
    pub extensions: String,

    /// Comma-separated case-insensitive substring tokens.
    #[arg(
        long,
        env = "DELETE_PATTERNS",
        default_value = "",
        help_heading = "Criteria"
    )]
    pub patterns: String,

    // -----------------------------------------------------------------------
    // General options
    // -----------------------------------------------------------------------
    /// Simulation mode. Lists and previews matches but does not delete.
    /// The environment value accepts truthy strings (true/1/yes/on).
    #[arg(
        short = 'd',
        long,
        env = "DELETE_DRY_RUN",
        default_value_t = DEFAULT_DRY_RUN,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new(),
        help_heading = "General"
    )]
    pub dry_run: bool,

    // -----------------------------------------------------------------------
    // Credential options
    // -----------------------------------------------------------------------
    /// Cloudflare account identifier, used to build the endpoint URL.
    #[arg(long, env = "R2_ACCOUNT_ID", help_heading = "Credentials")]
    pub account_id: Option<String>,

    /// R2 access key id.
    #[arg(long, env = "R2_ACCESS_KEY_ID", help_heading = "Credentials")]
    pub access_key_id: Option<String>,

    /// R2 secret access key.
    #[arg(
        long,
        env = "R2_SECRET_ACCESS_KEY",
        hide_env_values = true,
        help_heading = "Credentials"
    )]
    pub secret_access_key: Option<String>,

    // -----------------------------------------------------------------------
    // Tracing options
    // -----------------------------------------------------------------------
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Disable ANSI color in log output.
    #[arg(long, env, default_value_t = DEFAULT_DISABLE_COLOR_TRACING, help_heading = "Tracing")]
    pub disable_color_tracing: bool,
}

/// Parse CLI arguments from an iterator (for tests and library use).
pub fn parse_from_args<I, T>(args: I) -> Result<CLIArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CLIArgs::try_parse_from(args)
}

impl TryFrom<CLIArgs> for Config {
    type Error = String;

    fn try_from(args: CLIArgs) -> Result<Self, Self::Error> {
        let bucket = match args.bucket {
            Some(bucket) if !bucket.trim().is_empty() => bucket,
            _ => return Err(ERROR_MESSAGE_MISSING_BUCKET.to_string()),
        };

        let criteria = Criteria::from_lists(&args.extensions, &args.patterns);
        if criteria.is_empty() {
            return Err(ERROR_MESSAGE_EMPTY_CRITERIA.to_string());
        }

        let client_config = match (args.account_id, args.access_key_id, args.secret_access_key) {
            (Some(account_id), Some(access_key), Some(secret_access_key)) => ClientConfig {
                account_id,
                access_keys: AccessKeys {
                    access_key,
                    secret_access_key,
                },
                force_path_style: DEFAULT_FORCE_PATH_STYLE,
            },
            _ => return Err(ERROR_MESSAGE_MISSING_CREDENTIALS.to_string()),
        };

        let tracing_config = args.verbosity.log_level().map(|level| TracingConfig {
            tracing_level: level,
            disable_color_tracing: args.disable_color_tracing,
        });

        Ok(Config {
            bucket,
            prefix: args.prefix,
            criteria,
            dry_run: args.dry_run,
            client_config: Some(client_config),
            tracing_config,
        })
    }
}
