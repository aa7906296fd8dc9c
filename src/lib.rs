/*!
# Overview
r2sweep scans a Cloudflare R2 (or any S3-compatible) bucket, previews the
object keys matching configured extension or substring criteria, and deletes
them in batches of up to 1000 after an explicit typed confirmation.

## Features
- **Pattern criteria**: exact filename tokens, case-insensitive extension
  suffixes, and case-insensitive substring patterns
- **Safety first**: preview listing, dry-run mode, and a confirmation gate
  requiring the exact literal `DELETE`
- **Batch deletion**: one DeleteObjects request per 1000 keys, with per-key
  success/error accounting; a failed batch never aborts the remaining ones
- **Library-first**: the r2sweep CLI is a thin wrapper over this crate

## As a Library

```toml
[dependencies]
r2sweep = "0.1"
tokio = { version = "1", features = ["full"] }
```

```no_run
// use r2sweep::config::args::parse_from_args;
// use r2sweep::{Config, SweepPipeline};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let args = parse_from_args(vec![
//         "r2sweep",
//         "--bucket", "my-bucket",
//         "--extensions", ".DS_Store,.tmp",
//         "--account-id", "account",
//         "--access-key-id", "key",
//         "--secret-access-key", "secret",
//         "--dry-run",
//     ])?;
//     let config = Config::try_from(args).map_err(anyhow::Error::msg)?;
//     let summary = SweepPipeline::new(config).await?.run().await?;
//     println!("{} deleted, {} errored", summary.deleted, summary.errored);
//     Ok(())
// }
```
*/

pub mod config;
pub mod lister;
pub mod matcher;
pub mod pipeline;
pub mod safety;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use config::args::CLIArgs;
pub use pipeline::SweepPipeline;
pub use types::error::{SweepError, exit_code_from_error, is_cancelled_error};
