use anyhow::Result;
use clap::Parser;
use tracing::{debug, trace};

use r2sweep::config::Config;
use r2sweep::{CLIArgs, SweepPipeline, exit_code_from_error, is_cancelled_error};

mod tracing_init;

/// r2sweep - Pattern-based object deletion for R2/S3-compatible buckets.
///
/// This binary is a thin wrapper over the r2sweep library.
/// All core functionality is implemented in the library crate.
#[tokio::main]
async fn main() {
    // Configuration may live in a .env file next to the binary invocation.
    let _ = dotenvy::dotenv();

    let config = load_config_exit_if_err();

    start_tracing_if_necessary(&config);

    trace!("config = {:?}", config);

    if let Err(e) = run(config).await {
        if is_cancelled_error(&e) {
            println!("Operation cancelled.");
            return;
        }
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_from_error(&e));
    }
}

fn load_config_exit_if_err() -> Config {
    match Config::try_from(CLIArgs::parse()) {
        Ok(config) => config,
        Err(error_message) => {
            eprintln!("Error: {error_message}");
            std::process::exit(1);
        }
    }
}

fn start_tracing_if_necessary(config: &Config) -> bool {
    if config.tracing_config.is_none() {
        return false;
    }

    tracing_init::init_tracing(config.tracing_config.as_ref().unwrap());
    true
}

async fn run(config: Config) -> Result<()> {
    let start_time = tokio::time::Instant::now();
    debug!("sweep pipeline start.");

    let pipeline = SweepPipeline::new(config).await?;
    let summary = pipeline.run().await?;

    let duration_sec = format!("{:.3}", start_time.elapsed().as_secs_f32());
    debug!(
        duration_sec = duration_sec,
        deleted = summary.deleted,
        errored = summary.errored,
        "r2sweep has been completed."
    );

    Ok(())
}
