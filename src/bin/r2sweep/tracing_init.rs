// Initializes the tracing subscriber for the CLI binary.
//
// Diagnostics go to stderr; stdout carries the scan/preview/deletion
// listing and the confirmation prompt.

use std::env;
use std::io::IsTerminal;

use r2sweep::config::TracingConfig;

const EVENT_FILTER_ENV_VAR: &str = "RUST_LOG";

pub fn init_tracing(config: &TracingConfig) {
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(!config.disable_color_tracing && std::io::stderr().is_terminal());

    let mut show_target = true;
    let tracing_level = config.tracing_level;
    let event_filter = if env::var(EVENT_FILTER_ENV_VAR).is_ok() {
        env::var(EVENT_FILTER_ENV_VAR).unwrap()
    } else {
        show_target = false;
        format!("r2sweep={tracing_level}")
    };

    subscriber_builder
        .with_env_filter(event_filter)
        .with_target(show_target)
        .init();
}
