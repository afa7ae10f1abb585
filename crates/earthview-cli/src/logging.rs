//! Tracing setup.
//!
//! Logs always go to stderr so that command output on stdout stays valid JSON.

use anyhow::{Context, Result};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

/// Default directive applied on top of `RUST_LOG`.
const DEFAULT_DIRECTIVE: &str = "earthview=info";

/// Install the global subscriber: colored text for dev, JSON when requested.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive(
        DEFAULT_DIRECTIVE
            .parse::<Directive>()
            .context("invalid default log directive")?,
    );

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
