//! Earthview command-line front end.
//!
//! Normalizes video references and prints the site's video catalog as JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::{CliConfig, LogFormat};
pub use logging::init_tracing;
