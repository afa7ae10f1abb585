//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "earthview",
    version,
    about = "Normalize video references for the Earthview site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the normalized reference for a video URL or file path
    Normalize(ReferenceArgs),

    /// Print the playback surface (native video or iframe) for a reference
    Surface(ReferenceArgs),

    /// Print every catalog entry with its normalized reference
    Catalog(OriginArgs),
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    /// YouTube URL, local media path, or any other video source
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    #[command(flatten)]
    pub origin: OriginArgs,
}

#[derive(Debug, Args)]
pub struct OriginArgs {
    /// Origin of the embedding page (overrides EARTHVIEW_ORIGIN)
    #[arg(long)]
    pub origin: Option<String>,
}
