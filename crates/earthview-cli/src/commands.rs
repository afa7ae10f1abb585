//! Command execution.
//!
//! Every command renders pretty JSON; printing is left to `main`.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use earthview_models::{catalog, normalize, AppOrigin, CatalogEntry, PlaybackSurface, VideoReference};

use crate::cli::{Command, OriginArgs};
use crate::config::CliConfig;

/// Catalog entry together with its normalized reference.
#[derive(Debug, Serialize)]
struct CatalogItem {
    #[serde(flatten)]
    entry: CatalogEntry,
    reference: Option<VideoReference>,
}

/// Run `command` and return its JSON output.
pub fn run(command: &Command, config: &CliConfig) -> Result<String> {
    match command {
        Command::Normalize(args) => {
            let origin = resolve_origin(&args.origin, config)?;
            let reference = normalize(&args.input, &origin);
            info!(
                kind = %reference.kind,
                local = reference.is_local_media,
                "Normalized video reference"
            );
            reference
                .to_json_pretty()
                .context("failed to serialize video reference")
        }
        Command::Surface(args) => {
            let origin = resolve_origin(&args.origin, config)?;
            let reference = normalize(&args.input, &origin);
            let surface = PlaybackSurface::for_reference(&reference);
            if surface.is_none() {
                info!("Empty reference, nothing to play");
            }
            serde_json::to_string_pretty(&surface).context("failed to serialize playback surface")
        }
        Command::Catalog(args) => {
            let origin = resolve_origin(args, config)?;
            let items: Vec<CatalogItem> = catalog::entries()
                .into_iter()
                .map(|entry| {
                    let reference = entry.normalize(&origin);
                    CatalogItem { entry, reference }
                })
                .collect();
            info!(count = items.len(), "Rendered catalog");
            serde_json::to_string_pretty(&items).context("failed to serialize catalog")
        }
    }
}

/// Command-line origin wins over configuration.
fn resolve_origin(args: &OriginArgs, config: &CliConfig) -> Result<AppOrigin> {
    let raw = args.origin.as_deref().unwrap_or(config.origin.as_str());
    let origin = AppOrigin::parse(raw).with_context(|| format!("invalid origin '{raw}'"))?;
    debug!(origin = %origin, "Using origin");
    Ok(origin)
}
