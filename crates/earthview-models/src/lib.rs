//! Shared models for Earthview.
//!
//! This crate provides:
//! - Video reference normalization (local media, YouTube watch, short and embed links)
//! - The application origin handed to embedded players
//! - Playback surface selection (native media element vs iframe)
//! - The static catalog of featured videos

pub mod catalog;
pub mod origin;
pub mod playback;
pub mod query;
pub mod video_ref;

// Re-export common types
pub use catalog::{CatalogEntry, CatalogSection};
pub use origin::{AppOrigin, OriginError, OriginResult};
pub use playback::PlaybackSurface;
pub use query::QueryParams;
pub use video_ref::{classify, normalize, VideoKind, VideoReference};
