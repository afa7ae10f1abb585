//! Video reference normalization.
//!
//! Turns whatever a page author pasted as a video source (a local media
//! file, a YouTube watch link, a `youtu.be` short link or an existing embed
//! link) into one reference a player can load directly.
//!
//! Normalization never fails. Anything that cannot be parsed degrades to the
//! raw input so the caller still has something to try.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::origin::AppOrigin;
use crate::query::QueryParams;

/// File suffixes played through a native media element.
pub const LOCAL_MEDIA_SUFFIXES: [&str; 3] = [".mp4", ".webm", ".ogg"];

/// Base of every canonical YouTube reference.
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Watch-URL parameters carried over to the embed URL.
const WATCH_PASSTHROUGH_PARAMS: [&str; 3] = ["start", "t", "si"];

const EMBED_MARKER: &str = "youtube.com/embed";
const SHORT_LINK_MARKER: &str = "youtu.be";
const WATCH_MARKER: &str = "youtube.com/watch";

/// Classification of a raw video reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    /// File served directly, e.g. `/media/glacier.mp4`
    LocalMedia,
    /// Existing `youtube.com/embed/<id>` URL
    #[serde(rename = "youtube_embed")]
    YouTubeEmbed,
    /// `youtu.be/<id>` short link
    #[serde(rename = "youtube_short")]
    YouTubeShort,
    /// `youtube.com/watch?v=<id>` URL
    #[serde(rename = "youtube_watch")]
    YouTubeWatch,
    /// Anything else, passed through untouched
    Unknown,
}

impl VideoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::LocalMedia => "local_media",
            VideoKind::YouTubeEmbed => "youtube_embed",
            VideoKind::YouTubeShort => "youtube_short",
            VideoKind::YouTubeWatch => "youtube_watch",
            VideoKind::Unknown => "unknown",
        }
    }

    /// Whether references of this kind are rewritten to a YouTube embed URL.
    pub fn is_youtube(&self) -> bool {
        matches!(
            self,
            VideoKind::YouTubeEmbed | VideoKind::YouTubeShort | VideoKind::YouTubeWatch
        )
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized video reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoReference {
    /// Input exactly as supplied
    pub raw_input: String,

    /// Classification of `raw_input`
    pub kind: VideoKind,

    /// Value to hand to the player
    pub canonical_reference: String,

    /// True when a native media element must be used instead of an iframe
    pub is_local_media: bool,
}

impl VideoReference {
    /// An empty canonical reference means there is nothing to play.
    pub fn is_playable(&self) -> bool {
        !self.canonical_reference.is_empty()
    }

    /// Video ID of a canonical `/embed/<id>` reference.
    ///
    /// Returns `None` for non-YouTube kinds and for references that fell back
    /// to the raw input. The ID may be empty for degenerate inputs.
    pub fn video_id(&self) -> Option<String> {
        if !self.kind.is_youtube() {
            return None;
        }
        let url = Url::parse(&self.canonical_reference).ok()?;
        let mut segments = url.path_segments()?;
        match segments.next() {
            Some("embed") => Some(segments.next().unwrap_or_default().to_string()),
            _ => None,
        }
    }

    /// Pretty JSON for CLI and debugging output.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Classify a raw reference.
///
/// Checks run in a fixed order: local media suffix, embed URL, short link,
/// watch URL. An embed URL may also contain `youtu.be` or `watch` text in
/// its query, so the embed check must come before the other two.
pub fn classify(raw_input: &str) -> VideoKind {
    if raw_input.is_empty() {
        VideoKind::Unknown
    } else if LOCAL_MEDIA_SUFFIXES
        .iter()
        .any(|suffix| raw_input.ends_with(suffix))
    {
        VideoKind::LocalMedia
    } else if raw_input.contains(EMBED_MARKER) {
        VideoKind::YouTubeEmbed
    } else if raw_input.contains(SHORT_LINK_MARKER) {
        VideoKind::YouTubeShort
    } else if raw_input.contains(WATCH_MARKER) {
        VideoKind::YouTubeWatch
    } else {
        VideoKind::Unknown
    }
}

/// Normalize a raw reference for the page served from `origin`.
///
/// # Example
/// ```
/// use earthview_models::{normalize, AppOrigin, VideoKind};
///
/// let origin = AppOrigin::parse("http://localhost:8080").unwrap();
/// let reference = normalize("https://youtu.be/abc123?start=42", &origin);
///
/// assert_eq!(reference.kind, VideoKind::YouTubeShort);
/// assert_eq!(
///     reference.canonical_reference,
///     "https://www.youtube.com/embed/abc123?start=42&autoplay=1&enablejsapi=1\
///      &origin=http%3A%2F%2Flocalhost%3A8080&widgetid=1"
/// );
/// assert!(!reference.is_local_media);
/// ```
pub fn normalize(raw_input: &str, origin: &AppOrigin) -> VideoReference {
    let kind = classify(raw_input);

    let built = match kind {
        VideoKind::LocalMedia | VideoKind::Unknown => Ok(raw_input.to_string()),
        VideoKind::YouTubeEmbed => from_embed_url(raw_input, origin),
        VideoKind::YouTubeShort => from_short_link(raw_input, origin),
        VideoKind::YouTubeWatch => from_watch_url(raw_input, origin),
    };

    let canonical_reference = built.unwrap_or_else(|err| {
        debug!(
            kind = %kind,
            error = %err,
            "Could not parse video reference, using raw input"
        );
        raw_input.to_string()
    });

    VideoReference {
        raw_input: raw_input.to_string(),
        kind,
        canonical_reference,
        is_local_media: kind == VideoKind::LocalMedia,
    }
}

/// Keep every existing parameter; only `autoplay` defers to the input.
fn from_embed_url(raw_input: &str, origin: &AppOrigin) -> Result<String, url::ParseError> {
    let mut url = Url::parse(raw_input)?;
    let mut params = QueryParams::from_url(&url);

    if !params.has("autoplay") {
        params.set("autoplay", "1");
    }
    params.set("enablejsapi", "1");
    params.set("origin", origin.as_str());
    params.set("widgetid", "1");

    params.apply_to(&mut url);
    Ok(url.into())
}

/// `youtu.be/<id>[?query]`: the whole trailing query is kept.
fn from_short_link(raw_input: &str, origin: &AppOrigin) -> Result<String, url::ParseError> {
    let last_segment = raw_input.rsplit('/').next().unwrap_or_default();
    let mut parts = last_segment.split('?');
    let video_id = parts.next().unwrap_or_default();
    let trailing_query = parts.next().filter(|q| !q.is_empty());

    let mut url = embed_url(video_id)?;
    let mut params = QueryParams::from_url(&url);
    if let Some(query) = trailing_query {
        params.merge(&QueryParams::parse(query));
    }
    force_player_params(&mut params, origin);

    params.apply_to(&mut url);
    Ok(url.into())
}

/// `youtube.com/watch?v=<id>`: only allow-listed parameters survive.
fn from_watch_url(raw_input: &str, origin: &AppOrigin) -> Result<String, url::ParseError> {
    let watch = Url::parse(raw_input)?;
    let source = QueryParams::from_url(&watch);
    let video_id = source.get("v").unwrap_or_default();

    let mut url = embed_url(video_id)?;
    let mut params = QueryParams::from_url(&url);
    for key in WATCH_PASSTHROUGH_PARAMS {
        if let Some(value) = source.get(key).filter(|v| !v.is_empty()) {
            params.set(key, value);
        }
    }
    force_player_params(&mut params, origin);

    params.apply_to(&mut url);
    Ok(url.into())
}

fn embed_url(video_id: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{EMBED_BASE_URL}{video_id}"))
}

fn force_player_params(params: &mut QueryParams, origin: &AppOrigin) {
    params.set("autoplay", "1");
    params.set("enablejsapi", "1");
    params.set("origin", origin.as_str());
    params.set("widgetid", "1");
}
