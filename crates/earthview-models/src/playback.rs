//! Playback surface selection.
//!
//! A presentation layer renders exactly one of these for a normalized
//! reference: a native media element for local files or an iframe for
//! everything else.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::video_ref::VideoReference;

/// Features the embedded player is allowed to use.
pub const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

pub const IFRAME_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

pub const IFRAME_TITLE: &str = "YouTube video player";

/// Hides the download button of native controls.
pub const NATIVE_CONTROLS_LIST: &str = "nodownload";

/// Element a consumer must render to play a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum PlaybackSurface {
    /// `<video>` element pointing at a directly served file
    NativeMedia {
        src: String,
        controls: bool,
        autoplay: bool,
        controls_list: String,
    },
    /// `<iframe>` element pointing at a third-party player
    Iframe {
        src: String,
        title: String,
        allow: String,
        referrer_policy: String,
        allow_fullscreen: bool,
    },
}

impl PlaybackSurface {
    /// Pick the surface for `reference`, or `None` when there is nothing to play.
    pub fn for_reference(reference: &VideoReference) -> Option<Self> {
        if !reference.is_playable() {
            return None;
        }

        let src = reference.canonical_reference.clone();
        if reference.is_local_media {
            Some(PlaybackSurface::NativeMedia {
                src,
                controls: true,
                autoplay: true,
                controls_list: NATIVE_CONTROLS_LIST.to_string(),
            })
        } else {
            Some(PlaybackSurface::Iframe {
                src,
                title: IFRAME_TITLE.to_string(),
                allow: IFRAME_ALLOW.to_string(),
                referrer_policy: IFRAME_REFERRER_POLICY.to_string(),
                allow_fullscreen: true,
            })
        }
    }

    pub fn src(&self) -> &str {
        match self {
            PlaybackSurface::NativeMedia { src, .. } | PlaybackSurface::Iframe { src, .. } => src,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, PlaybackSurface::NativeMedia { .. })
    }
}
