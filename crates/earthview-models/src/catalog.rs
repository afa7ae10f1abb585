//! Static catalog of the videos featured on the site.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::origin::AppOrigin;
use crate::video_ref::{normalize, VideoReference};

/// Page section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSection {
    /// Mission cards of the dataset explorer
    DataExplorer,
    /// Long-form story modules
    Story,
    /// VR preview buttons
    VrPreview,
}

impl CatalogSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSection::DataExplorer => "data_explorer",
            CatalogSection::Story => "story",
            CatalogSection::VrPreview => "vr_preview",
        }
    }
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub section: CatalogSection,

    /// Raw video reference as authored; some entries have none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl CatalogEntry {
    /// Normalize this entry's video for the page served from `origin`.
    pub fn normalize(&self, origin: &AppOrigin) -> Option<VideoReference> {
        self.video_url.as_deref().map(|raw| normalize(raw, origin))
    }
}

struct StaticEntry {
    slug: &'static str,
    title: &'static str,
    subtitle: &'static str,
    section: CatalogSection,
    video_url: Option<&'static str>,
}

const ENTRIES: &[StaticEntry] = &[
    StaticEntry {
        slug: "pace",
        title: "PACE",
        subtitle: "Ocean Color & Plankton",
        section: CatalogSection::DataExplorer,
        video_url: Some("https://www.youtube.com/embed/JyjjiEQq6uI?si=P84C85U7NSg8xqWH"),
    },
    StaticEntry {
        slug: "swot",
        title: "SWOT",
        subtitle: "Sea Level & Currents",
        section: CatalogSection::DataExplorer,
        video_url: Some("https://www.youtube.com/watch?v=p4pWafuvdrY"),
    },
    StaticEntry {
        slug: "modis-viirs",
        title: "MODIS & VIIRS",
        subtitle: "Atmosphere & Aerosols",
        section: CatalogSection::DataExplorer,
        video_url: Some("https://youtu.be/xx-0pMlleTM?si=Q0ioBySz_199FsKJ"),
    },
    StaticEntry {
        slug: "landsat",
        title: "Landsat",
        subtitle: "Land & Vegetation",
        section: CatalogSection::DataExplorer,
        video_url: None,
    },
    StaticEntry {
        slug: "icesat2-grace-fo",
        title: "ICESat-2 & GRACE-FO",
        subtitle: "Ice & Water Dynamics",
        section: CatalogSection::DataExplorer,
        video_url: Some("https://www.youtube.com/watch?v=_vqOraF15aQ"),
    },
    StaticEntry {
        slug: "breathing-ocean",
        title: "The Breathing Ocean",
        subtitle: "PACE: Plankton, Aerosol, Cloud, ocean Ecosystem",
        section: CatalogSection::Story,
        video_url: Some("https://www.youtube.com/embed/JyjjiEQq6uI?si=P84C85U7NSg8xqWH"),
    },
    StaticEntry {
        slug: "currents-of-change",
        title: "Currents of Change",
        subtitle: "SWOT: Surface Water and Ocean Topography",
        section: CatalogSection::Story,
        video_url: Some("https://www.youtube.com/embed/fi4qY7Z5ZKo?si=rrVZOfiX4EeLIVDr"),
    },
    StaticEntry {
        slug: "frozen-signals",
        title: "Frozen Signals",
        subtitle: "ICESat-2 & GRACE-FO: Ice and Gravity",
        section: CatalogSection::Story,
        video_url: Some("https://www.youtube.com/embed/OQg5ov6zths?si=OBA94LLJxwhY5sro"),
    },
    StaticEntry {
        slug: "vr-experience",
        title: "Enter VR Experience",
        subtitle: "Immerse Yourself",
        section: CatalogSection::VrPreview,
        video_url: Some(
            "https://www.youtube.com/embed/Lp_AclAXXb4?si=g3ok7U8iHqRYTFz_&start=100\
             &modestbranding=1&controls=1&rel=0&showinfo=0&iv_load_policy=3",
        ),
    },
    StaticEntry {
        slug: "vr-360",
        title: "View 360° Version",
        subtitle: "Immerse Yourself",
        section: CatalogSection::VrPreview,
        video_url: Some("https://www.youtube.com/embed/hEdzv7D4CbQ?si=NrI7kk31nPHbFdfh&start=100"),
    },
    StaticEntry {
        slug: "glacier-trailer",
        title: "Watch Trailer",
        subtitle: "Immerse Yourself",
        section: CatalogSection::VrPreview,
        video_url: Some("/src/components/Glaciervideo.mp4"),
    },
];

impl StaticEntry {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            slug: self.slug.to_string(),
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            section: self.section,
            video_url: self.video_url.map(str::to_string),
        }
    }
}

/// All entries in page order.
pub fn entries() -> Vec<CatalogEntry> {
    ENTRIES.iter().map(StaticEntry::to_entry).collect()
}

/// Entries of one page section.
pub fn entries_in(section: CatalogSection) -> Vec<CatalogEntry> {
    ENTRIES
        .iter()
        .filter(|e| e.section == section)
        .map(StaticEntry::to_entry)
        .collect()
}

/// Look up an entry by slug.
pub fn find(slug: &str) -> Option<CatalogEntry> {
    ENTRIES
        .iter()
        .find(|e| e.slug == slug)
        .map(StaticEntry::to_entry)
}
