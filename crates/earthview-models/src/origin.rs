//! Origin of the page that hosts the video player.

use std::fmt;

use thiserror::Error;
use url::{Origin, Url};

pub type OriginResult<T> = Result<T, OriginError>;

/// Errors that can occur while parsing an application origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    #[error("Invalid origin URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("Origin has no host: {0}")]
    Opaque(String),

    #[error("Unsupported origin scheme: {0}")]
    UnsupportedScheme(String),
}

/// Scheme, host and non-default port of the consuming application,
/// e.g. `http://localhost:8080`.
///
/// YouTube only lets an embed autoplay and accept JS API messages when the
/// `origin` parameter matches the embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppOrigin(String);

impl AppOrigin {
    /// Parse any absolute http(s) URL and keep only its origin.
    ///
    /// # Example
    /// ```
    /// use earthview_models::AppOrigin;
    ///
    /// let origin = AppOrigin::parse("https://earth.example.org:443/explore").unwrap();
    /// assert_eq!(origin.as_str(), "https://earth.example.org");
    /// ```
    pub fn parse(input: &str) -> OriginResult<Self> {
        let url = Url::parse(input.trim())?;

        match url.origin() {
            Origin::Opaque(_) => Err(OriginError::Opaque(input.to_string())),
            origin @ Origin::Tuple(..) => match url.scheme() {
                "http" | "https" => Ok(Self(origin.ascii_serialization())),
                other => Err(OriginError::UnsupportedScheme(other.to_string())),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AppOrigin {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for AppOrigin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
