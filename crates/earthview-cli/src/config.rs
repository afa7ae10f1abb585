//! CLI configuration.

/// Origin of the local dev server the site is usually previewed on.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Origin passed to embedded players
    pub origin: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            origin: lookup("EARTHVIEW_ORIGIN")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|v| {
                    if v.to_lowercase() == "json" {
                        LogFormat::Json
                    } else {
                        LogFormat::Text
                    }
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("EARTHVIEW_ORIGIN", " https://earth.example.org "),
            ("LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.origin, "https://earth.example.org");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_origin_uses_default() {
        let config = CliConfig::from_lookup(lookup_from(&[("EARTHVIEW_ORIGIN", "  ")]));
        assert_eq!(config.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_unknown_log_format_is_text() {
        let config = CliConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "pretty")]));
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
