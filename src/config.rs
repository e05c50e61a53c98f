//! Server-side site configuration read from the environment.
//!
//! Network settings (address, site root, reload port) come from Leptos'
//! own configuration; this only covers what the site adds on top.

use thiserror::Error;

pub const SCRIPT_SRC_VAR: &str = "PORTFOLIO_SCRIPT_SRC";
pub const SCRIPT_ZONE_VAR: &str = "PORTFOLIO_SCRIPT_ZONE";

/// A third-party script tag appended to every page's `<head>`.
///
/// Loaded asynchronously; the page never waits for or observes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdPartyScript {
    pub src: String,
    pub zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub third_party_script: Option<ThirdPartyScript>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORTFOLIO_SCRIPT_SRC must be an https:// URL, got {0:?}")]
    InsecureScriptSrc(String),
    #[error("PORTFOLIO_SCRIPT_ZONE is set but PORTFOLIO_SCRIPT_SRC is not")]
    ZoneWithoutSrc,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var| lookup(var).filter(|v: &String| !v.trim().is_empty());
        let src = non_empty(SCRIPT_SRC_VAR);
        let zone = non_empty(SCRIPT_ZONE_VAR);

        let third_party_script = match (src, zone) {
            (None, None) => None,
            (None, Some(_)) => return Err(ConfigError::ZoneWithoutSrc),
            (Some(src), _) if !src.starts_with("https://") => {
                return Err(ConfigError::InsecureScriptSrc(src))
            }
            (Some(src), zone) => Some(ThirdPartyScript { src, zone }),
        };
        Ok(Self { third_party_script })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(config(&[]), Ok(SiteConfig::default()));
        assert_eq!(config(&[(SCRIPT_SRC_VAR, "  ")]), Ok(SiteConfig::default()));
    }

    #[test]
    fn test_script_with_zone() {
        let cfg = config(&[
            (SCRIPT_SRC_VAR, "https://cdn.example.com/tag.min.js"),
            (SCRIPT_ZONE_VAR, "10614580"),
        ])
        .unwrap();
        assert_eq!(
            cfg.third_party_script,
            Some(ThirdPartyScript {
                src: "https://cdn.example.com/tag.min.js".to_string(),
                zone: Some("10614580".to_string()),
            })
        );
    }

    #[test]
    fn test_invalid_script_config() {
        assert_eq!(
            config(&[(SCRIPT_ZONE_VAR, "1")]),
            Err(ConfigError::ZoneWithoutSrc)
        );
        assert_eq!(
            config(&[(SCRIPT_SRC_VAR, "http://cdn.example.com/tag.js")]),
            Err(ConfigError::InsecureScriptSrc(
                "http://cdn.example.com/tag.js".to_string()
            ))
        );
    }
}
