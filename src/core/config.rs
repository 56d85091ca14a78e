use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref";

/// Published ECB reference rate files.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateFeed {
    /// Latest business day only
    Daily,
    /// Last 90 days
    #[default]
    NinetyDays,
    /// Every business day since 1999
    History,
}

impl RateFeed {
    pub fn file_name(&self) -> &'static str {
        match self {
            RateFeed::Daily => "eurofxref-daily.xml",
            RateFeed::NinetyDays => "eurofxref-hist-90d.xml",
            RateFeed::History => "eurofxref-hist.xml",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EcbProviderConfig {
    pub base_url: String,
    pub feed: RateFeed,
}

impl Default for EcbProviderConfig {
    fn default() -> Self {
        EcbProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            feed: RateFeed::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    pub provider: EcbProviderConfig,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            provider: EcbProviderConfig::default(),
            timeout_secs: 30,
            user_agent: concat!("convertcurrency/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse converter config")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.feed, RateFeed::NinetyDays);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("convertcurrency/"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/ecb"
  feed: "history"
timeout_secs: 5
"#;

        let config = ConverterConfig::from_yaml_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/ecb");
        assert_eq!(config.provider.feed, RateFeed::History);
        assert_eq!(config.timeout_secs, 5);
        // Missing keys fall back to defaults
        assert_eq!(config.user_agent, ConverterConfig::default().user_agent);

        let partial = ConverterConfig::from_yaml_str("provider:\n  feed: daily\n").unwrap();
        assert_eq!(partial.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(partial.provider.feed, RateFeed::Daily);
    }

    #[test]
    fn test_config_rejects_unknown_feed() {
        let err = ConverterConfig::from_yaml_str("provider:\n  feed: weekly\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse converter config"));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 12\nuser_agent: \"tests/1.0\"").unwrap();

        let config = ConverterConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.user_agent, "tests/1.0");
        assert_eq!(config.provider, EcbProviderConfig::default());
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.yaml");

        let err = ConverterConfig::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_feed_file_names() {
        assert_eq!(RateFeed::Daily.file_name(), "eurofxref-daily.xml");
        assert_eq!(RateFeed::NinetyDays.file_name(), "eurofxref-hist-90d.xml");
        assert_eq!(RateFeed::History.file_name(), "eurofxref-hist.xml");
    }
}
