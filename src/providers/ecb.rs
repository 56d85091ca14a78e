use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::config::{ConverterConfig, RateFeed};
use crate::core::currency::RateProvider;
use crate::core::error::FetchError;
use crate::core::rates::{RateKey, RateStore};

/// Reference rates published by the European Central Bank, quoted against EUR.
pub struct EcbProvider {
    base_url: String,
    feed: RateFeed,
    timeout: Duration,
    user_agent: String,
}

impl EcbProvider {
    pub fn new(base_url: &str, feed: RateFeed) -> Self {
        let defaults = ConverterConfig::default();
        EcbProvider {
            base_url: base_url.to_string(),
            feed,
            timeout: defaults.timeout(),
            user_agent: defaults.user_agent,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        EcbProvider {
            base_url: config.provider.base_url.clone(),
            feed: config.provider.feed,
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.feed.file_name()
        )
    }
}

// <gesmes:Envelope><Cube><Cube time=".."><Cube currency=".." rate=".."/>
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube")]
    cube: OuterCube,
}

#[derive(Debug, Deserialize)]
struct OuterCube {
    #[serde(rename = "Cube", default)]
    days: Vec<DayCube>,
}

#[derive(Debug, Deserialize)]
struct DayCube {
    #[serde(rename = "@time")]
    time: String,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize)]
struct RateCube {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate", deserialize_with = "trimmed_f64")]
    rate: f64,
}

// Attribute values may carry surrounding whitespace
fn trimmed_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

/// Decodes an ECB rate document into (key, rate) pairs.
///
/// Dates must be ISO calendar dates and rates positive; anything else fails
/// the whole document.
pub fn parse_rates(xml: &str) -> Result<Vec<(RateKey, f64)>, FetchError> {
    let envelope: Envelope = quick_xml::de::from_str(xml)?;

    let mut entries = Vec::new();
    for day in envelope.cube.days {
        let date = NaiveDate::parse_from_str(&day.time, "%Y-%m-%d").map_err(|e| {
            FetchError::Parse(format!("invalid date '{}': {}", day.time, e))
        })?;
        // chrono accepts unpadded fields, keys must be zero-padded
        if date.format("%Y-%m-%d").to_string() != day.time {
            return Err(FetchError::Parse(format!(
                "invalid date '{}': expected YYYY-MM-DD",
                day.time
            )));
        }

        for rate in day.rates {
            if !rate.rate.is_finite() || rate.rate <= 0.0 {
                return Err(FetchError::Parse(format!(
                    "invalid rate {} for {} on {}",
                    rate.rate, rate.currency, day.time
                )));
            }
            entries.push((RateKey::new(day.time.as_str(), rate.currency), rate.rate));
        }
    }
    Ok(entries)
}

#[async_trait]
impl RateProvider for EcbProvider {
    #[instrument(
        name = "EcbRateFetch",
        skip(self, store),
        fields(feed = ?self.feed)
    )]
    async fn fetch(&self, store: &mut RateStore) -> Result<(), FetchError> {
        let url = self.url();
        debug!("Requesting reference rates from {}", url);

        let network = |source: reqwest::Error| FetchError::Network {
            url: url.clone(),
            source,
        };

        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(network)?;
        let response = client.get(&url).send().await.map_err(network)?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                url: url.clone(),
                status: response.status(),
            });
        }

        let text = response.text().await.map_err(network)?;
        let entries = parse_rates(&text)?;
        debug!(count = entries.len(), "Decoded reference rates");

        for (key, rate) in entries {
            store.insert(key.date, key.currency, rate);
        }
        Ok(())
    }
}
