//! Error types returned by the fetch and conversion steps

use std::fmt;
use thiserror::Error;

/// Failures while obtaining the published rate table.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to GET currency data from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode rate document: {0}")]
    Parse(String),
}

impl From<quick_xml::de::DeError> for FetchError {
    fn from(err: quick_xml::de::DeError) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Which leg of a conversion could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("trying to convert negative value: {0}")]
    NegativeValue(f64),

    #[error("invalid date or currency to convert {side}: no rate for {currency} on {date}")]
    UnknownRate {
        side: Side,
        date: String,
        currency: String,
    },
}

/// Crate level error for the conversion entry points.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rate_message_names_side() {
        let from = ConversionError::UnknownRate {
            side: Side::From,
            date: "2020-06-08".to_string(),
            currency: "dollars".to_string(),
        };
        let to = ConversionError::UnknownRate {
            side: Side::To,
            date: "2020-06-08".to_string(),
            currency: "francs".to_string(),
        };

        assert_eq!(
            from.to_string(),
            "invalid date or currency to convert from: no rate for dollars on 2020-06-08"
        );
        assert_eq!(
            to.to_string(),
            "invalid date or currency to convert to: no rate for francs on 2020-06-08"
        );
    }

    #[test]
    fn test_crate_error_is_transparent() {
        let err: Error = ConversionError::NegativeValue(-1.5).into();
        assert_eq!(err.to_string(), "trying to convert negative value: -1.5");
        assert!(matches!(
            err,
            Error::Conversion(ConversionError::NegativeValue(_))
        ));

        let err: Error = FetchError::Parse("bad".to_string()).into();
        assert_eq!(err.to_string(), "failed to decode rate document: bad");
    }
}
