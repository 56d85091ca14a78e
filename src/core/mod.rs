//! Core conversion logic and shared types

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use config::{ConverterConfig, EcbProviderConfig, RateFeed};
pub use convert::convert;
pub use currency::RateProvider;
pub use error::{ConversionError, Error, FetchError, Side};
pub use rates::{REFERENCE_CURRENCY, RateKey, RateStore};
