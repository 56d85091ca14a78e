//! Currency conversion over the ECB daily reference rates.
//!
//! Every call fetches the published rate table, indexes it by
//! (date, currency) and converts through the Euro.

pub mod core;
pub mod providers;

pub use crate::core::{
    ConversionError, ConverterConfig, Error, FetchError, REFERENCE_CURRENCY, RateFeed,
    RateProvider, RateStore, Side, convert,
};

use crate::providers::EcbProvider;
use tracing::debug;

/// Converts `amount` from one currency to another at the ECB rates for `date`.
///
/// Uses the default configuration, i.e. the live 90 day history feed.
pub async fn convert_currency(
    amount: f64,
    from: &str,
    to: &str,
    date: &str,
) -> Result<f64, Error> {
    convert_currency_with(&ConverterConfig::default(), amount, from, to, date).await
}

pub async fn convert_currency_with(
    config: &ConverterConfig,
    amount: f64,
    from: &str,
    to: &str,
    date: &str,
) -> Result<f64, Error> {
    let provider = EcbProvider::from_config(config);
    convert_with_provider(&provider, amount, from, to, date).await
}

/// Fetches a fresh rate table from `provider` and converts against it.
///
/// The fetch always happens first, so input validation errors only surface
/// once the rates were retrieved.
pub async fn convert_with_provider<P>(
    provider: &P,
    amount: f64,
    from: &str,
    to: &str,
    date: &str,
) -> Result<f64, Error>
where
    P: RateProvider + ?Sized,
{
    let mut store = RateStore::new();
    provider.fetch(&mut store).await?;
    debug!(rates = store.len(), %from, %to, %date, "Converting");

    Ok(convert(amount, from, to, date, &store)?)
}

/// Blocking variant of [`convert_currency_with`].
///
/// Runs on a private current-thread runtime, so it must not be called from
/// within an async context.
pub fn convert_currency_blocking(
    config: &ConverterConfig,
    amount: f64,
    from: &str,
    to: &str,
    date: &str,
) -> Result<f64, Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(convert_currency_with(config, amount, from, to, date))
}
