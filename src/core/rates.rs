//! In-memory index of reference rates keyed by (date, currency)

use std::collections::HashMap;

/// Currency every stored rate is expressed against.
pub const REFERENCE_CURRENCY: &str = "EUR";

/// Composite lookup key: ISO date (`YYYY-MM-DD`) and currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateKey {
    pub date: String,
    pub currency: String,
}

impl RateKey {
    pub fn new(date: impl Into<String>, currency: impl Into<String>) -> Self {
        RateKey {
            date: date.into(),
            currency: currency.into(),
        }
    }
}

/// Units of `currency` worth one unit of [`REFERENCE_CURRENCY`] on `date`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateStore {
    rates: HashMap<RateKey, f64>,
}

impl RateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rate, replacing any previous value for the same key.
    pub fn insert(&mut self, date: impl Into<String>, currency: impl Into<String>, rate: f64) {
        self.rates.insert(RateKey::new(date, currency), rate);
    }

    pub fn get(&self, date: &str, currency: &str) -> Option<f64> {
        self.rates.get(&RateKey::new(date, currency)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RateKey, f64)> {
        self.rates.iter().map(|(key, rate)| (key, *rate))
    }
}

impl FromIterator<(RateKey, f64)> for RateStore {
    fn from_iter<I: IntoIterator<Item = (RateKey, f64)>>(iter: I) -> Self {
        RateStore {
            rates: iter.into_iter().collect(),
        }
    }
}
