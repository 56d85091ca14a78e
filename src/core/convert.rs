//! Two-hop conversion through the reference currency

use crate::core::error::{ConversionError, Side};
use crate::core::rates::{REFERENCE_CURRENCY, RateStore};

/// Converts `amount` from `from` to `to` using the rates recorded for `date`.
///
/// Non-reference currencies are first divided into reference units, then
/// multiplied out into the target. The result is rounded to cents, except
/// when `from == to`: identity conversions return `amount` untouched.
pub fn convert(
    amount: f64,
    from: &str,
    to: &str,
    date: &str,
    store: &RateStore,
) -> Result<f64, ConversionError> {
    if amount < 0.0 {
        return Err(ConversionError::NegativeValue(amount));
    }
    if from == to {
        return Ok(amount);
    }

    let mut value = amount;
    if from != REFERENCE_CURRENCY {
        value /= lookup(store, date, from, Side::From)?;
    }
    if to != REFERENCE_CURRENCY {
        value *= lookup(store, date, to, Side::To)?;
    }

    Ok(round_cents(value))
}

fn lookup(
    store: &RateStore,
    date: &str,
    currency: &str,
    side: Side,
) -> Result<f64, ConversionError> {
    store
        .get(date, currency)
        .ok_or_else(|| ConversionError::UnknownRate {
            side,
            date: date.to_string(),
            currency: currency.to_string(),
        })
}

// Half away from zero
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
