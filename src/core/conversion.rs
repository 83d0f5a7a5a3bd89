//! Price-ratio conversion between two tokens.
//!
//! Amounts are computed in full `f64` precision. Anything shown to a user goes
//! through [`round_display`], which rounds to [`DISPLAY_DECIMALS`] places with
//! ties going away from zero. Ties are judged on the shortest decimal form of
//! the float (`1.00005` rounds up to `1.0001`), not on its exact binary value.

use crate::core::error::ExchangeError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

pub const DISPLAY_DECIMALS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    pub destination_amount: f64,
    pub rounded_display_value: f64,
}

impl ConversionResult {
    fn from_amount(destination_amount: f64) -> Self {
        Self {
            destination_amount,
            rounded_display_value: round_display(destination_amount),
        }
    }
}

fn check_price(price: f64, what: &str) -> Result<(), ExchangeError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(ExchangeError::InvalidPrice(format!("{what} price {price}")))
    }
}

/// Converts `amount` as `amount * source_price / destination_price`, evaluated
/// left to right, refusing prices that would yield a non-finite result. Equal
/// prices return `amount` unchanged.
pub fn convert(
    amount: f64,
    source_price: f64,
    destination_price: f64,
) -> Result<ConversionResult, ExchangeError> {
    check_price(source_price, "source")?;
    check_price(destination_price, "destination")?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ExchangeError::InvalidAmount(amount.to_string()));
    }

    let destination_amount = if source_price == destination_price {
        amount
    } else {
        amount * source_price / destination_price
    };
    if !destination_amount.is_finite() {
        return Err(ExchangeError::InvalidPrice(format!(
            "{amount} * {source_price} / {destination_price} overflows"
        )));
    }
    Ok(ConversionResult::from_amount(destination_amount))
}

/// Best-effort variant for live previews: any unusable input shows as 0.
pub fn preview(amount: Option<f64>, source_price: f64, destination_price: f64) -> f64 {
    match amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => {
            convert(amount, source_price, destination_price)
                .map_or(0.0, |result| result.rounded_display_value)
        }
        _ => 0.0,
    }
}

pub fn round_display(value: f64) -> f64 {
    if !value.is_finite() || value.abs() < 1e-9 {
        return 0.0;
    }
    // Shortest round-trip text keeps ties like 1.00005 intact.
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // Beyond Decimal's range every f64 is already integral.
        Err(_) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_prices_are_identity() {
        for (amount, price) in [(1.0, 1.0), (3.25, 2000.0), (0.0001, 0.5), (12345.678, 1e-6)] {
            let result = convert(amount, price, price).unwrap();
            assert_eq!(result.destination_amount, amount);
        }
    }

    #[test]
    fn test_formula_is_exact_before_rounding() {
        let cases = [
            (1.0, 2000.0, 1.0),
            (2.5, 0.2081, 1545.6),
            (7.0, 3.0, 11.0),
            (3.0, 0.1, 0.3),
        ];
        for (amount, source, destination) in cases {
            let result = convert(amount, source, destination).unwrap();
            assert_eq!(result.destination_amount, amount * source / destination);
        }
        assert_eq!(convert(1.0, 2000.0, 1.0).unwrap().destination_amount, 2000.0);
        // Multiplying first differs from applying the ratio in the last bit here.
        assert_eq!(
            convert(3.0, 0.1, 0.3).unwrap().destination_amount,
            1.0000000000000002
        );
    }

    #[test]
    fn test_zero_or_non_finite_prices_fail() {
        assert!(matches!(
            convert(1.0, 1.0, 0.0),
            Err(ExchangeError::InvalidPrice(_))
        ));
        assert!(matches!(
            convert(1.0, f64::NAN, 1.0),
            Err(ExchangeError::InvalidPrice(_))
        ));
        assert!(matches!(
            convert(1.0, 1.0, f64::INFINITY),
            Err(ExchangeError::InvalidPrice(_))
        ));
        assert!(matches!(
            convert(1.0, -2.0, 1.0),
            Err(ExchangeError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_overflowing_ratio_fails() {
        assert!(matches!(
            convert(f64::MAX, f64::MAX, 1e-300),
            Err(ExchangeError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_rounding_ties_go_away_from_zero() {
        assert_eq!(round_display(1.00005), 1.0001);
        assert_eq!(round_display(2.00015), 2.0002);
        assert_eq!(round_display(0.00005), 0.0001);
        assert_eq!(round_display(-1.00005), -1.0001);
        assert_eq!(round_display(1.00004), 1.0);
        assert_eq!(round_display(1.000049999), 1.0);
    }

    #[test]
    fn test_rounding_is_idempotent_and_bounded() {
        for value in [0.123456789, 2000.0, 1.0 / 3.0, 98765.43215, 1e-9] {
            let once = round_display(value);
            assert_eq!(round_display(once), once);
            let text = once.to_string();
            let decimals = text.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 4, "{text} has more than 4 decimals");
        }
    }

    #[test]
    fn test_preview_falls_back_to_zero() {
        assert_eq!(preview(None, 2000.0, 1.0), 0.0);
        assert_eq!(preview(Some(f64::NAN), 2000.0, 1.0), 0.0);
        assert_eq!(preview(Some(-1.0), 2000.0, 1.0), 0.0);
        assert_eq!(preview(Some(1.0), 2000.0, 0.0), 0.0);
        assert_eq!(preview(Some(1.0), 2000.0, 3.0), 666.6667);
    }

    #[test]
    fn test_value_is_conserved() {
        let (amount, source, destination) = (3.7, 1645.93, 0.0334);
        let result = convert(amount, source, destination).unwrap();
        let relative = (amount * source - result.destination_amount * destination).abs()
            / (amount * source);
        assert!(relative < 1e-12);
    }
}
