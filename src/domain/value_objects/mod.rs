//! Value Objects for shipping rate calculation

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money value object
///
/// Amounts stay decimal end to end and are rounded to 2 places only at
/// the pricing boundaries, half away from zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money { amount: Decimal, currency: String }

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self { Self { amount, currency: currency.to_string() } }
    pub fn lira(amount: Decimal) -> Self { Self::new(amount, "TRY") }
    pub fn zero(currency: &str) -> Self { Self::new(Decimal::ZERO, currency) }
    pub fn amount(&self) -> Decimal { self.amount }
    pub fn currency(&self) -> &str { &self.currency }
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency { return Err(MoneyError::CurrencyMismatch); }
        Ok(Money::new(self.amount + other.amount, &self.currency))
    }
    pub fn scale(&self, factor: Decimal) -> Money { Money::new(self.amount * factor, &self.currency) }
    pub fn round_to_cents(&self) -> Money {
        Money::new(self.amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero), &self.currency)
    }
}

#[derive(Debug, Clone)] pub enum MoneyError { CurrencyMismatch }
impl std::error::Error for MoneyError {}
impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Currency mismatch") }
}

/// Package dimensions in centimeters.
///
/// A zero or negative axis means "no usable volumetric data": the
/// volumetric weight degenerates to 0 and the actual weight decides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(length: f64, width: f64, height: f64) -> Self { Self { length, width, height } }

    /// Volumetric weight in kg: `L x W x H / divisor`, rounded to 3 places.
    pub fn volumetric_weight_kg(&self, divisor: f64) -> f64 {
        if !(self.length > 0.0 && self.width > 0.0 && self.height > 0.0) { return 0.0; }
        if !(divisor > 0.0) { return 0.0; }
        round_to_grams(self.length * self.width * self.height / divisor)
    }
}

fn round_to_grams(kg: f64) -> f64 { (kg * 1000.0).round() / 1000.0 }

/// Estimated delivery window in days, `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow { pub min_days: u32, pub max_days: u32 }

impl DeliveryWindow {
    pub fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days: min_days.min(max_days), max_days: min_days.max(max_days) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_add() {
        let a = Money::lira(Decimal::new(100, 0));
        let b = Money::lira(Decimal::new(50, 0));
        assert_eq!(a.add(&b).unwrap().amount(), Decimal::new(150, 0));
    }

    #[test]
    fn test_money_add_currency_mismatch() {
        let a = Money::lira(Decimal::new(100, 0));
        let b = Money::new(Decimal::new(100, 0), "EUR");
        assert!(a.add(&b).is_err());
    }

    #[test]
    fn test_money_scale_and_round() {
        // 59 * 0.08 = 4.72
        let fuel = Money::lira(Decimal::new(59, 0)).scale(Decimal::new(8, 2)).round_to_cents();
        assert_eq!(fuel.amount(), Decimal::new(472, 2));
        // Midpoints round away from zero
        let m = Money::lira(Decimal::new(1005, 3)).round_to_cents();
        assert_eq!(m.amount(), Decimal::new(101, 2));
    }

    #[test]
    fn test_volumetric_weight() {
        assert_eq!(Dimensions::new(30.0, 20.0, 10.0).volumetric_weight_kg(5000.0), 1.2);
        assert_eq!(Dimensions::new(50.0, 40.0, 30.0).volumetric_weight_kg(5000.0), 12.0);
        assert_eq!(Dimensions::new(30.0, 20.0, 10.0).volumetric_weight_kg(6000.0), 1.0);
    }

    #[test]
    fn test_volumetric_weight_degenerate_axes() {
        assert_eq!(Dimensions::new(0.0, 0.0, 0.0).volumetric_weight_kg(5000.0), 0.0);
        assert_eq!(Dimensions::new(30.0, -20.0, 10.0).volumetric_weight_kg(5000.0), 0.0);
        assert_eq!(Dimensions::new(30.0, f64::NAN, 10.0).volumetric_weight_kg(5000.0), 0.0);
    }

    #[test]
    fn test_volumetric_weight_rounded_to_grams() {
        // 10.5 * 10.5 * 9 / 5000 = 0.19845
        assert_eq!(Dimensions::new(10.5, 10.5, 9.0).volumetric_weight_kg(5000.0), 0.198);
    }

    #[test]
    fn test_delivery_window_normalizes() {
        let w = DeliveryWindow::new(3, 1);
        assert_eq!((w.min_days, w.max_days), (1, 3));
    }
}
