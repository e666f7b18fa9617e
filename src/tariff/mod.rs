//! Carrier tariff strategies
//!
//! Each carrier service is a [`CarrierTariff`] strategy; the tier
//! thresholds, surcharges and service metadata live in a [`RateTable`]
//! so real contract rates can be swapped in as configuration data
//! instead of code changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::domain::{Carrier, DeliveryWindow, Money, Package, QuoteOptions, ShippingQuote};
use crate::ShippingError;

pub mod dhl;
pub mod surat;

pub use dhl::{DerivedMultipliers, DhlDomesticExpress};
pub use surat::SuratStandard;

/// A named tariff strategy for one carrier service.
pub trait CarrierTariff: Send + Sync {
    fn carrier(&self) -> Carrier;
    fn quote(&self, package: &Package, options: &QuoteOptions) -> ShippingQuote;
}

/// One weight tier: chargeable weights up to `up_to_kg` inclusive bill `base`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub up_to_kg: f64,
    pub base: Decimal,
}

/// Tariff table for one carrier service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub service_code: String,
    pub service_name: String,
    pub currency: String,
    /// Ascending weight tiers.
    pub tiers: Vec<RateTier>,
    /// Charged per started kg above the last tier.
    pub overflow_per_kg: Decimal,
    /// Fraction of the base rate, e.g. 0.08 for 8%.
    pub fuel_rate: Decimal,
    /// Flat fee for hard-to-reach destinations.
    pub remote_area_fee: Decimal,
    pub eta_days: DeliveryWindow,
}

impl RateTable {
    /// Sürat Kargo domestic ground table (TRY). Placeholder until
    /// contract rates replace it.
    pub fn surat_domestic() -> Self {
        Self {
            service_code: "STD".into(),
            service_name: "Sürat Standart".into(),
            currency: "TRY".into(),
            tiers: vec![
                RateTier { up_to_kg: 1.0, base: Decimal::new(59, 0) },
                RateTier { up_to_kg: 2.0, base: Decimal::new(69, 0) },
                RateTier { up_to_kg: 3.0, base: Decimal::new(79, 0) },
            ],
            overflow_per_kg: Decimal::new(12, 0),
            fuel_rate: Decimal::new(8, 2),
            remote_area_fee: Decimal::new(25, 0),
            eta_days: DeliveryWindow::new(1, 3),
        }
    }

    /// Base rate for a chargeable weight, in this table's currency.
    pub fn base_rate(&self, chargeable_kg: f64) -> Money {
        for tier in &self.tiers {
            if chargeable_kg <= tier.up_to_kg {
                return Money::new(tier.base, &self.currency);
            }
        }
        match self.tiers.last() {
            Some(last) => {
                let started_kg = (chargeable_kg - last.up_to_kg).ceil().max(0.0) as i64;
                Money::new(last.base + Decimal::from(started_kg) * self.overflow_per_kg, &self.currency)
            }
            None => Money::zero(&self.currency),
        }
    }

    /// Sanity checks for tables loaded from external configuration.
    pub fn validate(&self) -> Result<(), ShippingError> {
        if self.tiers.is_empty() {
            return Err(ShippingError::InvalidTariff("tariff table has no weight tiers".into()));
        }
        for pair in self.tiers.windows(2) {
            if pair[1].up_to_kg <= pair[0].up_to_kg {
                return Err(ShippingError::InvalidTariff("weight tiers must be strictly ascending".into()));
            }
        }
        if self.tiers.iter().any(|t| t.base < Decimal::ZERO)
            || self.overflow_per_kg < Decimal::ZERO
            || self.fuel_rate < Decimal::ZERO
            || self.remote_area_fee < Decimal::ZERO
        {
            return Err(ShippingError::InvalidTariff("rates must be non-negative".into()));
        }
        Ok(())
    }
}
