//! Kargo Rates - Shipping Rate & Recommendation Engine
//!
//! Converts package dimensions and scale weight into the chargeable
//! weight carriers actually bill, prices it against tiered carrier
//! tariffs and recommends the cheapest service. Every function is pure
//! and synchronous: same input, same quote, no I/O.
//!
//! ## Features
//! - Volumetric and chargeable weight calculation
//! - Tiered tariff tables with fuel and remote-area surcharges
//! - Cheapest-service recommendation with deterministic tie-breaks
//! - Tariff tables as external configuration data

use thiserror::Error;

pub mod domain;
pub mod engine;
pub mod tariff;

pub use domain::{
    Carrier, DeliveryWindow, Dimensions, Money, Package, PriceComponents, QuoteOptions,
    ShippingQuote, DEFAULT_VOLUMETRIC_DIVISOR,
};
pub use engine::RateEngine;
pub use tariff::{CarrierTariff, RateTable};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("No carrier tariffs registered")]
    NoCarriersRegistered,

    #[error("Unsupported carrier: {0}")]
    UnsupportedCarrier(String),

    #[error("Invalid tariff table: {0}")]
    InvalidTariff(String),
}

pub type Result<T> = std::result::Result<T, ShippingError>;

/// Quotes every carrier in the default registry (Sürat first, then the
/// DHL placeholder) and returns the cheapest service.
pub fn recommend_cheapest_service(package: &Package, options: &QuoteOptions) -> Result<ShippingQuote> {
    RateEngine::default().recommend(package, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_recommend_standard_package() {
        let package = Package::new(2.0, Dimensions::new(30.0, 20.0, 10.0));
        let quote = recommend_cheapest_service(&package, &QuoteOptions::new()).unwrap();
        assert_eq!(quote.carrier, Carrier::Surat);
        assert_eq!(quote.service_code, "STD");
        assert_eq!(quote.service_name, "Sürat Standart");
        assert_eq!(quote.currency, "TRY");
        assert!(quote.total.amount() > Decimal::ZERO);
    }

    #[test]
    fn test_remote_area_request() {
        let package = Package::new(1.0, Dimensions::new(25.0, 15.0, 8.0));
        let options = QuoteOptions::new().with_remote_area(true);
        let quote = recommend_cheapest_service(&package, &options).unwrap();
        assert_eq!(quote.carrier, Carrier::Surat);
        assert_eq!(quote.components.remote_area.as_ref().unwrap().amount(), Decimal::new(25, 0));
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let package = Package::new(0.5, Dimensions::new(50.0, 40.0, 30.0));
        let options = QuoteOptions::new().with_remote_area(true);
        let first = recommend_cheapest_service(&package, &options).unwrap();
        let second = recommend_cheapest_service(&package, &options).unwrap();
        assert_eq!(first, second);
    }
}
