//! Cheapest-service selection over registered carrier tariffs

use crate::domain::{Carrier, Package, QuoteOptions, ShippingQuote};
use crate::tariff::{CarrierTariff, DhlDomesticExpress, SuratStandard};
use crate::{Result, ShippingError};

/// Ordered registry of carrier tariffs. Registration order is the
/// priority order: on an exact price tie the earlier carrier wins, so
/// selection never depends on iteration over an unordered collection.
pub struct RateEngine {
    carriers: Vec<Box<dyn CarrierTariff>>,
}

impl RateEngine {
    pub fn with_carriers(carriers: Vec<Box<dyn CarrierTariff>>) -> Self {
        Self { carriers }
    }

    /// Appends a carrier at the lowest priority.
    pub fn register(&mut self, tariff: Box<dyn CarrierTariff>) {
        self.carriers.push(tariff);
    }

    pub fn carriers(&self) -> Vec<Carrier> {
        self.carriers.iter().map(|c| c.carrier()).collect()
    }

    /// Quotes every registered carrier with the same inputs.
    pub fn quote_all(&self, package: &Package, options: &QuoteOptions) -> Vec<ShippingQuote> {
        self.carriers.iter().map(|c| c.quote(package, options)).collect()
    }

    /// Quote for one specific carrier; asking for an unregistered
    /// carrier is a configuration error, not bad runtime data.
    pub fn quote_for(&self, carrier: Carrier, package: &Package, options: &QuoteOptions) -> Result<ShippingQuote> {
        self.carriers
            .iter()
            .find(|c| c.carrier() == carrier)
            .map(|c| c.quote(package, options))
            .ok_or_else(|| ShippingError::UnsupportedCarrier(carrier.to_string()))
    }

    /// The lowest-total quote. Strict `<` keeps the earlier-registered
    /// carrier on ties.
    pub fn recommend(&self, package: &Package, options: &QuoteOptions) -> Result<ShippingQuote> {
        self.quote_all(package, options)
            .into_iter()
            .reduce(|best, quote| if quote.total.amount() < best.total.amount() { quote } else { best })
            .ok_or(ShippingError::NoCarriersRegistered)
    }
}

impl Default for RateEngine {
    /// Sürat first: the domestic carrier takes price ties.
    fn default() -> Self {
        Self::with_carriers(vec![
            Box::new(SuratStandard::default()),
            Box::new(DhlDomesticExpress::default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryWindow, Dimensions, Money, PriceComponents};
    use rust_decimal::Decimal;

    struct FixedTariff {
        carrier: Carrier,
        total: Decimal,
    }

    impl CarrierTariff for FixedTariff {
        fn carrier(&self) -> Carrier { self.carrier }
        fn quote(&self, _package: &Package, _options: &QuoteOptions) -> ShippingQuote {
            ShippingQuote {
                carrier: self.carrier,
                service_code: "FIX".into(),
                service_name: format!("{} Fixed", self.carrier),
                currency: "TRY".into(),
                total: Money::lira(self.total),
                components: PriceComponents { base: Money::lira(self.total), fuel: None, remote_area: None },
                eta_days: Some(DeliveryWindow::new(1, 1)),
            }
        }
    }

    fn pkg() -> Package {
        Package::new(2.0, Dimensions::new(30.0, 20.0, 10.0))
    }

    #[test]
    fn test_recommends_domestic_carrier_for_standard_package() {
        let quote = RateEngine::default().recommend(&pkg(), &QuoteOptions::new()).unwrap();
        assert_eq!(quote.carrier, Carrier::Surat);
        assert_eq!(quote.total.amount(), Decimal::new(7452, 2));
    }

    #[test]
    fn test_strictly_cheaper_carrier_wins() {
        let engine = RateEngine::with_carriers(vec![
            Box::new(FixedTariff { carrier: Carrier::Surat, total: Decimal::new(80, 0) }),
            Box::new(FixedTariff { carrier: Carrier::Dhl, total: Decimal::new(79, 0) }),
        ]);
        let quote = engine.recommend(&pkg(), &QuoteOptions::new()).unwrap();
        assert_eq!(quote.carrier, Carrier::Dhl);
    }

    #[test]
    fn test_ties_go_to_the_first_registered_carrier() {
        let engine = RateEngine::with_carriers(vec![
            Box::new(FixedTariff { carrier: Carrier::Surat, total: Decimal::new(80, 0) }),
            Box::new(FixedTariff { carrier: Carrier::Dhl, total: Decimal::new(80, 0) }),
        ]);
        for _ in 0..10 {
            let quote = engine.recommend(&pkg(), &QuoteOptions::new()).unwrap();
            assert_eq!(quote.carrier, Carrier::Surat);
        }
    }

    #[test]
    fn test_quote_all_keeps_registration_order() {
        let quotes = RateEngine::default().quote_all(&pkg(), &QuoteOptions::new());
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].carrier, Carrier::Surat);
        assert_eq!(quotes[1].carrier, Carrier::Dhl);
    }

    #[test]
    fn test_quote_for_unregistered_carrier_is_an_error() {
        let mut engine = RateEngine::with_carriers(vec![Box::new(SuratStandard::default())]);
        assert!(engine.quote_for(Carrier::Surat, &pkg(), &QuoteOptions::new()).is_ok());
        let err = engine.quote_for(Carrier::Dhl, &pkg(), &QuoteOptions::new()).unwrap_err();
        assert!(matches!(err, ShippingError::UnsupportedCarrier(_)));

        engine.register(Box::new(DhlDomesticExpress::default()));
        assert_eq!(engine.carriers(), vec![Carrier::Surat, Carrier::Dhl]);
        assert!(engine.quote_for(Carrier::Dhl, &pkg(), &QuoteOptions::new()).is_ok());
    }

    #[test]
    fn test_empty_registry_is_an_error() {
        let engine = RateEngine::with_carriers(vec![]);
        let err = engine.recommend(&pkg(), &QuoteOptions::new()).unwrap_err();
        assert!(matches!(err, ShippingError::NoCarriersRegistered));
    }
}
