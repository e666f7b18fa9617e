//! DHL domestic express placeholder
//!
//! DHL only quotes us internationally today. Until real domestic
//! contract rates exist, this service is derived from the Sürat quote
//! by fixed multipliers so the selector has a second total to compare.
//! The multipliers are not a business rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::domain::{Carrier, DeliveryWindow, Package, PriceComponents, QuoteOptions, ShippingQuote};
use super::{CarrierTariff, SuratStandard};

/// Multipliers applied to the reference quote. The total is scaled
/// independently of the components, so the derived total is not their
/// sum; that mirrors the placeholder data this stands in for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedMultipliers {
    pub base: Decimal,
    pub fuel: Decimal,
    pub total: Decimal,
}

impl Default for DerivedMultipliers {
    fn default() -> Self {
        Self {
            base: Decimal::new(16, 1),
            fuel: Decimal::new(12, 1),
            total: Decimal::new(18, 1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DhlDomesticExpress {
    reference: SuratStandard,
    multipliers: DerivedMultipliers,
    eta_days: DeliveryWindow,
}

impl DhlDomesticExpress {
    pub fn new(reference: SuratStandard, multipliers: DerivedMultipliers) -> Self {
        Self { reference, multipliers, eta_days: DeliveryWindow::new(1, 2) }
    }
}

impl Default for DhlDomesticExpress {
    fn default() -> Self { Self::new(SuratStandard::default(), DerivedMultipliers::default()) }
}

impl CarrierTariff for DhlDomesticExpress {
    fn carrier(&self) -> Carrier { Carrier::Dhl }

    fn quote(&self, package: &Package, options: &QuoteOptions) -> ShippingQuote {
        let reference = self.reference.quote(package, options);
        let base = reference.components.base.scale(self.multipliers.base).round_to_cents();
        let fuel = reference
            .components
            .fuel
            .as_ref()
            .map(|f| f.scale(self.multipliers.fuel).round_to_cents());
        // The remote-area fee reaches this total only through the
        // reference total; it is never itemized as a DHL component.
        let total = reference.total.scale(self.multipliers.total).round_to_cents();
        ShippingQuote {
            carrier: Carrier::Dhl,
            service_code: "DOM-EXP".into(),
            service_name: "DHL Domestic Express (placeholder)".into(),
            currency: reference.currency.clone(),
            total,
            components: PriceComponents { base, fuel, remote_area: None },
            eta_days: Some(self.eta_days),
        }
    }
}
