//! Sürat Kargo domestic standard service

use crate::domain::{Carrier, Money, Package, PriceComponents, QuoteOptions, ShippingQuote};
use super::{CarrierTariff, RateTable};

/// Domestic ground tariff: tiered base rate, 8% fuel surcharge and a
/// flat remote-area fee when the destination is hard to reach.
#[derive(Clone, Debug)]
pub struct SuratStandard {
    table: RateTable,
}

impl SuratStandard {
    pub fn new(table: RateTable) -> Self { Self { table } }
    pub fn table(&self) -> &RateTable { &self.table }
}

impl Default for SuratStandard {
    fn default() -> Self { Self::new(RateTable::surat_domestic()) }
}

impl CarrierTariff for SuratStandard {
    fn carrier(&self) -> Carrier { Carrier::Surat }

    fn quote(&self, package: &Package, options: &QuoteOptions) -> ShippingQuote {
        let table = &self.table;
        let base = table.base_rate(package.chargeable_weight_kg());
        let fuel = base.scale(table.fuel_rate).round_to_cents();
        let remote_area = options
            .remote_area
            .then(|| Money::new(table.remote_area_fee, &table.currency));
        let components = PriceComponents { base, fuel: Some(fuel), remote_area };
        let total = components.total();
        ShippingQuote {
            carrier: Carrier::Surat,
            service_code: table.service_code.clone(),
            service_name: table.service_name.clone(),
            currency: table.currency.clone(),
            total,
            components,
            eta_days: Some(table.eta_days),
        }
    }
}
