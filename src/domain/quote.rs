//! Shipping quote result types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::domain::value_objects::{DeliveryWindow, Money};
use crate::ShippingError;

/// Supported carriers, in wire form ("SURAT", "DHL").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Carrier { Surat, Dhl }

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Surat => "SURAT", Self::Dhl => "DHL" }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

impl FromStr for Carrier {
    type Err = ShippingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SURAT" => Ok(Self::Surat),
            "DHL" => Ok(Self::Dhl),
            other => Err(ShippingError::UnsupportedCarrier(other.to_string())),
        }
    }
}

/// Price breakdown. Absent surcharges are omitted, not zero, so
/// consumers can tell "not applicable" from "applied at zero cost".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceComponents {
    pub base: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_area: Option<Money>,
}

impl PriceComponents {
    /// Sum of all present components, rounded to currency precision.
    pub fn total(&self) -> Money {
        [&self.fuel, &self.remote_area]
            .into_iter()
            .flatten()
            .fold(self.base.clone(), |acc, part| acc.add(part).unwrap_or(acc))
            .round_to_cents()
    }
}

/// A priced carrier service offer for one package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub carrier: Carrier,
    pub service_code: String,
    pub service_name: String,
    pub currency: String,
    pub total: Money,
    pub components: PriceComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_days: Option<DeliveryWindow>,
}
