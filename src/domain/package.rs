//! Shipment package and quote options

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::Dimensions;

/// Divisor for domestic ground services, in cm³ per kg.
pub const DEFAULT_VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Fallback weight per cart item when product weights are unknown.
pub const ESTIMATED_ITEM_WEIGHT_KG: f64 = 0.5;
/// A parcel never estimates below 1 kg.
pub const MIN_ESTIMATED_PARCEL_WEIGHT_KG: f64 = 1.0;
/// Default parcel box used for cart-level estimates.
pub const DEFAULT_PARCEL_DIMENSIONS_CM: Dimensions = Dimensions::new(30.0, 20.0, 10.0);

/// The physical shipment: scale weight plus box dimensions.
///
/// Malformed physical input never fails a quote. A missing weight
/// deserializes to 0 and negative or non-finite weights are clamped to
/// 0, leaving the volumetric weight to decide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default)]
    pub actual_weight_kg: f64,
    #[serde(default)]
    pub dimensions_cm: Dimensions,
}

impl Package {
    pub fn new(actual_weight_kg: f64, dimensions_cm: Dimensions) -> Self {
        Self { actual_weight_kg, dimensions_cm }
    }

    /// Single-parcel estimate for a cart of `item_count` items.
    pub fn estimate_for_cart(item_count: u32) -> Self {
        let weight = (item_count as f64 * ESTIMATED_ITEM_WEIGHT_KG).max(MIN_ESTIMATED_PARCEL_WEIGHT_KG);
        Self::new(weight, DEFAULT_PARCEL_DIMENSIONS_CM)
    }

    /// The weight a carrier bills: the greater of actual and volumetric.
    pub fn chargeable_weight_kg(&self) -> f64 {
        let volumetric = self.dimensions_cm.volumetric_weight_kg(DEFAULT_VOLUMETRIC_DIVISOR);
        self.actual_weight_kg.max(0.0).max(volumetric)
    }
}

/// Optional price modifiers. New flags default off so existing call
/// sites keep working when one is added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteOptions {
    /// Destination is classified as hard-to-reach (rural delivery fee).
    #[serde(default)]
    pub remote_area: bool,
}

impl QuoteOptions {
    pub fn new() -> Self { Self::default() }
    pub fn with_remote_area(mut self, remote_area: bool) -> Self { self.remote_area = remote_area; self }
}
