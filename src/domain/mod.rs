//! Domain model
pub mod package;
pub mod quote;
pub mod value_objects;

pub use package::{Package, QuoteOptions, DEFAULT_PARCEL_DIMENSIONS_CM, DEFAULT_VOLUMETRIC_DIVISOR};
pub use quote::{Carrier, PriceComponents, ShippingQuote};
pub use value_objects::{DeliveryWindow, Dimensions, Money, MoneyError};
