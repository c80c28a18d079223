mod catalog;
mod types;

pub(crate) use catalog::{model_pricing, text_unit_prices};
pub(crate) use types::{Modality, Model, ModelPricing, PriceEntry, SizeTier, UnitPrices};
