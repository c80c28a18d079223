//! Static per-model price table (USD)

use tracing::debug;

use crate::error::ConfigurationError;

use super::types::{CachePricing, Modality, Model, ModelPricing, PriceEntry, SizeTier, UnitPrices};

const fn tiered(small: f64, large: f64) -> PriceEntry {
    PriceEntry::Tiered { small, large }
}

static GEMINI_15_FLASH: ModelPricing = ModelPricing {
    regular: &[
        (Modality::ImageInput, tiered(0.0001315, 0.000263)),
        (Modality::VideoInput, tiered(0.0001315, 0.000263)),
        (Modality::TextInput, tiered(0.000125, 0.00025)),
        (Modality::AudioInput, tiered(0.0000125, 0.000025)),
        (Modality::TextOutput, tiered(0.000375, 0.00075)),
    ],
    caching: Some(CachePricing {
        cached_input: &[
            (Modality::ImageInput, tiered(0.000032875, 0.00006575)),
            (Modality::VideoInput, tiered(0.000032875, 0.00006575)),
            (Modality::TextInput, tiered(0.00003125, 0.0000625)),
            (Modality::AudioInput, tiered(0.000003125, 0.00000625)),
        ],
        storage: &[
            (Modality::ImageInput, 0.000263),
            (Modality::VideoInput, 0.000263),
            (Modality::TextInput, 0.00025),
            (Modality::AudioInput, 0.000025),
        ],
    }),
};

static GEMINI_15_PRO: ModelPricing = ModelPricing {
    regular: &[
        (Modality::ImageInput, tiered(0.001315, 0.00263)),
        (Modality::VideoInput, tiered(0.001315, 0.00263)),
        (Modality::TextInput, tiered(0.00125, 0.0025)),
        (Modality::AudioInput, tiered(0.000125, 0.00025)),
        (Modality::TextOutput, tiered(0.00375, 0.0075)),
    ],
    caching: Some(CachePricing {
        cached_input: &[
            (Modality::ImageInput, tiered(0.00032875, 0.0006575)),
            (Modality::VideoInput, tiered(0.00032875, 0.0006575)),
            (Modality::TextInput, tiered(0.0003125, 0.000625)),
            (Modality::AudioInput, tiered(0.00003125, 0.0000625)),
        ],
        storage: &[
            (Modality::ImageInput, 0.0011835),
            (Modality::VideoInput, 0.0011835),
            (Modality::TextInput, 0.001125),
            (Modality::AudioInput, 0.0001125),
        ],
    }),
};

static GEMINI_10_PRO: ModelPricing = ModelPricing {
    regular: &[
        (Modality::ImageInput, PriceEntry::Flat(0.0025)),
        (Modality::VideoInput, PriceEntry::Flat(0.002)),
        (Modality::TextInput, PriceEntry::Flat(0.000125)),
        (Modality::TextOutput, PriceEntry::Flat(0.000375)),
    ],
    caching: None,
};

static GROUNDING_GOOGLE_SEARCH: ModelPricing = ModelPricing {
    regular: &[(Modality::GroundingRequests, PriceEntry::Flat(35.0))],
    caching: None,
};

pub(crate) fn model_pricing(model: Model) -> &'static ModelPricing {
    match model {
        Model::Gemini15Flash => &GEMINI_15_FLASH,
        Model::Gemini15Pro => &GEMINI_15_PRO,
        Model::Gemini10Pro => &GEMINI_10_PRO,
        Model::GroundingGoogleSearch => &GROUNDING_GOOGLE_SEARCH,
    }
}

fn find_row<T: Copy>(rows: &[(Modality, T)], modality: Modality) -> Option<T> {
    rows.iter()
        .find(|(m, _)| *m == modality)
        .map(|(_, value)| *value)
}

impl ModelPricing {
    pub(crate) fn supports_caching(&self) -> bool {
        self.caching.is_some()
    }

    pub(crate) fn regular_entry(
        &self,
        model: Model,
        modality: Modality,
    ) -> Result<PriceEntry, ConfigurationError> {
        find_row(self.regular, modality).ok_or(ConfigurationError::MissingPrice { model, modality })
    }

    pub(crate) fn cached_input_entry(
        &self,
        model: Model,
        modality: Modality,
    ) -> Result<PriceEntry, ConfigurationError> {
        let caching = self
            .caching
            .as_ref()
            .ok_or(ConfigurationError::CachingUnsupported { model })?;
        find_row(caching.cached_input, modality)
            .ok_or(ConfigurationError::MissingPrice { model, modality })
    }

    pub(crate) fn storage_price(
        &self,
        model: Model,
        modality: Modality,
    ) -> Result<f64, ConfigurationError> {
        let caching = self
            .caching
            .as_ref()
            .ok_or(ConfigurationError::CachingUnsupported { model })?;
        find_row(caching.storage, modality)
            .ok_or(ConfigurationError::MissingPrice { model, modality })
    }
}

/// Resolve the text input/output prices a caching comparison needs.
///
/// Output price is tiered by the input tier; storage price is never tiered.
pub(crate) fn text_unit_prices(
    model: Model,
    tier: SizeTier,
) -> Result<UnitPrices, ConfigurationError> {
    let pricing = model_pricing(model);
    if !pricing.supports_caching() {
        return Err(ConfigurationError::CachingUnsupported { model });
    }

    let prices = UnitPrices {
        normal_input: pricing
            .regular_entry(model, Modality::TextInput)?
            .price(tier),
        normal_output: pricing
            .regular_entry(model, Modality::TextOutput)?
            .price(tier),
        cached_input: pricing
            .cached_input_entry(model, Modality::TextInput)?
            .price(tier),
        cache_storage: pricing.storage_price(model, Modality::TextInput)?,
    };
    debug!(model = %model, ?tier, ?prices, "resolved unit prices");
    Ok(prices)
}
