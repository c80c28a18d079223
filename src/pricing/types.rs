use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::LARGE_CONTEXT_THRESHOLD_K;
use crate::error::ConfigurationError;

/// Selectable models in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Model {
    Gemini15Flash,
    Gemini15Pro,
    /// Legacy model, no context caching
    Gemini10Pro,
    /// Billed per grounding request rather than per character
    GroundingGoogleSearch,
}

impl Model {
    pub(crate) const ALL: [Model; 4] = [
        Model::Gemini15Flash,
        Model::Gemini15Pro,
        Model::Gemini10Pro,
        Model::GroundingGoogleSearch,
    ];

    pub(crate) fn id(self) -> &'static str {
        match self {
            Model::Gemini15Flash => "gemini15Flash",
            Model::Gemini15Pro => "gemini15Pro",
            Model::Gemini10Pro => "gemini10Pro",
            Model::GroundingGoogleSearch => "groundingGoogleSearch",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Model::Gemini15Flash => "Gemini 1.5 Flash",
            Model::Gemini15Pro => "Gemini 1.5 Pro",
            Model::Gemini10Pro => "Gemini 1.0 Pro",
            Model::GroundingGoogleSearch => "Grounding with Google Search",
        }
    }

    /// Hyphenated API-style names accepted alongside the catalog ids
    fn alias(self) -> Option<&'static str> {
        match self {
            Model::Gemini15Flash => Some("gemini-1.5-flash"),
            Model::Gemini15Pro => Some("gemini-1.5-pro"),
            Model::Gemini10Pro => Some("gemini-1.0-pro"),
            Model::GroundingGoogleSearch => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Model {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Model::ALL
            .into_iter()
            .find(|m| {
                m.id().eq_ignore_ascii_case(wanted)
                    || m.alias().is_some_and(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ConfigurationError::UnknownModel {
                input: s.to_string(),
            })
    }
}

/// Billing modality within a model's price rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Modality {
    ImageInput,
    VideoInput,
    TextInput,
    AudioInput,
    TextOutput,
    GroundingRequests,
}

impl Modality {
    pub(crate) fn id(self) -> &'static str {
        match self {
            Modality::ImageInput => "imageInput",
            Modality::VideoInput => "videoInput",
            Modality::TextInput => "textInput",
            Modality::AudioInput => "audioInput",
            Modality::TextOutput => "textOutput",
            Modality::GroundingRequests => "groundingRequests",
        }
    }

    pub(crate) fn unit(self) -> &'static str {
        match self {
            Modality::GroundingRequests => "request",
            _ => "char",
        }
    }
}

/// Which half of a tiered price applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SizeTier {
    Small,
    Large,
}

impl SizeTier {
    /// Tier is chosen by the input size alone, for input and output prices alike.
    pub(crate) fn for_input(context_size_input_k: u32) -> Self {
        if context_size_input_k > LARGE_CONTEXT_THRESHOLD_K {
            SizeTier::Large
        } else {
            SizeTier::Small
        }
    }

    pub(crate) fn is_large(self) -> bool {
        self == SizeTier::Large
    }

    pub(crate) fn label(self) -> String {
        match self {
            SizeTier::Small => format!("≤ {LARGE_CONTEXT_THRESHOLD_K}K"),
            SizeTier::Large => format!("> {LARGE_CONTEXT_THRESHOLD_K}K"),
        }
    }
}

/// Unit price, either split by context size or flat
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PriceEntry {
    Tiered { small: f64, large: f64 },
    Flat(f64),
}

impl PriceEntry {
    pub(crate) fn price(self, tier: SizeTier) -> f64 {
        match (self, tier) {
            (PriceEntry::Tiered { small, .. }, SizeTier::Small) => small,
            (PriceEntry::Tiered { large, .. }, SizeTier::Large) => large,
            (PriceEntry::Flat(p), _) => p,
        }
    }
}

/// Cached-input and storage rows; present only on caching-capable models
#[derive(Debug)]
pub(crate) struct CachePricing {
    pub(crate) cached_input: &'static [(Modality, PriceEntry)],
    /// Per character per hour, never tiered
    pub(crate) storage: &'static [(Modality, f64)],
}

#[derive(Debug)]
pub(crate) struct ModelPricing {
    pub(crate) regular: &'static [(Modality, PriceEntry)],
    pub(crate) caching: Option<CachePricing>,
}

/// The four scalars a projection needs, already resolved for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct UnitPrices {
    pub(crate) normal_input: f64,
    pub(crate) normal_output: f64,
    pub(crate) cached_input: f64,
    pub(crate) cache_storage: f64,
}
