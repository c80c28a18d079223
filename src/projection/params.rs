use serde::Serialize;

use crate::consts::CHARS_PER_K;
use crate::pricing::{Model, SizeTier};

pub(crate) const INPUT_K_MIN: u32 = 1;
pub(crate) const INPUT_K_MAX: u32 = 1000;
pub(crate) const OUTPUT_K_MIN: u32 = 1;
pub(crate) const OUTPUT_K_MAX: u32 = 8;
pub(crate) const RETENTION_MIN: u32 = 1;
pub(crate) const RETENTION_MAX: u32 = 180;
pub(crate) const QUERIES_MIN: u32 = 1;
pub(crate) const QUERIES_MAX: u32 = 100;

/// One complete set of calculator inputs. Replaced wholesale, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct QueryParams {
    pub(crate) model: Model,
    /// K units
    pub(crate) context_size_input: u32,
    /// K units
    pub(crate) context_size_output: u32,
    pub(crate) cache_retention_minutes: u32,
    pub(crate) max_queries: u32,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            model: Model::Gemini15Pro,
            context_size_input: 200,
            context_size_output: 2,
            cache_retention_minutes: 60,
            max_queries: 5,
        }
    }
}

impl QueryParams {
    /// Pull every numeric field into its documented range.
    pub(crate) fn clamped(self) -> Self {
        QueryParams {
            context_size_input: self.context_size_input.clamp(INPUT_K_MIN, INPUT_K_MAX),
            context_size_output: self.context_size_output.clamp(OUTPUT_K_MIN, OUTPUT_K_MAX),
            cache_retention_minutes: self
                .cache_retention_minutes
                .clamp(RETENTION_MIN, RETENTION_MAX),
            max_queries: self.max_queries.clamp(QUERIES_MIN, QUERIES_MAX),
            ..self
        }
    }

    pub(crate) fn tier(&self) -> SizeTier {
        SizeTier::for_input(self.context_size_input)
    }

    pub(crate) fn input_chars(&self) -> f64 {
        f64::from(self.context_size_input * CHARS_PER_K)
    }

    pub(crate) fn output_chars(&self) -> f64 {
        f64::from(self.context_size_output * CHARS_PER_K)
    }
}
