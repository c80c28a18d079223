use serde::Serialize;
use tracing::debug;

use crate::consts::MINUTES_PER_HOUR;
use crate::error::ConfigurationError;
use crate::pricing::{SizeTier, UnitPrices, text_unit_prices};

use super::params::QueryParams;

/// Cost of running `queries` identical queries under each billing mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct CostPoint {
    pub(crate) queries: u32,
    pub(crate) normal_cost: f64,
    pub(crate) cache_cost: f64,
}

impl CostPoint {
    /// Positive when caching is cheaper
    pub(crate) fn savings(&self) -> f64 {
        self.normal_cost - self.cache_cost
    }
}

/// Full comparison for one parameter set
#[derive(Debug, Clone)]
pub(crate) struct Projection {
    pub(crate) params: QueryParams,
    pub(crate) tier: SizeTier,
    pub(crate) prices: UnitPrices,
    pub(crate) single_query_cost: f64,
    /// Flat holding cost for the retention window, added once to every point
    pub(crate) storage_surcharge: f64,
    pub(crate) points: Vec<CostPoint>,
}

/// Evaluate normal and cached cost for every query count in `1..=max_queries`.
///
/// Inputs are assumed clamped; only the catalog lookup can fail.
pub(crate) fn project(params: &QueryParams) -> Result<Projection, ConfigurationError> {
    let tier = params.tier();
    let prices = text_unit_prices(params.model, tier)?;

    let input_chars = params.input_chars();
    let output_chars = params.output_chars();

    let single_query_cost = prices.normal_input * input_chars + prices.normal_output * output_chars;
    let storage_surcharge = prices.cache_storage
        * (f64::from(params.cache_retention_minutes) / MINUTES_PER_HOUR)
        * input_chars;

    let points = (1..=params.max_queries)
        .map(|queries| {
            let q = f64::from(queries);
            let normal_cost = single_query_cost * q;
            let subsequent = prices.cached_input * (q - 1.0) * input_chars
                + prices.normal_output * output_chars * q;
            CostPoint {
                queries,
                normal_cost,
                cache_cost: single_query_cost + subsequent + storage_surcharge,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        model = %params.model,
        points = points.len(),
        single_query_cost,
        storage_surcharge,
        "projection complete"
    );

    Ok(Projection {
        params: *params,
        tier,
        prices,
        single_query_cost,
        storage_surcharge,
        points,
    })
}

impl Projection {
    /// Smallest query count at which caching is strictly cheaper
    pub(crate) fn break_even(&self) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.cache_cost < p.normal_cost)
            .map(|p| p.queries)
    }

    /// Extra cost of each query after the first when the cache is warm
    pub(crate) fn marginal_cache_cost(&self) -> f64 {
        self.prices.cached_input * self.params.input_chars()
            + self.prices.normal_output * self.params.output_chars()
    }

    /// Caption describing the model, tier and outcome; derived on every call
    pub(crate) fn summary(&self) -> String {
        let p = &self.params;
        let outcome = match self.break_even() {
            Some(1) => "Caching is cheaper from the first query.".to_string(),
            Some(q) => format!("Caching becomes cheaper at {q} queries."),
            None => format!(
                "Caching is not cheaper within {} {}.",
                p.max_queries,
                if p.max_queries == 1 { "query" } else { "queries" }
            ),
        };
        format!(
            "{}: normal vs. context-cache cost, including {} min of cache storage. \
             Input {}K uses {} pricing; output {}K is priced at the same input tier. {}",
            p.model.display_name(),
            p.cache_retention_minutes,
            p.context_size_input,
            self.tier.label(),
            p.context_size_output,
            outcome
        )
    }
}
