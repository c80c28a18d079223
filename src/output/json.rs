use crate::pricing::{Model, model_pricing};
use crate::projection::Projection;

use super::prices::entry_json;

/// Serialize a projection with its inputs, resolved prices and caption
pub(crate) fn output_projection_json(projection: &Projection) -> Result<String, serde_json::Error> {
    let output = serde_json::json!({
        "params": projection.params,
        "tier": projection.tier,
        "is_large_context": projection.tier.is_large(),
        "unit_prices": projection.prices,
        "single_query_cost": projection.single_query_cost,
        "storage_surcharge": projection.storage_surcharge,
        "marginal_cache_cost": projection.marginal_cache_cost(),
        "break_even_queries": projection.break_even(),
        "summary": projection.summary(),
        "points": projection.points,
    });
    serde_json::to_string_pretty(&output)
}

fn model_prices_json(model: Model) -> serde_json::Value {
    let pricing = model_pricing(model);
    let regular: serde_json::Map<_, _> = pricing
        .regular
        .iter()
        .map(|(modality, entry)| (modality.id().to_string(), entry_json(*entry)))
        .collect();

    let mut value = serde_json::json!({
        "model": model,
        "name": model.display_name(),
        "supports_caching": pricing.supports_caching(),
        "regular": regular,
    });
    if let Some(caching) = &pricing.caching {
        let cached_input: serde_json::Map<_, _> = caching
            .cached_input
            .iter()
            .map(|(modality, entry)| (modality.id().to_string(), entry_json(*entry)))
            .collect();
        let storage: serde_json::Map<_, _> = caching
            .storage
            .iter()
            .map(|(modality, price)| (modality.id().to_string(), serde_json::json!(price)))
            .collect();
        value["cached_input"] = serde_json::Value::Object(cached_input);
        value["context_cache_storage"] = serde_json::Value::Object(storage);
    }
    value
}

/// Catalog dump for one model or all of them
pub(crate) fn output_prices_json(models: &[Model]) -> Result<String, serde_json::Error> {
    let output: Vec<_> = models.iter().map(|m| model_prices_json(*m)).collect();
    serde_json::to_string_pretty(&output)
}

/// Model ids with display names and caching support
pub(crate) fn output_models_json() -> Result<String, serde_json::Error> {
    let output: Vec<_> = Model::ALL
        .iter()
        .map(|m| {
            serde_json::json!({
                "model": m,
                "name": m.display_name(),
                "supports_caching": model_pricing(*m).supports_caching(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output)
}
