use crate::error::AppError;
use crate::pricing::models::ModelCandidate;
use serde::Deserialize;
use tracing::info;

/// Pricing catalog document: a flat map of model names to their pricing data,
/// in the litellm price-list format
pub type PricingDataFile = std::collections::HashMap<String, ModelPriceData>;

/// Individual model pricing data as published in the catalog
#[derive(Debug, Deserialize)]
pub struct ModelPriceData {
    #[serde(default)]
    pub input_cost_per_token: Option<f64>,
    #[serde(default)]
    pub output_cost_per_token: Option<f64>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Parse pricing JSON and convert to a candidate list
///
/// Keeps chat models with positive input and output prices. Catalog prices
/// are per token; candidates carry per-1M-token prices. The source document
/// is an unordered map, so the result is sorted by id.
pub fn parse_pricing_json(json: &str) -> Result<Vec<ModelCandidate>, AppError> {
    let data: PricingDataFile = serde_json::from_str(json)?;

    let mut candidates = Vec::new();

    for (model_name, price_data) in data {
        // Skip the schema-documentation entry present in litellm catalogs
        if model_name == "sample_spec" {
            continue;
        }

        // Only chat models
        if price_data.mode.as_deref() != Some("chat") {
            continue;
        }

        let input_cost = match price_data.input_cost_per_token {
            Some(cost) if cost > 0.0 => cost,
            _ => continue,
        };

        let output_cost = match price_data.output_cost_per_token {
            Some(cost) if cost > 0.0 => cost,
            _ => continue,
        };

        candidates.push(ModelCandidate {
            id: model_name,
            prompt_price: input_cost * 1_000_000.0,
            completion_price: output_cost * 1_000_000.0,
        });
    }

    candidates.sort_by(|a, b| a.id.cmp(&b.id));

    info!("parsed {} pricing candidates", candidates.len());
    Ok(candidates)
}
