use serde::{Deserialize, Serialize};

/// A named monthly workload shape: how often a feature calls the model and the
/// average input/output token counts per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsagePattern {
    pub pattern: String,
    pub calls: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A pricing candidate, with prices per 1M tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCandidate {
    pub id: String,
    pub prompt_price: f64,
    pub completion_price: f64,
}

/// Cost of a single usage pattern under a candidate's pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub pattern: String,
    pub calls_per_month: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Pattern cost for the month, rounded to 4 decimal places
    pub monthly_cost: f64,
}

/// Estimated monthly per-user cost and affordability for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResult {
    pub model_id: String,
    /// Sum of the unrounded per-pattern costs, rounded once to 4 decimal places
    pub monthly_cost_per_user: f64,
    /// One entry per usage pattern, in input order
    pub breakdown: Vec<CostBreakdownEntry>,
    /// Affordability in [0, 100], rounded to 1 decimal place; 100 means free,
    /// 0 means at or above the cost ceiling
    pub score: f64,
}
