use crate::error::AppError;
use crate::pricing::models::{CostBreakdownEntry, CostResult, ModelCandidate, UsagePattern};
use tracing::debug;

/// Estimator for the monthly per-user cost of a pricing candidate under a
/// fixed table of usage patterns
pub struct CostEstimator {
    usage_patterns: Vec<UsagePattern>,
    max_monthly_cost: f64,
}

impl CostEstimator {
    /// Create a new cost estimator
    ///
    /// Fails if `max_monthly_cost` is not a finite positive number, since the
    /// score computation divides by it.
    pub fn new(usage_patterns: Vec<UsagePattern>, max_monthly_cost: f64) -> Result<Self, AppError> {
        if !max_monthly_cost.is_finite() || max_monthly_cost <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "max_monthly_cost must be a positive number, got {}",
                max_monthly_cost
            )));
        }

        Ok(Self {
            usage_patterns,
            max_monthly_cost,
        })
    }

    /// Estimate monthly per-user cost and affordability score for a candidate
    ///
    /// Prices are per 1M tokens. Each breakdown entry carries its pattern cost
    /// rounded to 4 decimal places; the total accumulates the unrounded costs
    /// and is rounded once, so the two can differ in the last digit.
    ///
    /// The score is linear in cost: 100 at zero cost, 0 at or above the
    /// ceiling. The clamp applies to the cost/ceiling ratio, so overshooting
    /// candidates saturate at 0 and negative-cost candidates at 100.
    pub fn estimate(&self, candidate: &ModelCandidate) -> CostResult {
        let mut monthly_cost = 0.0;
        let mut breakdown = Vec::with_capacity(self.usage_patterns.len());

        for usage in &self.usage_patterns {
            let input_cost = (usage.calls as f64 * usage.input_tokens as f64 / 1_000_000.0)
                * candidate.prompt_price;
            let output_cost = (usage.calls as f64 * usage.output_tokens as f64 / 1_000_000.0)
                * candidate.completion_price;
            let pattern_cost = input_cost + output_cost;

            breakdown.push(CostBreakdownEntry {
                pattern: usage.pattern.clone(),
                calls_per_month: usage.calls,
                input_tokens: usage.input_tokens,
                output_tokens: usage.output_tokens,
                monthly_cost: round_to(pattern_cost, 4),
            });

            monthly_cost += pattern_cost;
        }

        let remaining = (1.0 - monthly_cost / self.max_monthly_cost).clamp(0.0, 1.0);
        let score = round_to(remaining * 100.0, 1);

        debug!(
            model = %candidate.id,
            monthly_cost,
            score,
            "estimated candidate cost"
        );

        CostResult {
            model_id: candidate.id.clone(),
            monthly_cost_per_user: round_to(monthly_cost, 4),
            breakdown,
            score,
        }
    }

    pub fn usage_patterns(&self) -> &[UsagePattern] {
        &self.usage_patterns
    }

    pub fn max_monthly_cost(&self) -> f64 {
        self.max_monthly_cost
    }
}

/// Round to `places` decimal digits, halves away from zero (`f64::round`)
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
