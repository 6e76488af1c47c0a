use crate::error::AppError;
use crate::pricing::{CostEstimator, UsagePattern};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default monthly-cost ceiling, in the currency unit of the catalog prices
pub const DEFAULT_MAX_MONTHLY_COST: f64 = 5.0;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Monthly per-user cost at which a candidate scores zero
    #[serde(default = "default_max_monthly_cost")]
    pub max_monthly_cost: f64,
    /// Monthly workload shapes the product is expected to drive per user
    #[serde(default = "default_usage_patterns")]
    pub usage_patterns: Vec<UsagePattern>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_monthly_cost: default_max_monthly_cost(),
            usage_patterns: default_usage_patterns(),
        }
    }
}

impl Config {
    /// Build a cost estimator from this configuration
    pub fn estimator(&self) -> Result<CostEstimator, AppError> {
        CostEstimator::new(self.usage_patterns.clone(), self.max_monthly_cost)
    }
}

fn default_max_monthly_cost() -> f64 {
    DEFAULT_MAX_MONTHLY_COST
}

fn default_usage_patterns() -> Vec<UsagePattern> {
    [
        ("chat-assistant", 400, 1_500, 350),
        ("inline-completion", 2_000, 300, 40),
        ("thread-summary", 120, 4_000, 250),
        ("semantic-search", 600, 800, 60),
    ]
    .into_iter()
    .map(|(pattern, calls, input_tokens, output_tokens)| UsagePattern {
        pattern: pattern.to_string(),
        calls,
        input_tokens,
        output_tokens,
    })
    .collect()
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("affordability").required(false))
        .add_source(
            config::Environment::with_prefix("AFFORDABILITY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Load configuration from a specific file, without the environment overlay
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // The score computation divides by the ceiling
    if !cfg.max_monthly_cost.is_finite() || cfg.max_monthly_cost <= 0.0 {
        anyhow::bail!(
            "max_monthly_cost must be a positive number, got {}",
            cfg.max_monthly_cost
        );
    }

    // An empty table is valid (every candidate scores 100), but every
    // pattern present must be labeled
    for pattern in &cfg.usage_patterns {
        if pattern.pattern.is_empty() {
            anyhow::bail!("usage pattern label cannot be empty");
        }
    }

    Ok(())
}
