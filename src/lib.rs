pub mod config;
pub mod error;
pub mod pricing;

pub use config::{load_config, load_config_from, Config, DEFAULT_MAX_MONTHLY_COST};
pub use error::AppError;
pub use pricing::{
    parse_pricing_json, CostBreakdownEntry, CostEstimator, CostResult, ModelCandidate,
    UsagePattern,
};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
