pub mod estimator;
pub mod loader;
pub mod models;

pub use estimator::CostEstimator;
pub use loader::{parse_pricing_json, ModelPriceData, PricingDataFile};
pub use models::{CostBreakdownEntry, CostResult, ModelCandidate, UsagePattern};
