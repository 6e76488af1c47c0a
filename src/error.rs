use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error (invalid cost ceiling or usage table)
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Pricing catalog could not be parsed
    #[error("Catalog error: {0}")]
    CatalogError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::ConfigError("max_monthly_cost must be a positive number".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: max_monthly_cost must be a positive number"
        );
    }
}
