use llm_affordability::{load_config_from, DEFAULT_MAX_MONTHLY_COST};

#[test]
fn test_load_config_from_empty_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("affordability.toml");
    std::fs::write(&path, "")?;

    // An empty file falls back to the built-in defaults
    let config = load_config_from(&path)?;

    assert_eq!(config.max_monthly_cost, DEFAULT_MAX_MONTHLY_COST);
    assert!(!config.usage_patterns.is_empty());

    Ok(())
}

#[test]
fn test_load_config_with_overrides() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("affordability.toml");
    std::fs::write(
        &path,
        r#"
max_monthly_cost = 2.5

[[usage_patterns]]
pattern = "nightly-batch"
calls = 30
input_tokens = 20000
output_tokens = 1000

[[usage_patterns]]
pattern = "chat"
calls = 900
input_tokens = 1200
output_tokens = 300
"#,
    )?;

    let config = load_config_from(&path)?;

    assert_eq!(config.max_monthly_cost, 2.5);
    assert_eq!(config.usage_patterns.len(), 2);
    assert_eq!(config.usage_patterns[0].pattern, "nightly-batch");
    assert_eq!(config.usage_patterns[0].calls, 30);
    assert_eq!(config.usage_patterns[1].pattern, "chat");

    // The loaded table drives the estimator directly
    let estimator = config.estimator()?;
    assert_eq!(estimator.max_monthly_cost(), 2.5);
    assert_eq!(estimator.usage_patterns().len(), 2);

    Ok(())
}

#[test]
fn test_load_config_rejects_non_positive_ceiling() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("affordability.toml");
    std::fs::write(&path, "max_monthly_cost = 0.0\n")?;

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("max_monthly_cost"));

    Ok(())
}

#[test]
fn test_load_config_rejects_unlabeled_pattern() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("affordability.toml");
    std::fs::write(
        &path,
        r#"
[[usage_patterns]]
pattern = ""
calls = 10
input_tokens = 100
output_tokens = 10
"#,
    )?;

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("label"));

    Ok(())
}
