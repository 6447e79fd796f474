//! Tests for configuration module.

use super::*;

#[test_log::test]
fn defaults_are_strict() {
    let settings = Settings::from_toml("").expect("empty document should use defaults");

    assert!(!settings.validation.relaxed);
    assert_eq!(settings.logging.level, "info");
}

#[test_log::test]
fn toml_overrides_defaults() {
    tracing::debug!("Loading relaxed settings from TOML");

    let settings = Settings::from_toml(
        r#"
[validation]
relaxed = true

[logging]
level = "trace"
"#,
    )
    .expect("valid settings document");

    assert!(settings.validation.relaxed);
    assert_eq!(settings.logging.level, "trace");
}

#[test]
fn rejects_wrongly_typed_flag() {
    let result = Settings::from_toml(
        r#"
[validation]
relaxed = "sometimes"
"#,
    );

    assert!(result.is_err());
}

#[test]
fn validation_config_defaults_to_strict() {
    let config = ValidationConfig::default();
    assert!(!config.relaxed);

    let copied = config;
    assert_eq!(copied.relaxed, config.relaxed);
}
