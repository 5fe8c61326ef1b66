use taskdeck::config::Config;
use taskdeck::icons::IconTheme;
use taskdeck::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Base URL must be http(s)
    config.api.base_url = "localhost:3000".to_string();
    assert!(config.validate().is_err());

    config.api.base_url = String::new();
    assert!(config.validate().is_err());

    // Reset and test timeout bounds
    config.api.base_url = "https://tasks.example.com".to_string();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    config.api.timeout_secs = 3600;
    assert!(config.validate().is_err());

    config.api.timeout_secs = 30;
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_display_formats_rejected() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:3000\""));
    assert!(toml_str.contains("timeout_secs = 30"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
timeout_secs = 10

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Specified values are used
    assert_eq!(config.api.timeout_secs, 10);
    assert!(config.logging.enabled);

    // Unspecified values fall back to defaults
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.time_format, "%H:%M");
}

#[test]
fn test_generated_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded.api.base_url, Config::default().api.base_url);
    assert_eq!(loaded.api.timeout_secs, Config::default().api.timeout_secs);
}

#[test]
fn test_load_from_missing_file_fails() {
    assert!(Config::load_from_file("/nonexistent/taskdeck.toml").is_err());
}
