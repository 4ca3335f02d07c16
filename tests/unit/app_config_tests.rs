/*!
 * Tests for configuration loading, defaults and credential resolution
 */

use potrans::app_config::{API_KEY_ENV_VAR, Config, LogLevel, resolve_api_key};

/// Test defaults mirror the tool's documented defaults
#[test]
fn test_defaultConfig_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.target_language, "zh-CN");
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert!(config.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test JSON round-trip keeps every field
#[test]
fn test_configSerialization_shouldRoundTrip() {
    let config = Config {
        target_language: "fr".to_string(),
        model: "gpt-4o".to_string(),
        api_key: "sk-test".to_string(),
        known_bad_outputs: vec!["Lorem ipsum".to_string()],
        log_level: LogLevel::Debug,
        ..Config::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.target_language, "fr");
    assert_eq!(parsed.model, "gpt-4o");
    assert_eq!(parsed.api_key, "sk-test");
    assert_eq!(parsed.known_bad_outputs, vec!["Lorem ipsum".to_string()]);
    assert_eq!(parsed.log_level, LogLevel::Debug);
}

/// Test partial config files fall back to defaults per field
#[test]
fn test_configDeserialization_withMinimalJson_shouldFillDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.target_language, "zh-CN");
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert!(config.known_bad_outputs.is_empty());
}

/// Test explicit credential wins over the environment
#[test]
fn test_resolveApiKey_precedence_explicitThenEnvironment() {
    assert_eq!(
        resolve_api_key("sk-flag", Some("sk-env".to_string())).unwrap(),
        "sk-flag"
    );
    assert_eq!(
        resolve_api_key("", Some("sk-env".to_string())).unwrap(),
        "sk-env"
    );
}

/// Test a missing credential is a hard error naming the fallback variable
#[test]
fn test_resolveApiKey_withNoCredential_shouldFailWithHint() {
    let err = resolve_api_key("", None).unwrap_err();
    assert!(err.to_string().contains(API_KEY_ENV_VAR));
}

/// Test validation rejects a blank target language
#[test]
fn test_validate_withBlankTargetLanguage_shouldFail() {
    let mut config = Config {
        target_language: " ".to_string(),
        api_key: "sk-test".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test validation passes with an explicit credential
#[test]
fn test_validate_withExplicitCredential_shouldPass() {
    let mut config = Config {
        target_language: "es".to_string(),
        api_key: "sk-test".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_ok());
    assert_eq!(config.api_key, "sk-test");
}
