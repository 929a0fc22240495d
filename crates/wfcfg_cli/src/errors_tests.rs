use super::*;

#[test]
fn test_configuration_error_converts() {
    let err: Error = ConfigurationError::ValueCount { count: 3 }.into();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::ValueCount { count: 3 })
    ));
    assert!(err.to_string().starts_with("Configuration error: "));
}

#[test]
fn test_config_error_message() {
    let err = Error::Config("Configuration file not found: \"wfcfg.toml\"".to_string());
    assert_eq!(
        err.to_string(),
        "Tool configuration error: Configuration file not found: \"wfcfg.toml\""
    );
}

#[test]
fn test_invalid_arguments_message() {
    let err = Error::InvalidArguments("expected 1 or 4 margins".to_string());
    assert_eq!(err.to_string(), "Invalid arguments: expected 1 or 4 margins");
}
