//! Unit tests for configuration validation.

use carousel_motion::config::{
    parse_config, validate_config, CarouselConfig, Microseconds, Milliseconds,
};
use carousel_motion::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[speed]
base = 55
levels = [65, 75, 85, 100]

[timing]
edge_timeout_ms = 3000
poll_interval_us = 500
"#;

    let config: CarouselConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an overflow level outside the table.
#[test]
fn test_invalid_overflow_level() {
    let toml_str = r#"
[speed]
overflow_level = 5
"#;

    let config: CarouselConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::InvalidOverflowLevel(5)))
    );
}

/// Test validation fails when the edge timeout cannot fit one poll.
#[test]
fn test_edge_timeout_shorter_than_poll() {
    let mut config = CarouselConfig::default();
    config.timing.edge_timeout = Milliseconds(0);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidEdgeTimeout { .. }))
    ));

    config.timing.edge_timeout = Milliseconds(1);
    config.timing.poll_interval = Microseconds(1000);
    assert!(validate_config(&config).is_ok());
}

/// Test that parse_config runs validation.
#[test]
fn test_parse_config_validates() {
    let toml_str = r#"
[timing]
poll_interval_us = 0
"#;

    let result = parse_config(toml_str);
    assert_eq!(
        result.map(|_| ()),
        Err(Error::Config(ConfigError::InvalidPollInterval(0)))
    );
}

/// Test that the default configuration is valid.
#[test]
fn test_default_config_is_valid() {
    let config = CarouselConfig::default();
    assert!(validate_config(&config).is_ok());
}
