//! Unit tests for TOML configuration parsing.

use std::io::Write;

use carousel_motion::config::{load_config, parse_config, CarouselConfig, DutyLevel};

/// Test parsing a complete carousel configuration from TOML.
#[test]
fn test_parse_carousel_config() {
    let toml_str = r#"
[speed]
base = 50
levels = [60, 70, 80, 90]
overflow_level = 3

[timing]
brake_hold_ms = 120
step_rest_ms = 400
edge_timeout_ms = 2500
poll_interval_us = 250

[motor]
invert_direction = false
"#;

    let config: CarouselConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.speed.base.percent(), 50);
    assert_eq!(config.speed.levels[3].percent(), 90);
    assert_eq!(config.timing.brake_hold.value(), 120);
    assert_eq!(config.timing.step_rest.value(), 400);
    assert_eq!(config.timing.edge_timeout.value(), 2500);
    assert_eq!(config.timing.poll_interval.value(), 250);
    assert!(!config.motor.invert_direction);
}

/// Test that omitted sections and fields fall back to defaults.
#[test]
fn test_partial_config_uses_defaults() {
    let toml_str = r#"
[timing]
step_rest_ms = 1000
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let defaults = CarouselConfig::default();

    assert_eq!(config.speed, defaults.speed);
    assert_eq!(config.timing.step_rest.value(), 1000);
    assert_eq!(config.timing.brake_hold, defaults.timing.brake_hold);
    assert_eq!(config.motor, defaults.motor);
}

/// Test that a speed table must have exactly four levels.
#[test]
fn test_wrong_level_count_rejected() {
    let toml_str = r#"
[speed]
levels = [60, 70, 80]
"#;

    let result: Result<CarouselConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject a three-entry speed table");
}

/// Test that duty levels above 100 percent are rejected during parsing.
#[test]
fn test_duty_above_100_rejected() {
    let toml_str = r#"
[speed]
levels = [60, 70, 80, 101]
"#;

    let result: Result<CarouselConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject duty above 100%");
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!(
        "carousel-motion-{}-load.toml",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    writeln!(file, "[speed]\nbase = 42").unwrap();
    drop(file);

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.speed.base, DutyLevel::saturating(42));

    std::fs::remove_file(&path).ok();
}
