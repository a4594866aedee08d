//! Content domain: tests for mover config parsing and validation.

use std::path::Path;

use super::{MoverConfig, parse_single, read_mover_config, validate_mover_config};
use crate::movement::MIN_MAGNITUDE;

#[test]
fn test_parse_mover_config() {
    let config: MoverConfig = parse_single(
        "mover.ron",
        "(schema_version: 1, force: 25.0, jump_impulse: 7.5)",
    )
    .unwrap();

    assert_eq!(config.schema_version, 1);
    assert_eq!(config.force, 25.0);
    assert_eq!(config.jump_impulse, 7.5);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config: MoverConfig = parse_single("mover.ron", "(force: 3.0)").unwrap();

    assert_eq!(config.force, 3.0);
    assert_eq!(config.jump_impulse, MoverConfig::default().jump_impulse);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<MoverConfig>("mover.ron", "(force: \"fast\")").unwrap_err();

    assert_eq!(err.file, "mover.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("mover.ron"));
}

#[test]
fn test_validate_reports_non_positive_fields() {
    let config = MoverConfig {
        force: 0.0,
        jump_impulse: -4.0,
        ..MoverConfig::default()
    };

    let errors = validate_mover_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["force", "jump_impulse"]);
}

#[test]
fn test_validate_reports_nan() {
    let config = MoverConfig {
        force: f32::NAN,
        ..MoverConfig::default()
    };

    assert_eq!(validate_mover_config(&config).len(), 1);
}

#[test]
fn test_validate_reports_infinite_values() {
    let config = MoverConfig {
        force: f32::INFINITY,
        jump_impulse: f32::NEG_INFINITY,
        ..MoverConfig::default()
    };

    let fields: Vec<_> = validate_mover_config(&config)
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["force", "jump_impulse"]);

    let mover = config.to_mover();
    assert_eq!(mover.force(), f32::MAX);
    assert_eq!(mover.jump_impulse(), MIN_MAGNITUDE);
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(validate_mover_config(&MoverConfig::default()).is_empty());
}

#[test]
fn test_config_to_mover_clamps() {
    let config = MoverConfig {
        force: -1.0,
        jump_impulse: 0.0,
        ..MoverConfig::default()
    };

    let mover = config.to_mover();
    assert_eq!(mover.force(), MIN_MAGNITUDE);
    assert_eq!(mover.jump_impulse(), MIN_MAGNITUDE);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = read_mover_config(Path::new("does/not/exist"));
    assert_eq!(config, MoverConfig::default());
}
