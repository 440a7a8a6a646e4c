use std::path::{Path, PathBuf};
use std::time::Duration;

use repofind_core::{
    ConfigError, FindError, FindOptions, MAX_THROTTLE_TIMEOUT_MS, ScanStats, normalize_root,
};
use serde_json::json;

#[test]
fn test_default_options_disable_batching() {
    let options = FindOptions::default();
    assert_eq!(options.throttle_timeout_ms, 0);
    assert_eq!(options.throttle_interval(), Duration::ZERO);
    assert!(options.validate().is_ok());
}

#[test]
fn test_options_bounds() {
    assert!(FindOptions::with_throttle_ms(0).validate().is_ok());
    assert!(
        FindOptions::with_throttle_ms(MAX_THROTTLE_TIMEOUT_MS)
            .validate()
            .is_ok()
    );
    assert_eq!(
        FindOptions::with_throttle_ms(70_000).validate(),
        Err(ConfigError::ThrottleOutOfRange { value: 70_000.0 })
    );
}

#[test]
fn test_loose_options_each_error_is_distinct() {
    let not_object = FindOptions::from_value(&json!("fast")).unwrap_err();
    let not_number = FindOptions::from_value(&json!({ "throttleTimeoutMS": [1] })).unwrap_err();
    let out_of_range =
        FindOptions::from_value(&json!({ "throttleTimeoutMS": 60000.5 })).unwrap_err();

    assert_eq!(not_object, ConfigError::OptionsNotObject);
    assert_eq!(not_number, ConfigError::ThrottleNotNumeric);
    assert!(matches!(out_of_range, ConfigError::ThrottleOutOfRange { .. }));
}

#[test]
fn test_find_error_wraps_config() {
    let err = FindError::from(ConfigError::MissingProgressCallback);
    assert!(matches!(
        err,
        FindError::Config(ConfigError::MissingProgressCallback)
    ));
    assert!(err.to_string().contains("progress callback"));

    let background = FindError::Background {
        message: "panicked".to_string(),
    };
    assert!(background.as_config().is_none());
}

#[test]
fn test_normalize_root_relative() {
    assert_eq!(normalize_root(Path::new(".")), PathBuf::from("."));
    assert_eq!(normalize_root(Path::new("")), PathBuf::new());
}

#[test]
fn test_stats_counters() {
    let mut stats = ScanStats::new();
    stats.record_dir();
    stats.record_dir();
    stats.record_unreadable();
    stats.record_unclassified();
    stats.record_repo();

    assert_eq!(stats.dirs_scanned, 2);
    assert_eq!(stats.dirs_visited(), 3);
    assert_eq!(stats.entries_unclassified, 1);
    assert_eq!(stats.repos_found, 1);
}
