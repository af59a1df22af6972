use avia_domain::JoinMode;
use avia_domain::config::{AviaConfig, BookingConfig, LogRotation, LoggerSettings};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let booking = BookingConfig::default();
    assert_eq!(booking.join_mode, JoinMode::Sequential);

    let logger = LoggerSettings::default();
    assert_eq!(logger.name, "avia");
    assert_eq!(logger.level, "info");
    assert!(logger.console);
    assert!(logger.targets);
    assert!(!logger.json);
    assert!(logger.path.is_none());
    assert_eq!(logger.rotation, LogRotation::Daily);
}

#[test]
fn avia_config_deserializes_partial_input() {
    let raw = json!({
        "booking": { "join_mode": "atomic" },
        "logger": { "level": "debug", "path": "/tmp/avia-logs" }
    });

    let cfg: AviaConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.booking.join_mode, JoinMode::Atomic);
    assert_eq!(cfg.logger.level, "debug");
    assert_eq!(cfg.logger.name, "avia");
    assert_eq!(cfg.logger.path, Some(std::path::PathBuf::from("/tmp/avia-logs")));
}

#[test]
fn unknown_join_mode_is_rejected() {
    let raw = json!({ "booking": { "join_mode": "eventual" } });
    assert!(serde_json::from_value::<AviaConfig>(raw).is_err());
}

#[test]
fn logger_rotation_and_targets_are_read() {
    let raw = json!({ "logger": { "rotation": "hourly", "targets": false } });

    let cfg: AviaConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logger.rotation, LogRotation::Hourly);
    assert!(!cfg.logger.targets);

    let bad = json!({ "logger": { "rotation": "weekly" } });
    assert!(serde_json::from_value::<AviaConfig>(bad).is_err());
}
