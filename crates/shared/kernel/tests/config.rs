use avia_kernel::config::{ConfigError, load_config, load_config_with_env};
use avia_kernel::domain::JoinMode;
use avia_kernel::domain::config::AviaConfig;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("avia.toml");
    fs::write(
        &path,
        r#"
[booking]
join_mode = "atomic"

[logger]
name = "booking-desk"
level = "debug"
"#,
    )?;

    let cfg: AviaConfig = load_config_with_env(Some(&path), Some(HashMap::new()))?;
    assert_eq!(cfg.booking.join_mode, JoinMode::Atomic);
    assert_eq!(cfg.logger.name, "booking-desk");
    assert_eq!(cfg.logger.level, "debug");
    assert!(cfg.logger.console, "unspecified keys keep their defaults");
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("avia.toml");
    fs::write(&path, "[booking]\njoin_mode = \"sequential\"\n")?;

    let env = HashMap::from([
        ("AVIA__BOOKING__JOIN_MODE".to_owned(), "atomic".to_owned()),
        ("AVIA__LOGGER__CONSOLE".to_owned(), "false".to_owned()),
    ]);

    let cfg: AviaConfig = load_config_with_env(Some(&path), Some(env))?;
    assert_eq!(cfg.booking.join_mode, JoinMode::Atomic);
    assert!(!cfg.logger.console);
    Ok(())
}

#[test]
fn empty_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("avia.json");
    fs::write(&path, "{}")?;

    let cfg: AviaConfig = load_config_with_env(Some(&path), Some(HashMap::new()))?;
    assert_eq!(cfg.booking.join_mode, JoinMode::Sequential);
    assert_eq!(cfg.logger.name, "avia");
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config::<AviaConfig>(Some("definitely/not/here.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn invalid_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("avia.toml");
    fs::write(&path, "[booking]\njoin_mode = \"eventual\"\n")?;

    let err = load_config_with_env::<AviaConfig>(Some(&path), Some(HashMap::new()))
        .expect_err("unknown join mode");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
