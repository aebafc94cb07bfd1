use super::*;
use crate::error::ConfigError;
use simulator::Allocation;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

// `load` reads the process environment; tests touching it run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Sets environment variables for the lifetime of the guard.
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.0 {
            std::env::remove_var(key);
        }
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config_matches_classic_setup() {
    let config = SimulatorConfig::default();
    assert_eq!(config.initial_investment(), 1000.0);
    assert_eq!(config.max_rounds(), 3);
    assert_eq!(config.allocation_tolerance(), 0.01);
    assert_eq!(config.max_round_change(), 0.1);
    assert_eq!(config.default_allocation(), Allocation::new(33.33, 33.33, 33.34));
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_without_file_uses_defaults() {
    let _lock = env_lock();
    let config = SimulatorConfig::load(None).unwrap();
    assert_eq!(config, SimulatorConfig::default());
}

#[test]
fn test_load_partial_file() {
    let _lock = env_lock();
    let file = write_config(
        r#"
initial_investment = 5000.0
max_rounds = 5

[default_allocation]
eth = 60.0
btc = 30.0
stable = 10.0
"#,
    );

    let config = SimulatorConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.initial_investment(), 5000.0);
    assert_eq!(config.max_rounds(), 5);
    // Unspecified keys keep their defaults.
    assert_eq!(config.allocation_tolerance(), 0.01);
    assert_eq!(config.max_round_change(), 0.1);
    assert_eq!(config.default_allocation(), Allocation::new(60.0, 30.0, 10.0));
}

#[test]
fn test_load_rejects_invalid_values() {
    let _lock = env_lock();
    let file = write_config("max_rounds = 0\n");
    let err = SimulatorConfig::load(Some(file.path())).unwrap_err();
    assert!(
        matches!(err, ConfigError::Invalid(_)),
        "Expected validation error, got {:?}",
        err
    );
}

#[test]
fn test_load_missing_file_fails() {
    let _lock = env_lock();
    let err = SimulatorConfig::load(Some(std::path::Path::new("does-not-exist.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)), "Got {:?}", err);
}

#[test]
fn test_validate_round_change_bounds() {
    assert!(SimulatorConfig::default()
        .with_max_round_change(1.0)
        .validate()
        .is_err());
    assert!(SimulatorConfig::default()
        .with_initial_investment(-1.0)
        .validate()
        .is_err());
    assert!(SimulatorConfig::default()
        .with_max_round_change(0.0)
        .validate()
        .is_ok());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let _lock = env_lock();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/simulator.toml");
    let config = SimulatorConfig::load(Some(&path)).unwrap();
    assert_eq!(config, SimulatorConfig::default());
}

#[test]
fn test_validate_rejects_unbalanced_default_allocation() {
    let config = SimulatorConfig::default().with_default_allocation(Allocation::new(10.0, 10.0, 10.0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config =
        SimulatorConfig::default().with_default_allocation(Allocation::new(f64::NAN, 50.0, 50.0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = SimulatorConfig::default().with_default_allocation(Allocation::new(50.0, 25.0, 25.0));
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_rejects_unbalanced_default_allocation() {
    let _lock = env_lock();
    let file = write_config(
        r#"
[default_allocation]
eth = 10.0
btc = 10.0
stable = 10.0
"#,
    );

    let err = SimulatorConfig::load(Some(file.path())).unwrap_err();
    assert!(
        matches!(err, ConfigError::Invalid(_)),
        "Expected validation error, got {:?}",
        err
    );
}

#[test]
fn test_environment_overrides() {
    let _lock = env_lock();
    let _vars = EnvVars::set(&[
        ("PORTFOLIO_SIM_MAX_ROUNDS", "5"),
        ("PORTFOLIO_SIM_INITIAL_INVESTMENT", "2500.5"),
    ]);

    let config = SimulatorConfig::load(None).unwrap();
    assert_eq!(config.max_rounds(), 5);
    assert_eq!(config.initial_investment(), 2500.5);
    assert_eq!(config.max_round_change(), 0.1);
}

#[test]
fn test_environment_beats_file() {
    let _lock = env_lock();
    let file = write_config("max_rounds = 4\nmax_round_change = 0.2\n");
    let _vars = EnvVars::set(&[("PORTFOLIO_SIM_MAX_ROUNDS", "7")]);

    let config = SimulatorConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.max_rounds(), 7, "Environment must override the file");
    assert_eq!(config.max_round_change(), 0.2, "File keys without overrides still apply");
}
