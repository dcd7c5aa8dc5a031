use interview_core::config::{
    Config, DEFAULT_DURATION_MINUTES, DEFAULT_EXECUTION_API_URL, DEFAULT_HINT_COST_MINUTES,
    DEFAULT_WRONG_SUBMISSION_PENALTY_MINUTES, MAX_MINUTES,
};
use interview_core::errors::CoreError;
use serial_test::serial;

mod common;

const TIMING_VARS: &[&str] = &[
    "INTERVIEW_DURATION_MINUTES",
    "HINT_COST_MINUTES",
    "WRONG_SUBMISSION_PENALTY_MINUTES",
    "PLAYGROUND_PENALTY_ENABLED",
    "EXECUTION_API_URL",
];

fn clear_env() {
    for var in TIMING_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_apply_when_nothing_is_set() {
    common::init_tracing();
    clear_env();

    let config = Config::load().unwrap();
    assert_eq!(config.duration_minutes, DEFAULT_DURATION_MINUTES);
    assert_eq!(config.hint_cost_minutes, DEFAULT_HINT_COST_MINUTES);
    assert_eq!(
        config.wrong_submission_penalty_minutes,
        DEFAULT_WRONG_SUBMISSION_PENALTY_MINUTES
    );
    assert!(!config.playground_penalty_enabled);
    assert_eq!(config.execution_api_url, DEFAULT_EXECUTION_API_URL);
}

#[test]
#[serial]
fn environment_overrides_are_picked_up() {
    clear_env();
    std::env::set_var("INTERVIEW_DURATION_MINUTES", "45");
    std::env::set_var("HINT_COST_MINUTES", "10");
    std::env::set_var("WRONG_SUBMISSION_PENALTY_MINUTES", "3");
    std::env::set_var("PLAYGROUND_PENALTY_ENABLED", "1");
    std::env::set_var("EXECUTION_API_URL", "http://judge.internal/api");

    let config = Config::load().unwrap();
    assert_eq!(config.duration_minutes, 45);
    assert_eq!(config.hint_cost_minutes, 10);
    assert_eq!(config.wrong_submission_penalty_minutes, 3);
    assert!(config.playground_penalty_enabled);
    assert_eq!(config.execution_api_url, "http://judge.internal/api");
    assert_eq!(config.duration_seconds(), 45 * 60);

    clear_env();
}

#[test]
#[serial]
fn zero_duration_is_rejected_at_load_time() {
    clear_env();
    std::env::set_var("INTERVIEW_DURATION_MINUTES", "0");

    let err = Config::load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));

    clear_env();
}

#[test]
#[serial]
fn negative_penalty_is_rejected_at_load_time() {
    clear_env();
    std::env::set_var("WRONG_SUBMISSION_PENALTY_MINUTES", "-2");

    let err = Config::load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));

    clear_env();
}

#[test]
#[serial]
fn non_numeric_value_is_rejected_at_load_time() {
    clear_env();
    std::env::set_var("HINT_COST_MINUTES", "soon");

    let err = Config::load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));

    clear_env();
}

#[test]
#[serial]
fn oversized_duration_is_rejected_at_load_time() {
    clear_env();

    // does not fit in u32 at all; must error, never wrap around to 1 minute
    std::env::set_var("INTERVIEW_DURATION_MINUTES", "4294967297");
    let err = Config::load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));

    // fits in u32 but its second count does not
    std::env::set_var("INTERVIEW_DURATION_MINUTES", "100000000");
    let err = Config::load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));

    std::env::set_var("INTERVIEW_DURATION_MINUTES", &MAX_MINUTES.to_string());
    let config = Config::load().unwrap();
    assert_eq!(config.duration_minutes, MAX_MINUTES);
    assert_eq!(config.duration_seconds(), MAX_MINUTES * 60);

    clear_env();
}

#[test]
#[serial]
fn validate_catches_hand_built_configs() {
    let config = Config {
        hint_cost_minutes: 0,
        ..Config::default()
    };
    assert!(config.validate().is_err());

    let oversized = Config {
        duration_minutes: u32::MAX,
        ..Config::default()
    };
    assert!(oversized.validate().is_err());
    // the seconds helpers stay total even for values validate() rejects
    assert_eq!(oversized.duration_seconds(), u32::MAX);

    assert!(Config::default().validate().is_ok());
}
