use serde::Deserialize;
use std::env;

use crate::errors::CoreError;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;
pub const DEFAULT_HINT_COST_MINUTES: u32 = 5;
pub const DEFAULT_WRONG_SUBMISSION_PENALTY_MINUTES: u32 = 2;
pub const DEFAULT_EXECUTION_API_URL: &str = "http://localhost:8080/api";

/// Largest minute value whose second count still fits in `u32`.
pub const MAX_MINUTES: u32 = u32::MAX / 60;

/// Timing parameters and the execution-service endpoint for one session.
///
/// Timing values outside `1..=MAX_MINUTES` are rejected at load time; a
/// session never discovers a broken configuration mid-countdown.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub duration_minutes: u32,
    pub hint_cost_minutes: u32,
    pub wrong_submission_penalty_minutes: u32,
    /// Whether a failed submit in playground mode (no stored hidden cases)
    /// still costs the wrong-submission penalty.
    pub playground_penalty_enabled: bool,
    pub execution_api_url: String,
}

impl Config {
    pub fn load() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let duration_minutes = read_minutes(
            &settings,
            "session.duration_minutes",
            "INTERVIEW_DURATION_MINUTES",
            DEFAULT_DURATION_MINUTES,
        )?;

        let hint_cost_minutes = read_minutes(
            &settings,
            "session.hint_cost_minutes",
            "HINT_COST_MINUTES",
            DEFAULT_HINT_COST_MINUTES,
        )?;

        let wrong_submission_penalty_minutes = read_minutes(
            &settings,
            "session.wrong_submission_penalty_minutes",
            "WRONG_SUBMISSION_PENALTY_MINUTES",
            DEFAULT_WRONG_SUBMISSION_PENALTY_MINUTES,
        )?;

        let playground_penalty_enabled = settings
            .get_bool("session.playground_penalty_enabled")
            .ok()
            .unwrap_or_else(|| {
                matches!(
                    env::var("PLAYGROUND_PENALTY_ENABLED").as_deref(),
                    Ok("1") | Ok("true")
                )
            });

        let execution_api_url = settings
            .get_string("execution.api_url")
            .or_else(|_| env::var("EXECUTION_API_URL"))
            .unwrap_or_else(|_| DEFAULT_EXECUTION_API_URL.to_string());

        Ok(Config {
            duration_minutes,
            hint_cost_minutes,
            wrong_submission_penalty_minutes,
            playground_penalty_enabled,
            execution_api_url,
        })
    }

    /// Rejects configurations a session must not start with.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_minutes(self.duration_minutes, "session duration")?;
        check_minutes(self.hint_cost_minutes, "hint unlock cost")?;
        check_minutes(
            self.wrong_submission_penalty_minutes,
            "wrong-submission penalty",
        )?;
        Ok(())
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    pub fn hint_cost_seconds(&self) -> u32 {
        self.hint_cost_minutes.saturating_mul(60)
    }

    pub fn wrong_submission_penalty_seconds(&self) -> u32 {
        self.wrong_submission_penalty_minutes.saturating_mul(60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            hint_cost_minutes: DEFAULT_HINT_COST_MINUTES,
            wrong_submission_penalty_minutes: DEFAULT_WRONG_SUBMISSION_PENALTY_MINUTES,
            playground_penalty_enabled: false,
            execution_api_url: DEFAULT_EXECUTION_API_URL.to_string(),
        }
    }
}

/// Reads a minute-valued parameter from the layered settings, then the plain
/// environment variable, then the documented default. A value that is present
/// but not a positive integer is a configuration error, not a fallback.
fn read_minutes(
    settings: &config::Config,
    key: &str,
    env_key: &str,
    default: u32,
) -> Result<u32, CoreError> {
    let raw = match settings.get_int(key) {
        Ok(value) => Some(value),
        Err(_) => match env::var(env_key) {
            Ok(value) => Some(value.parse::<i64>().map_err(|_| {
                CoreError::InvalidConfig(format!(
                    "{} must be an integer, got {:?}",
                    env_key, value
                ))
            })?),
            Err(_) => None,
        },
    };

    match raw {
        Some(value) if value > 0 && value <= i64::from(MAX_MINUTES) => Ok(value as u32),
        Some(value) => Err(CoreError::InvalidConfig(format!(
            "{} must be between 1 and {}, got {}",
            env_key, MAX_MINUTES, value
        ))),
        None => Ok(default),
    }
}

fn check_minutes(value: u32, what: &str) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::InvalidConfig(format!(
            "{} must be positive",
            what
        )));
    }
    if value > MAX_MINUTES {
        return Err(CoreError::InvalidConfig(format!(
            "{} must be at most {} minutes, got {}",
            what, MAX_MINUTES, value
        )));
    }
    Ok(())
}
