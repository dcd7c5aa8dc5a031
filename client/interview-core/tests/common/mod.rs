use interview_core::config::Config;
use interview_core::models::StandardCase;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn test_config() -> Config {
    Config::default()
}

pub fn config_with_duration(duration_minutes: u32) -> Config {
    Config {
        duration_minutes,
        ..Config::default()
    }
}

pub fn sample_cases(count: usize) -> Vec<StandardCase> {
    (0..count)
        .map(|i| StandardCase {
            input: format!("1\n{} {}", i, i + 1),
            expected_output: format!("{}", 2 * i + 1),
            explanation: None,
        })
        .collect()
}
