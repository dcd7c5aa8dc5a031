use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec,
};

lazy_static! {
    pub static ref SESSIONS_STARTED_TOTAL: IntCounter = register_int_counter!(
        "interview_sessions_started_total",
        "Total number of interview sessions started"
    )
    .unwrap();

    pub static ref HINTS_UNLOCKED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "interview_hints_unlocked_total",
        "Total number of hint unlocks",
        &["trigger"]
    )
    .unwrap();

    pub static ref EXECUTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "interview_executions_total",
        "Total number of reconciled run/submit executions",
        &["mode", "verdict"]
    )
    .unwrap();

    pub static ref PENALTY_SECONDS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "interview_penalty_seconds_total",
        "Total seconds deducted from session clocks by penalties",
        &["kind"]
    )
    .unwrap();
}

pub fn record_penalty(kind: &str, seconds: u32) {
    PENALTY_SECONDS_TOTAL
        .with_label_values(&[kind])
        .inc_by(u64::from(seconds));
}

pub fn record_execution(mode: &str, verdict: &str) {
    EXECUTIONS_TOTAL.with_label_values(&[mode, verdict]).inc();
}
