pub mod case_index;
pub mod clock;
pub mod execution_service;
pub mod hint_gate;
pub mod penalty;
pub mod reconciler;
pub mod session_service;
pub mod ticker;
