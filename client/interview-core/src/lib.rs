//! Session timing and result reconciliation core for a timed
//! coding-assessment client.
//!
//! A session holds a countdown budget, a hint gate that can be unlocked by
//! paying time or by the budget running out, and an ordered mix of standard
//! and user-authored test cases. Code is executed by a remote service; this
//! crate builds the wire request, matches the returned per-case results back
//! onto the cases that produced them, and applies the time penalties the
//! outcome calls for.

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use errors::CoreError;
pub use services::session_service::Session;
