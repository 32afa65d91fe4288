//! Entity generators for test data.
//!
//! - [`UserGenerator`]: Generate users with per-mode purchase histories

pub mod user;

pub use user::{PaymentModel, UserGenConfig, UserGenerator};
