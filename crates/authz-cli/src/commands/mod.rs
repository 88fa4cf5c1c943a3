//! Command implementations.

pub mod authorize;
pub mod classify;
pub mod timestamp;

pub use authorize::run_authorize;
pub use classify::run_classify;
pub use timestamp::run_timestamp;
