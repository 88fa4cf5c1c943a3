//! # authz-core
//!
//! Core utilities shared by the authorization engine crates.
//!
//! - [`config`] - engine configuration loaded from the environment
//! - [`error`] - the core error type
//! - [`timestamp`] - stateless UTC timestamp formatting and its serde adapter

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod timestamp;

pub use config::EngineConfig;
pub use error::{Error, Result};
