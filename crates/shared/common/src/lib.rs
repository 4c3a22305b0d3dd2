//! Common utilities shared across functions.
//!
//! This crate provides:
//! - Unified error handling with stable error codes
//! - Configuration structures
//! - Classification of RDS control-plane errors (feature `rds`)

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
