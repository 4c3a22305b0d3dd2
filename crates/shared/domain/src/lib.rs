//! Domain layer - Types describing a cluster stop request and its outcome.
//!
//! This crate contains pure domain types with no AWS or runtime dependencies.
//! They are shared between the control-plane client and the function handler.

pub mod cluster;
pub mod constants;

pub use cluster::{OutcomeStatus, StopOutcome, StoppedCluster};
pub use constants::*;
