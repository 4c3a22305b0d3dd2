//! Domain-level constants.
//!
//! Environment variable names and the log lines operators grep for.

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the cluster to stop
pub const ENV_DB_CLUSTER_IDENTIFIER: &str = "DB_CLUSTER_IDENTIFIER";

/// Environment variable selecting the log output format
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Log lines
// =============================================================================

/// Rendered in place of the target when no identifier is configured
pub const UNSET_TARGET: &str = "None";

/// Logged after the control plane accepted the stop request
pub const MSG_STOP_SUCCEEDED: &str = "stop db cluster succeed.";

/// Prefix of the line logged when the stop request failed
pub const MSG_STOP_FAILED: &str = "stop db cluster failed";
