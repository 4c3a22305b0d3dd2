//! Unified error handling for control-plane calls.
//!
//! Provides a single error type carrying the full failure detail plus a
//! stable code that is reported back in invocation responses.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Control-plane rejections
    #[error("DB cluster not found: {0}")]
    ClusterNotFound(String),

    #[error("DB cluster is not in a stoppable state: {0}")]
    InvalidClusterState(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Control-plane error: {0}")]
    Service(String),

    // Network
    #[error("Control plane unreachable: {0}")]
    Transport(String),

    // Startup
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for responses
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ClusterNotFound(_) => "CLUSTER_NOT_FOUND",
            AppError::InvalidClusterState(_) => "INVALID_CLUSTER_STATE",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Service(_) => "SERVICE_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// RDS SDK Error Conversion
// =============================================================================

#[cfg(feature = "rds")]
mod rds {
    use aws_sdk_rds::error::{DisplayErrorContext, SdkError};
    use aws_sdk_rds::operation::stop_db_cluster::StopDBClusterError;

    use super::AppError;

    impl From<SdkError<StopDBClusterError>> for AppError {
        fn from(err: SdkError<StopDBClusterError>) -> Self {
            let detail = DisplayErrorContext(&err).to_string();
            match &err {
                SdkError::ServiceError(context) => classify_service_error(context.err(), detail),
                SdkError::ConstructionFailure(_) => AppError::InvalidRequest(detail),
                SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
                    AppError::Transport(detail)
                }
                _ => AppError::Service(detail),
            }
        }
    }

    /// Map a modeled StopDBCluster fault onto an error variant.
    pub(super) fn classify_service_error(err: &StopDBClusterError, detail: String) -> AppError {
        if err.is_db_cluster_not_found_fault() {
            AppError::ClusterNotFound(detail)
        } else if err.is_invalid_db_cluster_state_fault() || err.is_invalid_db_instance_state_fault()
        {
            AppError::InvalidClusterState(detail)
        } else {
            AppError::Service(detail)
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
