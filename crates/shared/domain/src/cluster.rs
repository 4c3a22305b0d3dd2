//! Cluster stop result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cluster state reported by the control plane after accepting a stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoppedCluster {
    pub identifier: Option<String>,
    /// Lifecycle status at the time of the response (usually `stopping`)
    pub status: Option<String>,
}

/// Whether the stop request was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Succeeded => write!(f, "succeeded"),
            OutcomeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Body returned from every invocation, whichever way the stop went.
#[derive(Debug, Clone, Serialize)]
pub struct StopOutcome {
    pub status: OutcomeStatus,
    /// Identifier the request was issued for (None when unconfigured)
    pub target: Option<String>,
    /// Identifier echoed back by the control plane
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl StopOutcome {
    /// Outcome for an accepted stop request
    pub fn succeeded(target: Option<String>, cluster: StoppedCluster) -> Self {
        Self {
            status: OutcomeStatus::Succeeded,
            target,
            cluster_identifier: cluster.identifier,
            cluster_status: cluster.status,
            error_code: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Outcome for a rejected or undeliverable stop request
    pub fn failed(
        target: Option<String>,
        error_code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            target,
            cluster_identifier: None,
            cluster_status: None,
            error_code: Some(error_code.into()),
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}
