//! Invocation handler.
//!
//! Every invocation makes exactly one stop request and always completes
//! normally: failures are logged and reported in the returned outcome.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info, Instrument};

use domain::{StopOutcome, MSG_STOP_FAILED, MSG_STOP_SUCCEEDED, UNSET_TARGET};

use crate::client::DbClusterControlPlane;

/// The stop-db function: a control-plane client plus the configured target.
pub struct StopDbFunction {
    control_plane: Arc<dyn DbClusterControlPlane>,
    target: Option<String>,
}

impl StopDbFunction {
    pub fn new(control_plane: Arc<dyn DbClusterControlPlane>, target: Option<String>) -> Self {
        Self {
            control_plane,
            target,
        }
    }

    /// Target cluster identifier, if configured
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Issue the stop request and report how it went. Never fails.
    pub async fn invoke(&self) -> StopOutcome {
        info!("target: {}", self.target().unwrap_or(UNSET_TARGET));

        match self.control_plane.stop_db_cluster(self.target.clone()).await {
            Ok(cluster) => {
                info!(cluster_status = ?cluster.status, "{}", MSG_STOP_SUCCEEDED);
                StopOutcome::succeeded(self.target.clone(), cluster)
            }
            Err(err) => {
                error!(error_code = err.code(), "{} {}.", MSG_STOP_FAILED, err);
                StopOutcome::failed(self.target.clone(), err.code(), err.to_string())
            }
        }
    }
}

/// Lambda entry point. The event payload carries no parameters.
pub async fn function_handler(
    function: &StopDbFunction,
    event: LambdaEvent<Value>,
) -> Result<StopOutcome, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("stop_db_cluster", request_id = %context.request_id);

    async move {
        debug!(
            source = payload.get("source").and_then(serde_json::Value::as_str),
            detail_type = payload.get("detail-type").and_then(serde_json::Value::as_str),
            "Invocation received"
        );
        Ok(function.invoke().await)
    }
    .instrument(span)
    .await
}
