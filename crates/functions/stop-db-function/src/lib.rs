//! Stop DB Function Library
//!
//! A scheduled function that asks the RDS control plane to stop one DB
//! cluster. Failures are logged and swallowed; the invocation always
//! completes normally.

pub mod client;
pub mod config;
pub mod handler;
pub mod logging;

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use domain::StopOutcome;

use crate::client::RdsControlPlane;
use crate::config::StopDbFunctionConfig;
use crate::handler::{function_handler, StopDbFunction};

/// Build the function from configuration. The client is created once per
/// execution environment and shared by every invocation.
pub async fn build_function(config: &StopDbFunctionConfig) -> StopDbFunction {
    let control_plane = RdsControlPlane::connect(&config.aws).await;
    StopDbFunction::new(
        Arc::new(control_plane),
        config.db_cluster_identifier.clone(),
    )
}

/// Run the Lambda runtime loop until the platform shuts the environment down.
pub async fn run_lambda(config: StopDbFunctionConfig) -> Result<(), Error> {
    let function = build_function(&config).await;
    info!("Stop-db function ready");

    let function = &function;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(function, event).await
    }))
    .await
}

/// Run a single invocation locally, outside the Lambda runtime.
pub async fn invoke_once(config: StopDbFunctionConfig) -> StopOutcome {
    let function = build_function(&config).await;
    function.invoke().await
}
