//! RDS control-plane client.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_rds::Client as RdsClient;
use tracing::debug;

use common::{AppResult, AwsClientConfig};
use domain::StoppedCluster;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cluster operations the function needs from the control plane.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DbClusterControlPlane: Send + Sync {
    /// Request that a DB cluster be stopped.
    ///
    /// An absent identifier is forwarded unset and left for the control plane
    /// to reject.
    async fn stop_db_cluster(&self, identifier: Option<String>) -> AppResult<StoppedCluster>;
}

/// SDK-backed control-plane client.
pub struct RdsControlPlane {
    client: RdsClient,
}

impl RdsControlPlane {
    /// Build a client from the default AWS configuration chain.
    pub async fn connect(overrides: &AwsClientConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &overrides.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &overrides.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        debug!(
            region = ?config.region(),
            "RDS control-plane client configured"
        );

        Self {
            client: RdsClient::new(&config),
        }
    }

    /// Wrap an existing SDK client.
    pub fn from_client(client: RdsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DbClusterControlPlane for RdsControlPlane {
    async fn stop_db_cluster(&self, identifier: Option<String>) -> AppResult<StoppedCluster> {
        let output = self
            .client
            .stop_db_cluster()
            .set_db_cluster_identifier(identifier)
            .send()
            .await?;

        let cluster = output.db_cluster();
        Ok(StoppedCluster {
            identifier: cluster
                .and_then(|c| c.db_cluster_identifier())
                .map(str::to_string),
            status: cluster.and_then(|c| c.status()).map(str::to_string),
        })
    }
}
