//! Control-plane clients.

mod rds_client;

pub use rds_client::{DbClusterControlPlane, RdsControlPlane};

#[cfg(any(test, feature = "test-utils"))]
pub use rds_client::MockDbClusterControlPlane;
