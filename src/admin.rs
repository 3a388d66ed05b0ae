//! Capability interface over the cluster's administrative RPC surface.
//!
//! The harness only ever needs three operations from the cluster, so the
//! dependency is modeled as an explicit trait rather than a concrete client.
//! Production code uses [`crate::GrpcAdminClient`]; unit tests run against a
//! generated mock.

#[cfg(test)]
use mockall::automock;

use crate::error::ConnectivityError;
use crate::proto::admin::DescribeNodeStatsRequest;
use crate::proto::admin::DescribeNodeStatsResponse;
use crate::proto::admin::DescribeNodesRequest;
use crate::proto::admin::DescribeNodesResponse;

/// Administrative operations the harness consumes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the fixture handle is shared across
/// test threads without additional locking.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ClusterAdmin: Send + Sync {
    /// Enumerates cluster members with the given section filter.
    async fn describe_nodes(
        &self,
        request: DescribeNodesRequest,
    ) -> std::result::Result<DescribeNodesResponse, ConnectivityError>;

    /// Live per-node statistics, filtered to the requested categories.
    async fn describe_node_stats(
        &self,
        request: DescribeNodeStatsRequest,
    ) -> std::result::Result<DescribeNodeStatsResponse, ConnectivityError>;

    /// Releases transport resources. Must be called at most once.
    async fn close(&self) -> std::result::Result<(), ConnectivityError>;
}
