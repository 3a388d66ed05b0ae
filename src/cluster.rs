use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::admin::ClusterAdmin;
use crate::error::Result;
use crate::grpc_admin::GrpcAdminClient;
use crate::roles::RoleCounts;
use crate::stats;
use crate::topology::TopologySnapshot;

/// Immutable fixture handle over a pre-existing, externally managed cluster.
///
/// Constructed once by [`crate::ExternalClusterBuilder`]; topology and role
/// counts are frozen at that point and safe for unsynchronized concurrent
/// reads by multiple test threads. The underlying client is internally
/// thread-safe, the handle adds no locking of its own.
#[derive(Debug)]
pub struct ExternalCluster {
    client: Arc<GrpcAdminClient>,
    cluster_name: String,
    http_addresses: Vec<SocketAddr>,
    counts: RoleCounts,
}

impl ExternalCluster {
    pub(crate) fn new(
        client: GrpcAdminClient,
        snapshot: TopologySnapshot,
    ) -> Self {
        let counts = RoleCounts::tally(&snapshot.nodes);
        let handle = Self {
            client: Arc::new(client),
            http_addresses: snapshot.http_addresses(),
            cluster_name: snapshot.cluster_name,
            counts,
        };
        info!(
            "Setup external cluster [{}] made of [{}] nodes",
            handle.cluster_name,
            handle.size()
        );
        handle
    }

    /// Number of nodes in the topology snapshot.
    pub fn size(&self) -> usize {
        self.http_addresses.len()
    }

    /// Data nodes at discovery time.
    pub fn num_data_nodes(&self) -> usize {
        self.counts.data_nodes
    }

    /// Nodes that are data nodes, master-eligible, or both. A node holding
    /// both roles is counted once.
    pub fn num_data_and_master_nodes(&self) -> usize {
        self.counts.data_or_master_nodes
    }

    /// Published HTTP addresses, frozen at discovery time.
    pub fn http_addresses(&self) -> &[SocketAddr] {
        &self.http_addresses
    }

    /// Cluster name as reported live at discovery, regardless of any name
    /// assumed before connecting.
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    /// The single administrative client owned by this harness.
    pub fn client(&self) -> &GrpcAdminClient {
        &self.client
    }

    /// All clients owned by this harness. Always exactly one entry here;
    /// shaped as a collection to line up with harnesses that manage one
    /// client per node.
    pub fn clients(&self) -> Vec<Arc<GrpcAdminClient>> {
        vec![Arc::clone(&self.client)]
    }

    /// Per-test reset hook.
    ///
    /// Intentionally empty: this harness does not own the cluster lifecycle
    /// and performs no per-test reset.
    pub fn after_test(&self) {}

    /// Asserts zeroed memory/cache baselines on every tracked node.
    ///
    /// Callable any number of times, typically once per test case. See
    /// [`crate::BaselineMetric`] for the checked counters.
    pub async fn ensure_estimated_stats(&self) -> Result<()> {
        stats::ensure_baseline_stats(self.client.as_ref(), self.size()).await
    }

    /// Releases the client.
    ///
    /// Consuming the handle makes a double close unrepresentable. Failures
    /// propagate to the caller unmodified.
    pub async fn close(self) -> Result<()> {
        self.client.close().await.map_err(Into::into)
    }
}
