//! # cluster-harness
//!
//! Test-fixture harness for integration testing against a pre-existing,
//! externally managed distributed cluster.
//!
//! The harness treats the cluster as a black box: it never starts, stops or
//! reconfigures nodes. It connects a hermetic, uniquely named client to a set
//! of seed endpoints, snapshots the topology and node roles exactly once, and
//! then lets test code verify resource-cleanliness invariants between cases.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cluster_harness::ExternalClusterBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cluster = ExternalClusterBuilder::new(vec!["127.0.0.1:9300".into()])
//!         .scratch_dir(std::env::temp_dir())
//!         .build()
//!         .await?;
//!
//!     assert!(cluster.size() > 0);
//!
//!     // ... run a test case against cluster.client() ...
//!
//!     // Between test cases: every node must be back at zeroed baselines.
//!     cluster.ensure_estimated_stats().await?;
//!
//!     cluster.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## What this crate provides
//!
//! - [`ExternalClusterBuilder`] - hermetic client construction and topology
//!   discovery against seed endpoints
//! - [`ExternalCluster`] - the immutable fixture handle exposed to tests
//! - [`ClusterAdmin`] - capability trait over the cluster's administrative
//!   RPC surface, mockable in unit tests
//! - [`ensure_estimated_stats`](ExternalCluster::ensure_estimated_stats) -
//!   per-node zero-baseline verification of memory and cache counters
//!
//! ## Known limitations
//!
//! Topology and role counts are a snapshot frozen at connect time, not a live
//! view. If cluster roles change afterwards, the handle's counts become stale
//! by design; there is no refresh mechanism. A stalled discovery call blocks
//! its caller for as long as the configured request timeout allows.

mod admin;
mod builder;
mod cluster;
mod config;
mod error;
mod grpc_admin;
mod identity;
mod proto;
mod roles;
mod scoped_timer;
mod stats;
mod topology;
mod utils;

pub use admin::*;
pub use builder::*;
pub use cluster::*;
pub use config::*;
pub use error::*;
pub use grpc_admin::*;
pub use identity::*;
pub use roles::*;
pub use stats::*;
pub use topology::*;

// ==================== Protocol Types (Essential for Public API) ====================

/// Administrative protocol types used in the public API
///
/// These types appear in [`ClusterAdmin`] signatures and must be importable
/// by anyone implementing or mocking the trait:
/// - `DescribeNodesRequest` / `DescribeNodesResponse`: topology enumeration
/// - `DescribeNodeStatsRequest` / `DescribeNodeStatsResponse`: live node stats
pub mod protocol {
    pub use crate::proto::admin::BreakerStats;
    pub use crate::proto::admin::DescribeNodeStatsRequest;
    pub use crate::proto::admin::DescribeNodeStatsResponse;
    pub use crate::proto::admin::DescribeNodesRequest;
    pub use crate::proto::admin::DescribeNodesResponse;
    pub use crate::proto::admin::IndicesMemoryStats;
    pub use crate::proto::admin::NodeInfo;
    pub use crate::proto::admin::NodeStatsInfo;
}

#[cfg(test)]
mod mock_admin;
#[cfg(test)]
mod mock_admin_service;
