//! Post-test baseline verification of per-node memory and cache counters.
//!
//! A well-behaved test leaves every node with zeroed field-data, query-cache
//! and bitset counters. The checker only detects leftovers; it never reclaims
//! or resets anything.

use std::fmt;

use crate::admin::ClusterAdmin;
use crate::error::HarnessError;
use crate::proto::admin::DescribeNodeStatsRequest;
use crate::scoped_timer::ScopedTimer;

/// Per-node counters that must read zero between test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineMetric {
    FielddataBreakerEstimate,
    FielddataMemory,
    QueryCacheMemory,
    BitsetMemory,
}

impl fmt::Display for BaselineMetric {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            BaselineMetric::FielddataBreakerEstimate => "fielddata breaker estimate",
            BaselineMetric::FielddataMemory => "fielddata size",
            BaselineMetric::QueryCacheMemory => "query cache size",
            BaselineMetric::BitsetMemory => "fixed bitset cache size",
        };
        write!(f, "{name}")
    }
}

/// A counter that should have been zero, with the offending node named.
#[derive(Debug, thiserror::Error)]
#[error("{metric} must be 0 on node [{node_id}], found {observed}")]
pub struct InvariantViolation {
    pub node_id: String,
    pub metric: BaselineMetric,
    pub observed: i64,
}

/// Verifies that every tracked node reports zeroed memory/cache baselines.
///
/// Vacuously true when the tracked node set is empty. Otherwise issues one
/// stats call filtered to the breaker and indices-memory categories and
/// checks four independent conditions per returned node, failing on the
/// first violation.
pub(crate) async fn ensure_baseline_stats<A: ClusterAdmin + ?Sized>(
    admin: &A,
    tracked_nodes: usize,
) -> std::result::Result<(), HarnessError> {
    if tracked_nodes == 0 {
        return Ok(());
    }

    let _timer = ScopedTimer::new("ensure_baseline_stats");

    let request = DescribeNodeStatsRequest {
        breakers: true,
        indices: true,
    };
    let response =
        admin.describe_node_stats(request).await.map_err(HarnessError::Connectivity)?;

    for node in response.nodes {
        let breakers = node.breakers.unwrap_or_default();
        let indices = node.indices.unwrap_or_default();

        check(
            &node.node_id,
            BaselineMetric::FielddataBreakerEstimate,
            breakers.fielddata_estimated_bytes,
        )?;
        // The request breaker is deliberately not checked: the stats call
        // itself goes through it, so it reads non-zero by the time the
        // response is assembled.

        check(
            &node.node_id,
            BaselineMetric::FielddataMemory,
            indices.fielddata_bytes,
        )?;
        check(
            &node.node_id,
            BaselineMetric::QueryCacheMemory,
            indices.query_cache_bytes,
        )?;
        check(
            &node.node_id,
            BaselineMetric::BitsetMemory,
            indices.bitset_bytes,
        )?;
    }

    Ok(())
}

fn check(
    node_id: &str,
    metric: BaselineMetric,
    observed: i64,
) -> std::result::Result<(), HarnessError> {
    if observed != 0 {
        return Err(InvariantViolation {
            node_id: node_id.to_string(),
            metric,
            observed,
        }
        .into());
    }
    Ok(())
}
