//! Node role classification.
//!
//! Roles are derived from each node's settings map exactly once, at discovery
//! time. If live roles change afterwards the counts become stale; that is a
//! documented limitation of the snapshot model, not something the harness
//! corrects.

use std::collections::HashMap;
use std::net::SocketAddr;

pub(crate) const DATA_ROLE_SETTING: &str = "node.data";
pub(crate) const MASTER_ROLE_SETTING: &str = "node.master";

/// One discovered node with its derived roles.
///
/// Transient: consumed during classification and count aggregation, not
/// retained by the fixture handle.
#[derive(Debug, Clone)]
pub struct NodeDescriptor {
    pub node_id: String,
    pub settings: HashMap<String, String>,
    pub http_address: SocketAddr,
    pub is_data: bool,
    pub is_master_eligible: bool,
}

impl NodeDescriptor {
    pub(crate) fn classify(
        node_id: String,
        settings: HashMap<String, String>,
        http_address: SocketAddr,
    ) -> Self {
        let is_data = role_enabled(&settings, DATA_ROLE_SETTING);
        let is_master_eligible = role_enabled(&settings, MASTER_ROLE_SETTING);
        Self {
            node_id,
            settings,
            http_address,
            is_data,
            is_master_eligible,
        }
    }
}

/// Role settings default to enabled when absent; only an explicit "false"
/// disables a role.
fn role_enabled(
    settings: &HashMap<String, String>,
    key: &str,
) -> bool {
    settings.get(key).map_or(true, |v| v.trim() != "false")
}

/// Aggregated role counts, frozen at discovery time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub data_nodes: usize,
    pub data_or_master_nodes: usize,
}

impl RoleCounts {
    /// A node that is both data and master-eligible lands exactly once in the
    /// combined bucket.
    pub(crate) fn tally(nodes: &[NodeDescriptor]) -> Self {
        let mut counts = Self::default();
        for node in nodes {
            if node.is_data {
                counts.data_nodes += 1;
                counts.data_or_master_nodes += 1;
            } else if node.is_master_eligible {
                counts.data_or_master_nodes += 1;
            }
        }
        counts
    }
}
