//! Topology discovery.
//!
//! Consumes the single `DescribeNodes` response captured during bootstrap and
//! turns it into an immutable snapshot: the authoritative cluster name plus
//! one classified descriptor per node.

use std::net::SocketAddr;

use crate::error::ConnectivityError;
use crate::proto::admin::DescribeNodesResponse;
use crate::roles::NodeDescriptor;

/// Fixed membership/role view captured once at connection time.
#[derive(Debug, Clone)]
pub struct TopologySnapshot {
    pub cluster_name: String,
    pub nodes: Vec<NodeDescriptor>,
}

impl TopologySnapshot {
    /// Parses a describe-nodes response into a snapshot.
    ///
    /// Every published HTTP address must already be a resolved host:port
    /// pair; a symbolic name or otherwise malformed address fails loud with
    /// [`ConnectivityError::MalformedAddress`] rather than being miscast.
    pub(crate) fn from_response(
        response: DescribeNodesResponse
    ) -> std::result::Result<Self, ConnectivityError> {
        let mut nodes = Vec::with_capacity(response.nodes.len());
        for info in response.nodes {
            let address: SocketAddr = info.http_address.parse().map_err(|source| {
                ConnectivityError::MalformedAddress {
                    node_id: info.node_id.clone(),
                    address: info.http_address.clone(),
                    source,
                }
            })?;
            nodes.push(NodeDescriptor::classify(info.node_id, info.settings, address));
        }

        Ok(Self {
            cluster_name: response.cluster_name,
            nodes,
        })
    }

    /// Published HTTP addresses, one per node, in response order.
    pub(crate) fn http_addresses(&self) -> Vec<SocketAddr> {
        self.nodes.iter().map(|node| node.http_address).collect()
    }
}
