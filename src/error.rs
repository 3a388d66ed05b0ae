//! Harness error hierarchy.
//!
//! Construction-time failures are fatal: no half-initialized handle is ever
//! returned. Invariant-check failures identify the specific node and metric.
//! Nothing in this crate retries automatically; for test tooling, masking a
//! failure would hide a genuine defect under test.

use std::net::AddrParseError;

use crate::stats::InvariantViolation;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Transport or administrative RPC failures
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    /// A post-test baseline invariant did not hold on some node
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectivityError {
    /// Every seed endpoint was tried and none answered the topology probe
    /// within the client's timeout
    #[error("no seed endpoint responded: {tried:?}")]
    ClusterUnreachable { tried: Vec<String> },

    /// A node published an HTTP address that is not a resolved host:port pair
    #[error("node [{node_id}] published malformed http address {address:?}")]
    MalformedAddress {
        node_id: String,
        address: String,
        #[source]
        source: AddrParseError,
    },

    /// Channel establishment failure (unreachable endpoint, invalid URI)
    #[error("transport failure: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Administrative call rejected by the node
    #[error("administrative call failed: {0}")]
    Rpc(#[from] tonic::Status),
}
