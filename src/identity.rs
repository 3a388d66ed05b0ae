//! Client identity generation.
//!
//! Every harness instance needs a client name that cannot collide with any
//! other harness created in the same process, including concurrently.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Prefix shared by all transport-level test clients.
pub const TRANSPORT_CLIENT_PREFIX: &str = "transport_client_";

/// Marks clients created against an externally managed cluster.
pub const EXTERNAL_CLUSTER_PREFIX: &str = "external_";

/// Hands out process-unique client names.
///
/// Injected into [`crate::ExternalClusterBuilder`] so tests can substitute a
/// deterministic generator; the default keeps the process-wide atomic counter
/// that guarantees collision-free names across concurrently built harnesses.
pub trait IdentityGenerator: Send + Sync {
    fn next_name(&self) -> String;
}

static NEXT_CLIENT_ID: AtomicU64 = AtomicU64::new(0);

/// Default generator backed by one process-wide atomic counter.
#[derive(Debug, Default)]
pub struct CounterIdentity;

impl IdentityGenerator for CounterIdentity {
    fn next_name(&self) -> String {
        let n = NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed);
        format!("{TRANSPORT_CLIENT_PREFIX}{EXTERNAL_CLUSTER_PREFIX}{n}")
    }
}
