//! Harness client configuration.
//!
//! Two layers: [`HarnessConfig`] carries transport knobs, [`ClientSettings`]
//! is the fully assembled, hermetic settings view handed to the client.
//! Nothing here is ever read from the process environment; tests that run in
//! parallel must not leak ambient configuration into each other.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Transport-level knobs for the harness client.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub tcp_keepalive: Duration,
    pub http2_keepalive_interval: Duration,
    pub http2_keepalive_timeout: Duration,
    pub enable_compression: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(3),
            tcp_keepalive: Duration::from_secs(300),
            http2_keepalive_interval: Duration::from_secs(60),
            http2_keepalive_timeout: Duration::from_secs(20),
            enable_compression: true,
        }
    }
}

/// Settings keys the harness always controls itself. An override supplying
/// one of these is dropped during assembly.
const RESERVED_KEYS: [&str; 4] = [
    "client.name",
    "client.ignore_cluster_name",
    "client.transport_mode",
    "path.home",
];

/// Fully assembled client settings, frozen before the first connection.
///
/// The harness forces the hermetic fields regardless of what the caller
/// supplied: a process-unique name, acceptance of whatever cluster name the
/// topology reports (the real name is learned, not assumed), and a fully
/// networked transport so tests exercise the same wire path as production
/// clients.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Process-unique client name, see [`crate::IdentityGenerator`]
    pub name: String,
    /// Ephemeral scratch directory used as the client's home path
    pub home: PathBuf,
    /// Always true: the authoritative name comes from discovery
    pub ignore_cluster_name: bool,
    /// Always true: no in-process transport shortcuts
    pub network_only: bool,
    /// Identifiers of client extension modules needed to decode
    /// cluster-specific protocol extensions
    pub extensions: Vec<String>,
    /// Remaining test-scoped overrides, with reserved keys stripped
    pub overrides: HashMap<String, String>,
}

impl ClientSettings {
    pub(crate) fn assemble(
        name: String,
        home: PathBuf,
        mut overrides: HashMap<String, String>,
        extensions: Vec<String>,
    ) -> Self {
        // Overrides go in first, harness-enforced keys win.
        overrides.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Self {
            name,
            home,
            ignore_cluster_name: true,
            network_only: true,
            extensions,
            overrides,
        }
    }
}
