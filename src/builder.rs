use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::admin::ClusterAdmin;
use crate::cluster::ExternalCluster;
use crate::config::ClientSettings;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::grpc_admin::GrpcAdminClient;
use crate::identity::CounterIdentity;
use crate::identity::IdentityGenerator;
use crate::topology::TopologySnapshot;

/// Configurable builder for [`ExternalCluster`] handles.
///
/// # Typical Usage Flow
/// 1. Create with `ExternalClusterBuilder::new()`
/// 2. Chain configuration methods
/// 3. Finalize with `.build()`
///
/// Construction runs bootstrap, discovery and classification to completion
/// before the handle is returned; no caller ever observes a partially
/// initialized fixture.
pub struct ExternalClusterBuilder {
    seeds: Vec<String>,
    scratch_dir: PathBuf,
    overrides: HashMap<String, String>,
    extensions: Vec<String>,
    identity: Arc<dyn IdentityGenerator>,
    config: HarnessConfig,
}

impl ExternalClusterBuilder {
    /// Create a new builder with default config and the given seed addresses.
    ///
    /// # Panics
    /// Will panic if no seed address is provided
    pub fn new(seeds: Vec<String>) -> Self {
        assert!(!seeds.is_empty(), "At least one seed address required");
        Self {
            seeds,
            scratch_dir: std::env::temp_dir(),
            overrides: HashMap::new(),
            extensions: Vec::new(),
            identity: Arc::new(CounterIdentity),
            config: HarnessConfig::default(),
        }
    }

    /// Ephemeral scratch directory used as the client's home path.
    pub fn scratch_dir(
        mut self,
        dir: impl Into<PathBuf>,
    ) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Adds one test-scoped setting override.
    ///
    /// Harness-enforced settings always win over overrides, see
    /// [`ClientSettings`].
    pub fn override_setting(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Merges a whole map of test-scoped setting overrides.
    pub fn overrides(
        mut self,
        overrides: HashMap<String, String>,
    ) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Registers a client extension module needed to decode cluster-specific
    /// protocol extensions.
    pub fn extension(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.extensions.push(id.into());
        self
    }

    /// Swaps the default process-wide counter identity for an injected
    /// generator.
    pub fn identity_generator(
        mut self,
        identity: Arc<dyn IdentityGenerator>,
    ) -> Self {
        self.identity = identity;
        self
    }

    /// Set connection timeout (default: 1s)
    pub fn connect_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set request timeout (default: 3s)
    pub fn request_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Completely replaces the default transport configuration.
    pub fn set_config(
        mut self,
        config: HarnessConfig,
    ) -> Self {
        self.config = config;
        self
    }

    /// Connects, discovers topology once, classifies roles, and returns the
    /// immutable handle.
    ///
    /// Any failure after the client exists releases the partially built
    /// client before the error propagates; no network resources leak on any
    /// exit path.
    pub async fn build(self) -> Result<ExternalCluster> {
        let settings = ClientSettings::assemble(
            self.identity.next_name(),
            self.scratch_dir,
            self.overrides,
            self.extensions,
        );

        let (client, response) =
            GrpcAdminClient::connect(&self.seeds, settings, self.config).await?;

        match TopologySnapshot::from_response(response) {
            Ok(snapshot) => Ok(ExternalCluster::new(client, snapshot)),
            Err(e) => {
                if let Err(close_err) = client.close().await {
                    warn!("failed to release partial client: {close_err}");
                }
                Err(e.into())
            }
        }
    }
}
