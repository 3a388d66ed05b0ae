use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic::transport::Endpoint;
use tracing::debug;
use tracing::error;

use crate::admin::ClusterAdmin;
use crate::config::ClientSettings;
use crate::config::HarnessConfig;
use crate::error::ConnectivityError;
use crate::proto::admin::DescribeNodeStatsRequest;
use crate::proto::admin::DescribeNodeStatsResponse;
use crate::proto::admin::DescribeNodesRequest;
use crate::proto::admin::DescribeNodesResponse;
use crate::proto::admin::cluster_admin_service_client::ClusterAdminServiceClient;
use crate::scoped_timer::ScopedTimer;
use crate::utils::address_str;

/// gRPC implementation of [`ClusterAdmin`].
///
/// Holds one channel to the seed node that answered the bootstrap probe.
/// Tonic channels are thread-safe and reference-counted, so the client can be
/// shared by concurrent test threads without extra locking.
#[derive(Clone)]
pub struct GrpcAdminClient {
    channel: Channel,
    settings: ClientSettings,
    config: HarnessConfig,
}

impl std::fmt::Debug for GrpcAdminClient {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("GrpcAdminClient").field("name", &self.settings.name).finish()
    }
}

impl GrpcAdminClient {
    /// Connects to the first seed that answers a narrow topology probe.
    ///
    /// Seeds are tried in order; a seed that fails to connect or rejects the
    /// probe is skipped. The probe response is returned alongside the client
    /// so discovery does not have to issue a second administrative call.
    pub(crate) async fn connect(
        seeds: &[String],
        settings: ClientSettings,
        config: HarnessConfig,
    ) -> std::result::Result<(Self, DescribeNodesResponse), ConnectivityError> {
        let _timer = ScopedTimer::new("connect");

        for addr in seeds {
            let channel = match Self::create_channel(addr.clone(), &config).await {
                Ok(channel) => channel,
                Err(e) => {
                    error!("seed {:?} unreachable: {:?}", &addr, e);
                    continue;
                }
            };

            let mut rpc = ClusterAdminServiceClient::new(channel.clone());
            if config.enable_compression {
                rpc = rpc
                    .send_compressed(CompressionEncoding::Gzip)
                    .accept_compressed(CompressionEncoding::Gzip);
            }

            // Narrow filter: settings and http sections only, bounding the
            // response size.
            let probe = DescribeNodesRequest {
                settings: true,
                http: true,
            };
            match rpc.describe_nodes(tonic::Request::new(probe)).await {
                Ok(response) => {
                    debug!("harness client [{}] attached via {}", settings.name, addr);
                    let client = Self {
                        channel,
                        settings,
                        config,
                    };
                    return Ok((client, response.into_inner()));
                }
                Err(status) => {
                    error!("describe_nodes on {:?} failed: {:?}", &addr, status);
                    continue;
                }
            }
        }

        Err(ConnectivityError::ClusterUnreachable {
            tried: seeds.to_vec(),
        })
    }

    async fn create_channel(
        addr: String,
        config: &HarnessConfig,
    ) -> std::result::Result<Channel, ConnectivityError> {
        debug!("create_channel, addr = {:?}", &addr);
        Endpoint::try_from(address_str(&addr))?
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .tcp_keepalive(Some(config.tcp_keepalive))
            .http2_keep_alive_interval(config.http2_keepalive_interval)
            .keep_alive_timeout(config.http2_keepalive_timeout)
            .connect()
            .await
            .map_err(Into::into)
    }

    fn admin_rpc(&self) -> ClusterAdminServiceClient<Channel> {
        let mut rpc = ClusterAdminServiceClient::new(self.channel.clone());
        if self.config.enable_compression {
            rpc = rpc
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
        }
        rpc
    }

    /// Process-unique client name assigned at construction.
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    /// Settings this client was assembled with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl ClusterAdmin for GrpcAdminClient {
    async fn describe_nodes(
        &self,
        request: DescribeNodesRequest,
    ) -> std::result::Result<DescribeNodesResponse, ConnectivityError> {
        self.admin_rpc()
            .describe_nodes(tonic::Request::new(request))
            .await
            .map(tonic::Response::into_inner)
            .map_err(Into::into)
    }

    async fn describe_node_stats(
        &self,
        request: DescribeNodeStatsRequest,
    ) -> std::result::Result<DescribeNodeStatsResponse, ConnectivityError> {
        self.admin_rpc()
            .describe_node_stats(tonic::Request::new(request))
            .await
            .map(tonic::Response::into_inner)
            .map_err(Into::into)
    }

    async fn close(&self) -> std::result::Result<(), ConnectivityError> {
        // Tonic tears the connection down when the last channel clone drops;
        // the hook exists so callers release the client at a defined point.
        debug!("releasing harness client [{}]", self.settings.name);
        Ok(())
    }
}
