use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tonic::codec::CompressionEncoding;
use tonic_health::server::health_reporter;
use tracing::debug;
use tracing::info;

use crate::mock_admin::MockAdminService;
use crate::proto::admin::DescribeNodeStatsResponse;
use crate::proto::admin::DescribeNodesResponse;
use crate::proto::admin::NodeInfo;
use crate::proto::admin::cluster_admin_service_server::ClusterAdminServiceServer;

pub struct MockNode;

impl MockNode {
    pub async fn mock_listener(
        mut mock_service: MockAdminService,
        rx: oneshot::Receiver<()>,
        is_ready: bool,
    ) -> std::result::Result<(u16, SocketAddr), tonic::Status> {
        // Return port + address
        let (mut health_reporter, health_service) = health_reporter();
        if is_ready {
            health_reporter
                .set_serving::<ClusterAdminServiceServer<MockAdminService>>()
                .await;
            info!("set service is serving");
        } else {
            health_reporter
                .set_not_serving::<ClusterAdminServiceServer<MockAdminService>>()
                .await;
            info!("set service is not serving");
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener
            .local_addr()
            .map_err(|e| tonic::Status::internal(format!("Failed to bind: {e}")))?;
        let port = addr.port();
        debug!("starting mock admin service:port={port}");

        mock_service.set_port(port);

        let mock_service = Arc::new(mock_service);

        let _r = tokio::spawn(async move {
            tonic::transport::Server::builder()
                .add_service(health_service)
                .add_service(
                    ClusterAdminServiceServer::from_arc(mock_service)
                        .accept_compressed(CompressionEncoding::Gzip)
                        .send_compressed(CompressionEncoding::Gzip),
                )
                .serve_with_incoming_shutdown(
                    tokio_stream::wrappers::TcpListenerStream::new(listener),
                    async {
                        rx.await.ok();
                    },
                )
                .await
                .unwrap();
        });

        Ok((port, addr))
    }

    /// One-node topology pointing back at the mock's own port, used by most
    /// tests as the default cluster shape.
    pub fn single_node_topology(port: u16) -> DescribeNodesResponse {
        DescribeNodesResponse {
            cluster_name: "acceptance".to_string(),
            nodes: vec![NodeInfo {
                node_id: "node-1".to_string(),
                settings: HashMap::new(),
                http_address: format!("127.0.0.1:{port}"),
            }],
        }
    }

    #[allow(clippy::type_complexity)]
    pub async fn spawn_with_topology(
        rx: oneshot::Receiver<()>,
        response_builder: Option<
            Box<dyn Fn(u16) -> std::result::Result<DescribeNodesResponse, tonic::Status> + Send + Sync>,
        >,
    ) -> std::result::Result<u16, tonic::Status> {
        let builder = response_builder
            .unwrap_or_else(|| Box::new(|port: u16| Ok(Self::single_node_topology(port))));

        let mock_service = MockAdminService::default().with_describe_nodes_response(builder);

        let (port, _addr) = Self::mock_listener(mock_service, rx, true).await?;
        Ok(port)
    }

    pub async fn spawn_with_topology_and_stats(
        rx: oneshot::Receiver<()>,
        stats: DescribeNodeStatsResponse,
    ) -> std::result::Result<u16, tonic::Status> {
        let mock_service = MockAdminService::default()
            .with_describe_nodes_response(|port: u16| Ok(Self::single_node_topology(port)))
            .with_node_stats_response(Ok(stats));

        let (port, _addr) = Self::mock_listener(mock_service, rx, true).await?;
        Ok(port)
    }
}
