use std::sync::Arc;

use crate::proto::admin::DescribeNodeStatsRequest;
use crate::proto::admin::DescribeNodeStatsResponse;
use crate::proto::admin::DescribeNodesRequest;
use crate::proto::admin::DescribeNodesResponse;
use crate::proto::admin::cluster_admin_service_server::ClusterAdminService;

#[derive(Clone, Default)]
pub struct MockAdminService {
    pub server_port: Option<u16>,
    // Expected responses for each method. The describe-nodes builder receives
    // the server's ephemeral port so topology responses can point back at it.
    #[allow(clippy::type_complexity)]
    pub expected_describe_nodes_response:
        Option<Arc<dyn Fn(u16) -> Result<DescribeNodesResponse, tonic::Status> + Send + Sync>>,
    pub expected_node_stats_response: Option<Result<DescribeNodeStatsResponse, tonic::Status>>,
}

impl MockAdminService {
    pub fn with_describe_nodes_response(
        mut self,
        f: impl Fn(u16) -> Result<DescribeNodesResponse, tonic::Status> + Send + Sync + 'static,
    ) -> Self {
        self.expected_describe_nodes_response = Some(Arc::new(f));
        self
    }

    pub fn with_node_stats_response(
        mut self,
        response: Result<DescribeNodeStatsResponse, tonic::Status>,
    ) -> Self {
        self.expected_node_stats_response = Some(response);
        self
    }

    pub fn set_port(
        &mut self,
        port: u16,
    ) {
        self.server_port = Some(port);
    }
}

#[tonic::async_trait]
impl ClusterAdminService for MockAdminService {
    async fn describe_nodes(
        &self,
        _request: tonic::Request<DescribeNodesRequest>,
    ) -> std::result::Result<tonic::Response<DescribeNodesResponse>, tonic::Status> {
        match (&self.expected_describe_nodes_response, self.server_port) {
            (Some(f), Some(port)) => f(port).map(tonic::Response::new),
            _ => Err(tonic::Status::unimplemented(
                "describe_nodes response not configured",
            )),
        }
    }

    async fn describe_node_stats(
        &self,
        _request: tonic::Request<DescribeNodeStatsRequest>,
    ) -> std::result::Result<tonic::Response<DescribeNodeStatsResponse>, tonic::Status> {
        match &self.expected_node_stats_response {
            Some(Ok(response)) => Ok(tonic::Response::new(response.clone())),
            Some(Err(status)) => Err(status.clone()),
            None => Err(tonic::Status::unknown(
                "No mock describe_node_stats response set",
            )),
        }
    }
}
