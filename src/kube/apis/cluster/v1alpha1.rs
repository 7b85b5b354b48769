mod cluster_access;
pub use self::cluster_access::ClusterAccess;

mod cluster_access_credential;
pub use self::cluster_access_credential::{ClusterAccessCredential, CredentialPayload, CredentialType};

mod cluster_gateway;
pub use self::cluster_gateway::ClusterGateway;

mod cluster_gateway_finalize;
pub use self::cluster_gateway_finalize::ClusterGatewayFinalize;

mod cluster_gateway_list;
pub use self::cluster_gateway_list::ClusterGatewayList;

mod cluster_gateway_proxy;
pub use self::cluster_gateway_proxy::ClusterGatewayProxy;

mod cluster_gateway_proxy_options;
pub use self::cluster_gateway_proxy_options::ClusterGatewayProxyOptions;

mod cluster_gateway_spec;
pub use self::cluster_gateway_spec::ClusterGatewaySpec;

mod cluster_gateway_status;
pub use self::cluster_gateway_status::ClusterGatewayStatus;

mod x509;
pub use self::x509::X509;
