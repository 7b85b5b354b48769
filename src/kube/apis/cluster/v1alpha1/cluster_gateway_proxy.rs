/// ClusterGatewayProxy is the marker type behind the `proxy` subresource. It carries no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterGatewayProxy;

impl crate::kube::apis::DeepCopy for ClusterGatewayProxy {
    fn deep_copy(&self) -> Self {
        *self
    }
}

impl crate::kube::apis::DeepMerge for ClusterGatewayProxy {
    fn merge_from(&mut self, _other: Self) {}
}
