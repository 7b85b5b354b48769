pub mod cluster;

mod deep_copy;
mod runtime;

pub use deep_copy::DeepCopy;
pub use runtime::{Object, RuntimeObject};

pub use k8s_openapi::{
    apimachinery, merge_strategies, serde, ByteString, ClusterResourceScope, DeepMerge,
    ListableResource, Metadata, Resource, SubResourceScope,
};
