use kube::runtime::reflector::{self, store::Writer, ObjectRef, Store};

use crate::{
    kube::apis::{
        cluster::v1alpha1::{ClusterGateway, ClusterGatewayList},
        DeepCopy, Object, RuntimeObject,
    },
    logger,
};

/// Read side of the informer cache holding ClusterGateway objects.
///
/// Cached objects are shared between every reader, so nothing here hands out a
/// reference into the store. Each accessor returns a deep copy the caller owns.
#[derive(Clone)]
pub struct GatewayCache {
    store: Store<ClusterGateway>,
}

impl GatewayCache {
    /// Creates an empty cache together with the writer that feeds it.
    pub fn new() -> (Self, Writer<ClusterGateway>) {
        let (store, writer) = reflector::store();
        (Self { store }, writer)
    }

    pub fn from_store(store: Store<ClusterGateway>) -> Self {
        Self { store }
    }

    pub fn get(&self, name: &str) -> Option<ClusterGateway> {
        let cached = self.store.get(&ObjectRef::new(name));

        logger!(
            trace,
            "copy out ClusterGateway name={} found={}",
            name,
            cached.is_some()
        );

        cached.map(|gw| gw.deep_copy())
    }

    pub fn get_object(&self, name: &str) -> Option<RuntimeObject> {
        let cached = self.store.get(&ObjectRef::new(name));

        logger!(
            trace,
            "copy out runtime object ClusterGateway name={} found={}",
            name,
            cached.is_some()
        );

        ClusterGateway::deep_copy_object(cached.as_deref())
    }

    /// Deep copies every cached gateway, ordered by name.
    pub fn list(&self) -> ClusterGatewayList {
        let mut items: Vec<ClusterGateway> = self
            .store
            .state()
            .iter()
            .map(|gw| gw.deep_copy())
            .collect();

        items.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

        logger!(trace, "copy out ClusterGatewayList len={}", items.len());

        ClusterGatewayList {
            items: Some(items),
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
