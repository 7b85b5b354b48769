use k8s_openapi::{
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
    Resource,
};
use kube::core::TypeMeta;
use serde::Serialize;

use crate::error::Error;

use super::{
    cluster::v1alpha1::{
        ClusterGateway, ClusterGatewayFinalize, ClusterGatewayList, ClusterGatewayProxyOptions,
    },
    DeepCopy,
};

/// Top-level resource that can be handed out as a [`RuntimeObject`].
pub trait Object: DeepCopy + Into<RuntimeObject> {
    /// Deep copies `this` into a runtime handle. An absent receiver yields an absent handle.
    fn deep_copy_object(this: Option<&Self>) -> Option<RuntimeObject> {
        this.map(|object| object.deep_copy().into())
    }
}

impl Object for ClusterGateway {}
impl Object for ClusterGatewayList {}
impl Object for ClusterGatewayFinalize {}
impl Object for ClusterGatewayProxyOptions {}

#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeObject {
    ClusterGateway(Box<ClusterGateway>),
    ClusterGatewayList(ClusterGatewayList),
    ClusterGatewayFinalize(ClusterGatewayFinalize),
    ClusterGatewayProxyOptions(ClusterGatewayProxyOptions),
}

impl RuntimeObject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClusterGateway(_) => ClusterGateway::KIND,
            Self::ClusterGatewayList(_) => ClusterGatewayList::KIND,
            Self::ClusterGatewayFinalize(_) => ClusterGatewayFinalize::KIND,
            Self::ClusterGatewayProxyOptions(_) => ClusterGatewayProxyOptions::KIND,
        }
    }

    pub fn api_version(&self) -> &'static str {
        match self {
            Self::ClusterGateway(_) => ClusterGateway::API_VERSION,
            Self::ClusterGatewayList(_) => ClusterGatewayList::API_VERSION,
            Self::ClusterGatewayFinalize(_) => ClusterGatewayFinalize::API_VERSION,
            Self::ClusterGatewayProxyOptions(_) => ClusterGatewayProxyOptions::API_VERSION,
        }
    }

    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: self.api_version().to_string(),
            kind: self.kind().to_string(),
        }
    }

    /// Object metadata, for the variants that carry one.
    pub fn metadata(&self) -> Option<&ObjectMeta> {
        match self {
            Self::ClusterGateway(gw) => Some(&gw.metadata),
            _ => None,
        }
    }

    pub fn list_metadata(&self) -> Option<&ListMeta> {
        match self {
            Self::ClusterGatewayList(list) => Some(&list.metadata),
            _ => None,
        }
    }
}

impl DeepCopy for RuntimeObject {
    fn deep_copy(&self) -> Self {
        match self {
            Self::ClusterGateway(gw) => Self::ClusterGateway(Box::new(gw.deep_copy())),
            Self::ClusterGatewayList(list) => Self::ClusterGatewayList(list.deep_copy()),
            Self::ClusterGatewayFinalize(finalize) => {
                Self::ClusterGatewayFinalize(finalize.deep_copy())
            }
            Self::ClusterGatewayProxyOptions(options) => {
                Self::ClusterGatewayProxyOptions(options.deep_copy())
            }
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        match (self, out) {
            (Self::ClusterGateway(src), Self::ClusterGateway(dst)) => src.deep_copy_into(dst),
            (Self::ClusterGatewayList(src), Self::ClusterGatewayList(dst)) => {
                src.deep_copy_into(dst)
            }
            (Self::ClusterGatewayProxyOptions(src), Self::ClusterGatewayProxyOptions(dst)) => {
                src.deep_copy_into(dst)
            }
            (src, out) => *out = src.deep_copy(),
        }
    }
}

impl Serialize for RuntimeObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::ClusterGateway(gw) => gw.serialize(serializer),
            Self::ClusterGatewayList(list) => list.serialize(serializer),
            Self::ClusterGatewayFinalize(finalize) => finalize.serialize(serializer),
            Self::ClusterGatewayProxyOptions(options) => options.serialize(serializer),
        }
    }
}

impl From<ClusterGateway> for RuntimeObject {
    fn from(value: ClusterGateway) -> Self {
        Self::ClusterGateway(Box::new(value))
    }
}

impl From<ClusterGatewayList> for RuntimeObject {
    fn from(value: ClusterGatewayList) -> Self {
        Self::ClusterGatewayList(value)
    }
}

impl From<ClusterGatewayFinalize> for RuntimeObject {
    fn from(value: ClusterGatewayFinalize) -> Self {
        Self::ClusterGatewayFinalize(value)
    }
}

impl From<ClusterGatewayProxyOptions> for RuntimeObject {
    fn from(value: ClusterGatewayProxyOptions) -> Self {
        Self::ClusterGatewayProxyOptions(value)
    }
}

impl TryFrom<RuntimeObject> for ClusterGateway {
    type Error = Error;

    fn try_from(value: RuntimeObject) -> Result<Self, Self::Error> {
        match value {
            RuntimeObject::ClusterGateway(gw) => Ok(*gw),
            other => Err(Error::UnexpectedKind {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<RuntimeObject> for ClusterGatewayList {
    type Error = Error;

    fn try_from(value: RuntimeObject) -> Result<Self, Self::Error> {
        match value {
            RuntimeObject::ClusterGatewayList(list) => Ok(list),
            other => Err(Error::UnexpectedKind {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<RuntimeObject> for ClusterGatewayFinalize {
    type Error = Error;

    fn try_from(value: RuntimeObject) -> Result<Self, Self::Error> {
        match value {
            RuntimeObject::ClusterGatewayFinalize(finalize) => Ok(finalize),
            other => Err(Error::UnexpectedKind {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<RuntimeObject> for ClusterGatewayProxyOptions {
    type Error = Error;

    fn try_from(value: RuntimeObject) -> Result<Self, Self::Error> {
        match value {
            RuntimeObject::ClusterGatewayProxyOptions(options) => Ok(options),
            other => Err(Error::UnexpectedKind {
                expected: Self::KIND,
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kube::apis::{
        cluster::v1alpha1::{ClusterAccess, ClusterGatewaySpec},
        ByteString,
    };

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn gateway() -> ClusterGateway {
        ClusterGateway {
            metadata: ObjectMeta {
                name: Some("managed-1".into()),
                ..Default::default()
            },
            spec: ClusterGatewaySpec {
                access: ClusterAccess {
                    endpoint: "https://10.0.0.1:6443".into(),
                    ca_bundle: Some(ByteString(b"ca".to_vec())),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn absent_receiver_yields_absent_handle_for_every_resource() {
        assert_eq!(ClusterGateway::deep_copy_object(None), None);
        assert_eq!(ClusterGatewayList::deep_copy_object(None), None);
        assert_eq!(ClusterGatewayFinalize::deep_copy_object(None), None);
        assert_eq!(ClusterGatewayProxyOptions::deep_copy_object(None), None);
    }

    #[rstest]
    #[case(RuntimeObject::from(gateway()), "ClusterGateway")]
    #[case(RuntimeObject::from(ClusterGatewayList::default()), "ClusterGatewayList")]
    #[case(RuntimeObject::from(ClusterGatewayFinalize), "ClusterGatewayFinalize")]
    #[case(
        RuntimeObject::from(ClusterGatewayProxyOptions::default()),
        "ClusterGatewayProxyOptions"
    )]
    fn type_meta(#[case] object: RuntimeObject, #[case] kind: &str) {
        assert_eq!(
            object.type_meta(),
            TypeMeta {
                api_version: "cluster.core.oam.dev/v1alpha1".into(),
                kind: kind.into(),
            }
        );
    }

    #[test]
    fn metadata_only_for_gateway() {
        assert_eq!(
            RuntimeObject::from(gateway())
                .metadata()
                .and_then(|m| m.name.as_deref()),
            Some("managed-1")
        );
        assert_eq!(RuntimeObject::from(ClusterGatewayFinalize).metadata(), None);
        assert!(RuntimeObject::from(ClusterGatewayList::default())
            .list_metadata()
            .is_some());
    }

    #[test]
    fn handle_copy_is_independent() {
        let src = RuntimeObject::from(gateway());

        let mut actual = src.deep_copy();
        if let RuntimeObject::ClusterGateway(gw) = &mut actual {
            gw.spec.access.ca_bundle = Some(ByteString(b"changed".to_vec()));
        }

        assert_eq!(src, RuntimeObject::from(gateway()));
    }

    #[test]
    fn copy_into_other_kind_replaces_handle() {
        let src = RuntimeObject::from(gateway());
        let mut out = RuntimeObject::from(ClusterGatewayFinalize);

        src.deep_copy_into(&mut out);

        assert_eq!(out, src);
    }

    #[test]
    fn try_from_returns_concrete_type() {
        let actual = ClusterGateway::try_from(RuntimeObject::from(gateway())).unwrap();

        assert_eq!(actual, gateway());
    }

    #[test]
    fn try_from_other_kind_fails() {
        let actual = ClusterGatewayList::try_from(RuntimeObject::from(gateway()));

        assert_eq!(
            actual.unwrap_err().to_string(),
            "UnexpectedKind: expected ClusterGatewayList, got ClusterGateway"
        );
    }

    #[test]
    fn serialize_delegates_to_resource() {
        let actual = serde_json::to_string(&RuntimeObject::from(ClusterGatewayFinalize)).unwrap();

        assert_eq!(
            actual,
            r#"{"apiVersion":"cluster.core.oam.dev/v1alpha1","kind":"ClusterGatewayFinalize"}"#
        );
    }
}
