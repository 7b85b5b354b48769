/// ClusterGatewayList is a list of ClusterGateway objects.
///
/// `items` keeps the difference between an absent list and an empty one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterGatewayList {
    /// Standard list metadata. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#types-kinds
    pub metadata: crate::kube::apis::apimachinery::pkg::apis::meta::v1::ListMeta,

    pub items: Option<Vec<crate::kube::apis::cluster::v1alpha1::ClusterGateway>>,
}

impl crate::kube::apis::Resource for ClusterGatewayList {
    const API_VERSION: &'static str = <crate::kube::apis::cluster::v1alpha1::ClusterGateway as crate::kube::apis::Resource>::API_VERSION;
    const GROUP: &'static str = <crate::kube::apis::cluster::v1alpha1::ClusterGateway as crate::kube::apis::Resource>::GROUP;
    const KIND: &'static str = <crate::kube::apis::cluster::v1alpha1::ClusterGateway as crate::kube::apis::ListableResource>::LIST_KIND;
    const VERSION: &'static str = <crate::kube::apis::cluster::v1alpha1::ClusterGateway as crate::kube::apis::Resource>::VERSION;
    const URL_PATH_SEGMENT: &'static str = "";
    type Scope = crate::kube::apis::SubResourceScope;
}

impl crate::kube::apis::Metadata for ClusterGatewayList {
    type Ty = crate::kube::apis::apimachinery::pkg::apis::meta::v1::ListMeta;

    fn metadata(&self) -> &<Self as crate::kube::apis::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut<Self as crate::kube::apis::Metadata>::Ty {
        &mut self.metadata
    }
}

impl crate::kube::apis::DeepCopy for ClusterGatewayList {
    fn deep_copy(&self) -> Self {
        ClusterGatewayList {
            metadata: crate::kube::apis::DeepCopy::deep_copy(&self.metadata),
            items: crate::kube::apis::DeepCopy::deep_copy(&self.items),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.metadata, &mut out.metadata);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.items, &mut out.items);
    }
}

impl crate::kube::apis::DeepMerge for ClusterGatewayList {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.metadata, other.metadata);
        crate::kube::apis::merge_strategies::list::atomic(&mut self.items, other.items);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterGatewayList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_api_version,
            Key_kind,
            Key_metadata,
            Key_items,
            Other,
        }

        impl<'de> crate::kube::apis::serde::Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
                struct Visitor;

                impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
                    type Value = Field;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str("field identifier")
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> where E: crate::kube::apis::serde::de::Error {
                        Ok(match v {
                            "apiVersion" => Field::Key_api_version,
                            "kind" => Field::Key_kind,
                            "metadata" => Field::Key_metadata,
                            "items" => Field::Key_items,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterGatewayList;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self::Value as crate::kube::apis::Resource>::KIND)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_metadata: Option<crate::kube::apis::apimachinery::pkg::apis::meta::v1::ListMeta> = None;
                let mut value_items: Option<Vec<crate::kube::apis::cluster::v1alpha1::ClusterGateway>> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_api_version => {
                            let value_api_version: String = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?;
                            if value_api_version != <Self::Value as crate::kube::apis::Resource>::API_VERSION {
                                return Err(crate::kube::apis::serde::de::Error::invalid_value(crate::kube::apis::serde::de::Unexpected::Str(&value_api_version), &<Self::Value as crate::kube::apis::Resource>::API_VERSION));
                            }
                        },
                        Field::Key_kind => {
                            let value_kind: String = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?;
                            if value_kind != <Self::Value as crate::kube::apis::Resource>::KIND {
                                return Err(crate::kube::apis::serde::de::Error::invalid_value(crate::kube::apis::serde::de::Unexpected::Str(&value_kind), &<Self::Value as crate::kube::apis::Resource>::KIND));
                            }
                        },
                        Field::Key_metadata => value_metadata = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_items => value_items = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterGatewayList {
                    metadata: value_metadata.unwrap_or_default(),
                    items: value_items,
                })
            }
        }

        deserializer.deserialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            &[
                "apiVersion",
                "kind",
                "metadata",
                "items",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterGatewayList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            3 +
            self.items.as_ref().map_or(0, |_| 1),
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "apiVersion", <Self as crate::kube::apis::Resource>::API_VERSION)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "kind", <Self as crate::kube::apis::Resource>::KIND)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "metadata", &self.metadata)?;
        if let Some(value) = &self.items {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "items", value)?;
        }
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kube::apis::{
        apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
        cluster::v1alpha1::{ClusterAccess, ClusterGateway, ClusterGatewaySpec},
        ByteString, DeepCopy, Object, RuntimeObject,
    };

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn gateway(name: &str) -> ClusterGateway {
        ClusterGateway {
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            spec: ClusterGatewaySpec {
                access: ClusterAccess {
                    endpoint: format!("https://{name}:6443"),
                    ca_bundle: Some(ByteString(name.as_bytes().to_vec())),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn list() -> ClusterGatewayList {
        ClusterGatewayList {
            metadata: ListMeta {
                resource_version: Some("42".into()),
                ..Default::default()
            },
            items: Some(vec![gateway("a"), gateway("b"), gateway("c")]),
        }
    }

    #[test]
    fn copy_keeps_order_and_length() {
        let src = list();

        let actual = src.deep_copy();

        assert_eq!(actual, src);
        assert_eq!(
            actual
                .items
                .iter()
                .flatten()
                .map(|gw| gw.metadata.name.as_deref())
                .collect::<Vec<_>>(),
            vec![Some("a"), Some("b"), Some("c")]
        );
    }

    #[test]
    fn mutating_copied_element_leaves_source_alone() {
        let src = list();

        let mut actual = src.deep_copy();
        if let Some(first) = actual.items.as_mut().and_then(|items| items.first_mut()) {
            first.metadata.name = Some("renamed".into());
            first.spec.access.ca_bundle = Some(ByteString(vec![]));
        }

        assert_eq!(src, list());
        assert_eq!(src.items.as_ref().map(|items| &items[0]), Some(&gateway("a")));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(vec![]))]
    fn absent_and_empty_items_stay_distinct(#[case] items: Option<Vec<ClusterGateway>>) {
        let src = ClusterGatewayList {
            items,
            ..Default::default()
        };

        assert_eq!(src.deep_copy().items, src.items);
    }

    #[test]
    fn copy_into_drops_extra_elements() {
        let src = ClusterGatewayList {
            items: Some(vec![gateway("x")]),
            ..Default::default()
        };
        let mut out = list();

        src.deep_copy_into(&mut out);

        assert_eq!(out, src);
    }

    #[test]
    fn deep_copy_object_returns_list_handle() {
        let src = list();

        assert_eq!(
            ClusterGatewayList::deep_copy_object(Some(&src)),
            Some(RuntimeObject::ClusterGatewayList(list()))
        );
        assert_eq!(ClusterGatewayList::deep_copy_object(None), None);
    }

    #[rstest]
    #[case(ClusterGatewayList::default(), r#"{"apiVersion":"cluster.core.oam.dev/v1alpha1","kind":"ClusterGatewayList","metadata":{}}"#)]
    #[case(ClusterGatewayList { items: Some(vec![]), ..Default::default() }, r#"{"apiVersion":"cluster.core.oam.dev/v1alpha1","kind":"ClusterGatewayList","metadata":{},"items":[]}"#)]
    fn wire_shape_keeps_absent_and_empty_items(#[case] src: ClusterGatewayList, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&src).unwrap(), json);
        assert_eq!(serde_json::from_str::<ClusterGatewayList>(json).unwrap(), src);
    }
}
