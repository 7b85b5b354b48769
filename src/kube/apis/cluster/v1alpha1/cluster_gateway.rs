/// ClusterGateway represents a managed cluster that API requests can be proxied to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterGateway {
    /// Standard object's metadata. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#metadata
    pub metadata: crate::kube::apis::apimachinery::pkg::apis::meta::v1::ObjectMeta,

    pub spec: crate::kube::apis::cluster::v1alpha1::ClusterGatewaySpec,

    pub status: crate::kube::apis::cluster::v1alpha1::ClusterGatewayStatus,
}

impl crate::kube::apis::Resource for ClusterGateway {
    const API_VERSION: &'static str = "cluster.core.oam.dev/v1alpha1";
    const GROUP: &'static str = "cluster.core.oam.dev";
    const KIND: &'static str = "ClusterGateway";
    const VERSION: &'static str = "v1alpha1";
    const URL_PATH_SEGMENT: &'static str = "clustergateways";
    type Scope = crate::kube::apis::ClusterResourceScope;
}

impl crate::kube::apis::ListableResource for ClusterGateway {
    const LIST_KIND: &'static str = "ClusterGatewayList";
}

impl crate::kube::apis::Metadata for ClusterGateway {
    type Ty = crate::kube::apis::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn metadata(&self) -> &<Self as crate::kube::apis::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut<Self as crate::kube::apis::Metadata>::Ty {
        &mut self.metadata
    }
}

impl crate::kube::apis::DeepCopy for ClusterGateway {
    fn deep_copy(&self) -> Self {
        ClusterGateway {
            metadata: crate::kube::apis::DeepCopy::deep_copy(&self.metadata),
            spec: crate::kube::apis::DeepCopy::deep_copy(&self.spec),
            status: crate::kube::apis::DeepCopy::deep_copy(&self.status),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.metadata, &mut out.metadata);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.spec, &mut out.spec);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.status, &mut out.status);
    }
}

impl crate::kube::apis::DeepMerge for ClusterGateway {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.metadata, other.metadata);
        crate::kube::apis::DeepMerge::merge_from(&mut self.spec, other.spec);
        crate::kube::apis::DeepMerge::merge_from(&mut self.status, other.status);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterGateway {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_api_version,
            Key_kind,
            Key_metadata,
            Key_spec,
            Key_status,
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
                            "spec" => Field::Key_spec,
                            "status" => Field::Key_status,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterGateway;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self::Value as crate::kube::apis::Resource>::KIND)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_metadata: Option<crate::kube::apis::apimachinery::pkg::apis::meta::v1::ObjectMeta> = None;
                let mut value_spec: Option<crate::kube::apis::cluster::v1alpha1::ClusterGatewaySpec> = None;
                let mut value_status: Option<crate::kube::apis::cluster::v1alpha1::ClusterGatewayStatus> = None;

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
                        Field::Key_spec => value_spec = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_status => value_status = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterGateway {
                    metadata: value_metadata.unwrap_or_default(),
                    spec: value_spec.ok_or_else(|| crate::kube::apis::serde::de::Error::missing_field("spec"))?,
                    status: value_status.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            &[
                "apiVersion",
                "kind",
                "metadata",
                "spec",
                "status",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterGateway {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            5,
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "apiVersion", <Self as crate::kube::apis::Resource>::API_VERSION)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "kind", <Self as crate::kube::apis::Resource>::KIND)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "metadata", &self.metadata)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "spec", &self.spec)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "status", &self.status)?;
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}
