/// ClusterGatewaySpec defines the managed cluster a ClusterGateway proxies to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterGatewaySpec {
    /// Provider names the infrastructure provider of the managed cluster.
    pub provider: String,

    /// Access holds the connection parameters of the managed cluster.
    pub access: crate::kube::apis::cluster::v1alpha1::ClusterAccess,

    /// Finalized protects the ClusterGateway from deletion once set.
    pub finalized: Option<bool>,
}

impl crate::kube::apis::DeepCopy for ClusterGatewaySpec {
    fn deep_copy(&self) -> Self {
        ClusterGatewaySpec {
            provider: crate::kube::apis::DeepCopy::deep_copy(&self.provider),
            access: crate::kube::apis::DeepCopy::deep_copy(&self.access),
            finalized: crate::kube::apis::DeepCopy::deep_copy(&self.finalized),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.provider, &mut out.provider);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.access, &mut out.access);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.finalized, &mut out.finalized);
    }
}

impl crate::kube::apis::DeepMerge for ClusterGatewaySpec {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.provider, other.provider);
        crate::kube::apis::DeepMerge::merge_from(&mut self.access, other.access);
        crate::kube::apis::DeepMerge::merge_from(&mut self.finalized, other.finalized);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterGatewaySpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_provider,
            Key_access,
            Key_finalized,
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
                            "provider" => Field::Key_provider,
                            "access" => Field::Key_access,
                            "finalized" => Field::Key_finalized,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterGatewaySpec;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ClusterGatewaySpec")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_provider: Option<String> = None;
                let mut value_access: Option<crate::kube::apis::cluster::v1alpha1::ClusterAccess> = None;
                let mut value_finalized: Option<bool> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_provider => value_provider = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_access => value_access = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_finalized => value_finalized = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterGatewaySpec {
                    provider: value_provider.unwrap_or_default(),
                    access: value_access.ok_or_else(|| crate::kube::apis::serde::de::Error::missing_field("access"))?,
                    finalized: value_finalized,
                })
            }
        }

        deserializer.deserialize_struct(
            "ClusterGatewaySpec",
            &[
                "provider",
                "access",
                "finalized",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterGatewaySpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            "ClusterGatewaySpec",
            2 +
            self.finalized.as_ref().map_or(0, |_| 1),
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "provider", &self.provider)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "access", &self.access)?;
        if let Some(value) = &self.finalized {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "finalized", value)?;
        }
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}
