/// ClusterGatewayStatus is the observed state of a ClusterGateway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterGatewayStatus {
    /// Healthy reports whether the managed cluster answered the last health probe.
    pub healthy: bool,
}

impl crate::kube::apis::DeepCopy for ClusterGatewayStatus {
    fn deep_copy(&self) -> Self {
        *self
    }
}

impl crate::kube::apis::DeepMerge for ClusterGatewayStatus {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.healthy, other.healthy);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterGatewayStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_healthy,
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
                            "healthy" => Field::Key_healthy,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterGatewayStatus;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ClusterGatewayStatus")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_healthy: Option<bool> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_healthy => value_healthy = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterGatewayStatus {
                    healthy: value_healthy.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_struct(
            "ClusterGatewayStatus",
            &[
                "healthy",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterGatewayStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            "ClusterGatewayStatus",
            1,
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "healthy", &self.healthy)?;
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}
