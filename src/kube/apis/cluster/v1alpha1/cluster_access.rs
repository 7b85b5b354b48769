/// ClusterAccess describes how the gateway connects to the managed cluster's API server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterAccess {
    /// Endpoint is the address of the managed cluster's API server.
    pub endpoint: String,

    /// CABundle is the PEM encoded CA chain used to verify the API server's serving certificate.
    pub ca_bundle: Option<crate::kube::apis::ByteString>,

    /// Insecure skips verification of the API server's serving certificate.
    /// Unset leaves the decision to the consumer of this object.
    pub insecure: Option<bool>,

    /// Credential authenticates the gateway against the managed cluster.
    pub credential: Option<crate::kube::apis::cluster::v1alpha1::ClusterAccessCredential>,
}

impl crate::kube::apis::DeepCopy for ClusterAccess {
    fn deep_copy(&self) -> Self {
        ClusterAccess {
            endpoint: crate::kube::apis::DeepCopy::deep_copy(&self.endpoint),
            ca_bundle: crate::kube::apis::DeepCopy::deep_copy(&self.ca_bundle),
            insecure: crate::kube::apis::DeepCopy::deep_copy(&self.insecure),
            credential: crate::kube::apis::DeepCopy::deep_copy(&self.credential),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.endpoint, &mut out.endpoint);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.ca_bundle, &mut out.ca_bundle);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.insecure, &mut out.insecure);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.credential, &mut out.credential);
    }
}

impl crate::kube::apis::DeepMerge for ClusterAccess {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.endpoint, other.endpoint);
        crate::kube::apis::DeepMerge::merge_from(&mut self.ca_bundle, other.ca_bundle);
        crate::kube::apis::DeepMerge::merge_from(&mut self.insecure, other.insecure);
        crate::kube::apis::DeepMerge::merge_from(&mut self.credential, other.credential);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterAccess {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_endpoint,
            Key_ca_bundle,
            Key_insecure,
            Key_credential,
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
                            "endpoint" => Field::Key_endpoint,
                            "caBundle" => Field::Key_ca_bundle,
                            "insecure" => Field::Key_insecure,
                            "credential" => Field::Key_credential,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterAccess;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ClusterAccess")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_endpoint: Option<String> = None;
                let mut value_ca_bundle: Option<crate::kube::apis::ByteString> = None;
                let mut value_insecure: Option<bool> = None;
                let mut value_credential: Option<crate::kube::apis::cluster::v1alpha1::ClusterAccessCredential> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_endpoint => value_endpoint = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_ca_bundle => value_ca_bundle = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_insecure => value_insecure = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_credential => value_credential = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterAccess {
                    endpoint: value_endpoint.unwrap_or_default(),
                    ca_bundle: value_ca_bundle,
                    insecure: value_insecure,
                    credential: value_credential,
                })
            }
        }

        deserializer.deserialize_struct(
            "ClusterAccess",
            &[
                "endpoint",
                "caBundle",
                "insecure",
                "credential",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterAccess {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            "ClusterAccess",
            1 +
            self.ca_bundle.as_ref().map_or(0, |_| 1) +
            self.insecure.as_ref().map_or(0, |_| 1) +
            self.credential.as_ref().map_or(0, |_| 1),
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "endpoint", &self.endpoint)?;
        if let Some(value) = &self.ca_bundle {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "caBundle", value)?;
        }
        if let Some(value) = &self.insecure {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "insecure", value)?;
        }
        if let Some(value) = &self.credential {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "credential", value)?;
        }
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}
