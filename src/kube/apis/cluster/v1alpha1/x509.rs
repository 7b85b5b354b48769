/// X509 is a client certificate and private key used to authenticate against the managed cluster.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct X509 {
    /// Certificate is the PEM encoded client certificate.
    pub certificate: Option<crate::kube::apis::ByteString>,

    /// PrivateKey is the PEM encoded private key of the client certificate.
    pub private_key: Option<crate::kube::apis::ByteString>,
}

impl crate::kube::apis::DeepCopy for X509 {
    fn deep_copy(&self) -> Self {
        X509 {
            certificate: crate::kube::apis::DeepCopy::deep_copy(&self.certificate),
            private_key: crate::kube::apis::DeepCopy::deep_copy(&self.private_key),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.certificate, &mut out.certificate);
        crate::kube::apis::DeepCopy::deep_copy_into(&self.private_key, &mut out.private_key);
    }
}

impl crate::kube::apis::DeepMerge for X509 {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.certificate, other.certificate);
        crate::kube::apis::DeepMerge::merge_from(&mut self.private_key, other.private_key);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for X509 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_certificate,
            Key_private_key,
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
                            "certificate" => Field::Key_certificate,
                            "privateKey" => Field::Key_private_key,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = X509;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("X509")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_certificate: Option<crate::kube::apis::ByteString> = None;
                let mut value_private_key: Option<crate::kube::apis::ByteString> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_certificate => value_certificate = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_private_key => value_private_key = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(X509 {
                    certificate: value_certificate,
                    private_key: value_private_key,
                })
            }
        }

        deserializer.deserialize_struct(
            "X509",
            &[
                "certificate",
                "privateKey",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for X509 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            "X509",
            self.certificate.as_ref().map_or(0, |_| 1) +
            self.private_key.as_ref().map_or(0, |_| 1),
        )?;
        if let Some(value) = &self.certificate {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "certificate", value)?;
        }
        if let Some(value) = &self.private_key {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "privateKey", value)?;
        }
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}
