use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// CredentialType names the kind of credential carried by a [`ClusterAccessCredential`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum CredentialType {
    X509Certificate,
    ServiceAccountToken,
}

impl CredentialType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for CredentialType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        let value: String = crate::kube::apis::serde::Deserialize::deserialize(deserializer)?;
        value.parse().map_err(|_| crate::kube::apis::serde::de::Error::unknown_variant(&value, CredentialType::VARIANTS))
    }
}

impl crate::kube::apis::serde::Serialize for CredentialType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        serializer.serialize_str(self.as_str())
    }
}

/// CredentialPayload is the concrete credential held by a [`ClusterAccessCredential`].
///
/// New credential kinds are added as new variants; a credential can never hold two at once.
#[derive(Clone, Debug, PartialEq)]
pub enum CredentialPayload {
    /// A client certificate and key pair.
    X509(crate::kube::apis::cluster::v1alpha1::X509),

    /// A bearer token of a service account in the managed cluster.
    ServiceAccountToken(String),
}

impl CredentialPayload {
    pub fn credential_type(&self) -> CredentialType {
        match self {
            CredentialPayload::X509(_) => CredentialType::X509Certificate,
            CredentialPayload::ServiceAccountToken(_) => CredentialType::ServiceAccountToken,
        }
    }
}

impl crate::kube::apis::DeepCopy for CredentialPayload {
    fn deep_copy(&self) -> Self {
        match self {
            CredentialPayload::X509(value) => CredentialPayload::X509(crate::kube::apis::DeepCopy::deep_copy(value)),
            CredentialPayload::ServiceAccountToken(value) => CredentialPayload::ServiceAccountToken(crate::kube::apis::DeepCopy::deep_copy(value)),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        match (self, out) {
            (CredentialPayload::X509(src), CredentialPayload::X509(dst)) => crate::kube::apis::DeepCopy::deep_copy_into(src, dst),
            (CredentialPayload::ServiceAccountToken(src), CredentialPayload::ServiceAccountToken(dst)) => crate::kube::apis::DeepCopy::deep_copy_into(src, dst),
            (src, out) => *out = crate::kube::apis::DeepCopy::deep_copy(src),
        }
    }
}

impl crate::kube::apis::DeepMerge for CredentialPayload {
    fn merge_from(&mut self, other: Self) {
        match (self, other) {
            (CredentialPayload::X509(current), CredentialPayload::X509(other)) => crate::kube::apis::DeepMerge::merge_from(current, other),
            (CredentialPayload::ServiceAccountToken(current), CredentialPayload::ServiceAccountToken(other)) => crate::kube::apis::DeepMerge::merge_from(current, other),
            (current, other) => *current = other,
        }
    }
}

/// ClusterAccessCredential holds at most one credential used to reach the managed cluster.
///
/// On the wire `type` is optional, but when present it must name the payload that is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterAccessCredential {
    /// Payload is the configured credential, or `None` when no credential is configured.
    pub payload: Option<CredentialPayload>,
}

impl ClusterAccessCredential {
    pub fn x509(x509: crate::kube::apis::cluster::v1alpha1::X509) -> Self {
        ClusterAccessCredential {
            payload: Some(CredentialPayload::X509(x509)),
        }
    }

    pub fn service_account_token(token: impl Into<String>) -> Self {
        ClusterAccessCredential {
            payload: Some(CredentialPayload::ServiceAccountToken(token.into())),
        }
    }

    pub fn credential_type(&self) -> Option<CredentialType> {
        self.payload.as_ref().map(CredentialPayload::credential_type)
    }

    pub fn as_x509(&self) -> Option<&crate::kube::apis::cluster::v1alpha1::X509> {
        match &self.payload {
            Some(CredentialPayload::X509(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_x509_mut(&mut self) -> Option<&mut crate::kube::apis::cluster::v1alpha1::X509> {
        match &mut self.payload {
            Some(CredentialPayload::X509(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_service_account_token(&self) -> Option<&str> {
        match &self.payload {
            Some(CredentialPayload::ServiceAccountToken(value)) => Some(value),
            _ => None,
        }
    }
}

impl crate::kube::apis::DeepCopy for ClusterAccessCredential {
    fn deep_copy(&self) -> Self {
        ClusterAccessCredential {
            payload: crate::kube::apis::DeepCopy::deep_copy(&self.payload),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.payload, &mut out.payload);
    }
}

impl crate::kube::apis::DeepMerge for ClusterAccessCredential {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.payload, other.payload);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterAccessCredential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_type_,
            Key_x509,
            Key_service_account_token,
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
                            "type" => Field::Key_type_,
                            "x509" => Field::Key_x509,
                            "serviceAccountToken" => Field::Key_service_account_token,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterAccessCredential;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ClusterAccessCredential")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_type_: Option<CredentialType> = None;
                let mut value_x509: Option<crate::kube::apis::cluster::v1alpha1::X509> = None;
                let mut value_service_account_token: Option<String> = None;

                while let Some(key) = crate::kube::apis::serde::de::MapAccess::next_key::<Field>(&mut map)? {
                    match key {
                        Field::Key_type_ => value_type_ = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_x509 => value_x509 = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Key_service_account_token => value_service_account_token = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                let payload = match (value_x509, value_service_account_token) {
                    (Some(_), Some(_)) => {
                        return Err(crate::kube::apis::serde::de::Error::custom("only one of x509 and serviceAccountToken may be set"));
                    },
                    (Some(x509), None) => Some(CredentialPayload::X509(x509)),
                    (None, Some(token)) => Some(CredentialPayload::ServiceAccountToken(token)),
                    (None, None) => None,
                };

                match (value_type_, &payload) {
                    (Some(type_), Some(payload)) if type_ != payload.credential_type() => {
                        return Err(crate::kube::apis::serde::de::Error::invalid_value(crate::kube::apis::serde::de::Unexpected::Str(type_.as_str()), &payload.credential_type().as_str()));
                    },
                    (Some(CredentialType::X509Certificate), None) => {
                        return Err(crate::kube::apis::serde::de::Error::missing_field("x509"));
                    },
                    (Some(CredentialType::ServiceAccountToken), None) => {
                        return Err(crate::kube::apis::serde::de::Error::missing_field("serviceAccountToken"));
                    },
                    _ => {},
                }

                Ok(ClusterAccessCredential {
                    payload,
                })
            }
        }

        deserializer.deserialize_struct(
            "ClusterAccessCredential",
            &[
                "type",
                "x509",
                "serviceAccountToken",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterAccessCredential {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            "ClusterAccessCredential",
            self.payload.as_ref().map_or(0, |_| 2),
        )?;
        if let Some(payload) = &self.payload {
            crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "type", &payload.credential_type())?;
            match payload {
                CredentialPayload::X509(value) => crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "x509", value)?,
                CredentialPayload::ServiceAccountToken(value) => crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "serviceAccountToken", value)?,
            }
        }
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kube::apis::{cluster::v1alpha1::X509, ByteString, DeepCopy, DeepMerge};

    use indoc::indoc;
    use rstest::rstest;

    fn x509() -> X509 {
        X509 {
            certificate: Some(ByteString(b"cert".to_vec())),
            private_key: Some(ByteString(b"key".to_vec())),
        }
    }

    mod deep_copy {
        use super::*;

        use pretty_assertions::assert_eq;

        #[rstest]
        #[case(ClusterAccessCredential::default(), None)]
        #[case(ClusterAccessCredential::x509(x509()), Some(CredentialType::X509Certificate))]
        #[case(ClusterAccessCredential::service_account_token("token"), Some(CredentialType::ServiceAccountToken))]
        fn copy_keeps_variant(
            #[case] src: ClusterAccessCredential,
            #[case] expected: Option<CredentialType>,
        ) {
            let actual = src.deep_copy();

            assert_eq!(actual, src);
            assert_eq!(actual.credential_type(), expected);
        }

        #[test]
        fn x509_payload_is_not_shared() {
            let src = ClusterAccessCredential::x509(x509());

            let mut actual = src.deep_copy();
            if let Some(X509 { private_key: Some(ByteString(key)), .. }) = actual.as_x509_mut() {
                key.fill(0);
            }

            assert_eq!(src.as_x509(), Some(&x509()));
            assert_eq!(
                actual.as_x509().and_then(|x| x.private_key.clone()),
                Some(ByteString(vec![0; 3]))
            );
        }

        #[test]
        fn copy_into_switches_variant() {
            let src = ClusterAccessCredential::service_account_token("token");
            let mut out = ClusterAccessCredential::x509(x509());

            src.deep_copy_into(&mut out);

            assert_eq!(out, src);
            assert_eq!(out.as_x509(), None);
        }

        #[test]
        fn copy_into_clears_payload() {
            let src = ClusterAccessCredential::default();
            let mut out = ClusterAccessCredential::x509(x509());

            src.deep_copy_into(&mut out);

            assert_eq!(out.payload, None);
        }
    }

    mod merge {
        use super::*;

        use pretty_assertions::assert_eq;

        #[test]
        fn same_kind_merges_fields() {
            let mut current = ClusterAccessCredential::x509(x509());

            current.merge_from(ClusterAccessCredential::x509(X509 {
                certificate: Some(ByteString(b"rotated".to_vec())),
                private_key: None,
            }));

            assert_eq!(
                current,
                ClusterAccessCredential::x509(X509 {
                    certificate: Some(ByteString(b"rotated".to_vec())),
                    private_key: Some(ByteString(b"key".to_vec())),
                })
            );
        }

        #[test]
        fn other_kind_replaces_payload() {
            let mut current = ClusterAccessCredential::x509(x509());

            current.merge_from(ClusterAccessCredential::service_account_token("token"));

            assert_eq!(current, ClusterAccessCredential::service_account_token("token"));
        }
    }

    mod wire {
        use super::*;

        use pretty_assertions::assert_eq;

        #[test]
        fn decode_x509() {
            let yaml = indoc! {r#"
                type: X509Certificate
                x509:
                  certificate: Y2VydA==
                  privateKey: a2V5
            "#};

            let actual: ClusterAccessCredential = serde_yaml::from_str(yaml).unwrap();

            assert_eq!(actual, ClusterAccessCredential::x509(x509()));
        }

        #[test]
        fn decode_without_type() {
            let actual: ClusterAccessCredential =
                serde_json::from_str(r#"{"serviceAccountToken":"token"}"#).unwrap();

            assert_eq!(actual, ClusterAccessCredential::service_account_token("token"));
        }

        #[rstest]
        #[case(r#"{"x509":{},"serviceAccountToken":"token"}"#)]
        #[case(r#"{"type":"ServiceAccountToken","x509":{}}"#)]
        #[case(r#"{"type":"Kerberos","serviceAccountToken":"token"}"#)]
        #[case(r#"{"type":"X509Certificate"}"#)]
        #[case(r#"{"type":"ServiceAccountToken"}"#)]
        fn decode_rejects_invalid_credential(#[case] json: &str) {
            let actual = serde_json::from_str::<ClusterAccessCredential>(json);

            assert!(actual.is_err());
        }

        #[rstest]
        #[case(ClusterAccessCredential::default(), r#"{}"#)]
        #[case(ClusterAccessCredential::service_account_token("token"), r#"{"type":"ServiceAccountToken","serviceAccountToken":"token"}"#)]
        #[case(ClusterAccessCredential::x509(X509::default()), r#"{"type":"X509Certificate","x509":{}}"#)]
        fn encode(#[case] credential: ClusterAccessCredential, #[case] expected: &str) {
            assert_eq!(serde_json::to_string(&credential).unwrap(), expected);
        }
    }
}
