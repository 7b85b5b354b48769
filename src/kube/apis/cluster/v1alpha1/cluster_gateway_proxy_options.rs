/// ClusterGatewayProxyOptions carries the request options of the `proxy` subresource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterGatewayProxyOptions {
    /// Path is the URL path forwarded to the managed cluster.
    pub path: String,
}

impl crate::kube::apis::Resource for ClusterGatewayProxyOptions {
    const API_VERSION: &'static str = "cluster.core.oam.dev/v1alpha1";
    const GROUP: &'static str = "cluster.core.oam.dev";
    const KIND: &'static str = "ClusterGatewayProxyOptions";
    const VERSION: &'static str = "v1alpha1";
    const URL_PATH_SEGMENT: &'static str = "proxy";
    type Scope = crate::kube::apis::SubResourceScope;
}

impl crate::kube::apis::DeepCopy for ClusterGatewayProxyOptions {
    fn deep_copy(&self) -> Self {
        ClusterGatewayProxyOptions {
            path: crate::kube::apis::DeepCopy::deep_copy(&self.path),
        }
    }

    fn deep_copy_into(&self, out: &mut Self) {
        crate::kube::apis::DeepCopy::deep_copy_into(&self.path, &mut out.path);
    }
}

impl crate::kube::apis::DeepMerge for ClusterGatewayProxyOptions {
    fn merge_from(&mut self, other: Self) {
        crate::kube::apis::DeepMerge::merge_from(&mut self.path, other.path);
    }
}

impl<'de> crate::kube::apis::serde::Deserialize<'de> for ClusterGatewayProxyOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: crate::kube::apis::serde::Deserializer<'de> {
        #[allow(non_camel_case_types)]
        enum Field {
            Key_api_version,
            Key_kind,
            Key_path,
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
                            "path" => Field::Key_path,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> crate::kube::apis::serde::de::Visitor<'de> for Visitor {
            type Value = ClusterGatewayProxyOptions;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self::Value as crate::kube::apis::Resource>::KIND)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: crate::kube::apis::serde::de::MapAccess<'de> {
                let mut value_path: Option<String> = None;

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
                        Field::Key_path => value_path = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?,
                        Field::Other => { let _: crate::kube::apis::serde::de::IgnoredAny = crate::kube::apis::serde::de::MapAccess::next_value(&mut map)?; },
                    }
                }

                Ok(ClusterGatewayProxyOptions {
                    path: value_path.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            &[
                "apiVersion",
                "kind",
                "path",
            ],
            Visitor,
        )
    }
}

impl crate::kube::apis::serde::Serialize for ClusterGatewayProxyOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: crate::kube::apis::serde::Serializer {
        let mut state = serializer.serialize_struct(
            <Self as crate::kube::apis::Resource>::KIND,
            3,
        )?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "apiVersion", <Self as crate::kube::apis::Resource>::API_VERSION)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "kind", <Self as crate::kube::apis::Resource>::KIND)?;
        crate::kube::apis::serde::ser::SerializeStruct::serialize_field(&mut state, "path", &self.path)?;
        crate::kube::apis::serde::ser::SerializeStruct::end(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kube::apis::{DeepCopy, Object, RuntimeObject};

    use pretty_assertions::assert_eq;

    #[test]
    fn copy_is_independent() {
        let src = ClusterGatewayProxyOptions {
            path: "/api/v1/namespaces".into(),
        };

        let mut actual = src.deep_copy();
        actual.path.push_str("/default");

        assert_eq!(src.path, "/api/v1/namespaces");
        assert_eq!(actual.path, "/api/v1/namespaces/default");
    }

    #[test]
    fn deep_copy_object() {
        let src = ClusterGatewayProxyOptions {
            path: "/healthz".into(),
        };

        assert_eq!(
            ClusterGatewayProxyOptions::deep_copy_object(Some(&src)),
            Some(RuntimeObject::ClusterGatewayProxyOptions(src.clone()))
        );
        assert_eq!(ClusterGatewayProxyOptions::deep_copy_object(None), None);
    }

    #[test]
    fn wire_shape() {
        let json = r#"{"apiVersion":"cluster.core.oam.dev/v1alpha1","kind":"ClusterGatewayProxyOptions","path":"/healthz"}"#;
        let src = ClusterGatewayProxyOptions {
            path: "/healthz".into(),
        };

        assert_eq!(serde_json::to_string(&src).unwrap(), json);
        assert_eq!(serde_json::from_str::<ClusterGatewayProxyOptions>(json).unwrap(), src);
    }

    #[test]
    fn decode_rejects_other_kind() {
        let actual = serde_json::from_str::<ClusterGatewayProxyOptions>(
            r#"{"apiVersion":"cluster.core.oam.dev/v1alpha1","kind":"ClusterGateway","path":"/"}"#,
        );

        assert!(actual.is_err());
    }
}
