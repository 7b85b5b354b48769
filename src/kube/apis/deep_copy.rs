use k8s_openapi::{
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
    ByteString,
};

/// Produces copies that share no storage with the source.
///
/// Objects handed out by a shared cache are read by many threads at once.
/// A reader that wants to change one must take a deep copy first and mutate
/// that instead. Implementations compose field by field so that nested byte
/// buffers, optional values, credential variants and lists all end up in
/// freshly owned storage.
///
/// `Option<T>` of any implementor copies `None` to `None`, which is how an
/// absent object is handled at every level of the tree.
pub trait DeepCopy: Sized {
    /// Returns a new instance structurally equal to `self`.
    fn deep_copy(&self) -> Self;

    /// Copies `self` into `out`, replacing everything `out` held before.
    ///
    /// Implementations may reuse allocations already owned by `out`.
    fn deep_copy_into(&self, out: &mut Self) {
        *out = self.deep_copy();
    }
}

macro_rules! deep_copy_by_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepCopy for $ty {
                fn deep_copy(&self) -> Self {
                    self.clone()
                }

                fn deep_copy_into(&self, out: &mut Self) {
                    out.clone_from(self);
                }
            }
        )*
    };
}

// Scalars and the object model's own metadata types own all of their data.
deep_copy_by_clone!(bool, String, ObjectMeta, ListMeta);

impl DeepCopy for ByteString {
    fn deep_copy(&self) -> Self {
        ByteString(self.0.to_vec())
    }

    fn deep_copy_into(&self, out: &mut Self) {
        out.0.clone_from(&self.0);
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(T::deep_copy)
    }

    fn deep_copy_into(&self, out: &mut Self) {
        match self {
            None => *out = None,
            Some(src) => match out {
                Some(dst) => src.deep_copy_into(dst),
                None => *out = Some(src.deep_copy()),
            },
        }
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(T::deep_copy).collect()
    }

    fn deep_copy_into(&self, out: &mut Self) {
        out.truncate(self.len());

        let (reused, fresh) = self.split_at(out.len());

        for (src, dst) in reused.iter().zip(out.iter_mut()) {
            src.deep_copy_into(dst);
        }

        out.extend(fresh.iter().map(T::deep_copy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    mod byte_string {
        use super::*;

        use pretty_assertions::assert_eq;

        #[test]
        fn copy_owns_new_storage() {
            let src = ByteString(vec![0x01, 0x02, 0x03]);

            let mut actual = src.deep_copy();

            assert_eq!(actual, src);
            assert_ne!(actual.0.as_ptr(), src.0.as_ptr());

            actual.0[0] = 0xff;

            assert_eq!(src.0, vec![0x01, 0x02, 0x03]);
        }

        #[test]
        fn copy_into_replaces_longer_destination() {
            let src = ByteString(vec![0x0a]);
            let mut out = ByteString(vec![0x01, 0x02, 0x03, 0x04]);

            src.deep_copy_into(&mut out);

            assert_eq!(out, ByteString(vec![0x0a]));
        }
    }

    mod option {
        use super::*;

        use pretty_assertions::assert_eq;

        #[rstest]
        #[case(None)]
        #[case(Some(false))]
        #[case(Some(true))]
        fn absent_and_zero_value_stay_distinct(#[case] src: Option<bool>) {
            assert_eq!(src.deep_copy(), src);
        }

        #[rstest]
        #[case(None, Some(ByteString(vec![0x01])))]
        #[case(Some(ByteString(vec![])), None)]
        #[case(Some(ByteString(vec![])), Some(ByteString(vec![0x01, 0x02])))]
        #[case(Some(ByteString(vec![0x03])), Some(ByteString(vec![])))]
        fn copy_into_overwrites_destination(
            #[case] src: Option<ByteString>,
            #[case] out: Option<ByteString>,
        ) {
            let mut out = out;
            src.deep_copy_into(&mut out);

            assert_eq!(out, src);
        }

        #[test]
        fn present_empty_buffer_is_not_absent() {
            let src = Some(ByteString(Vec::new()));

            let actual = src.deep_copy();

            assert_eq!(actual, Some(ByteString(Vec::new())));
        }
    }

    mod vec {
        use super::*;

        use pretty_assertions::assert_eq;

        #[rstest]
        #[case(vec![], vec!["stale".to_string()])]
        #[case(vec!["a".to_string(), "b".to_string()], vec![])]
        #[case(vec!["a".to_string()], vec!["x".to_string(), "y".to_string(), "z".to_string()])]
        #[case(vec!["a".to_string(), "b".to_string(), "c".to_string()], vec!["x".to_string()])]
        fn copy_into_matches_source(#[case] src: Vec<String>, #[case] out: Vec<String>) {
            let mut out = out;
            src.deep_copy_into(&mut out);

            assert_eq!(out, src);
        }

        #[test]
        fn elements_are_independent() {
            let src = vec![ByteString(vec![0x01]), ByteString(vec![0x02])];

            let mut actual = src.deep_copy();
            actual[1].0.push(0x03);

            assert_eq!(src, vec![ByteString(vec![0x01]), ByteString(vec![0x02])]);
            assert_eq!(
                actual,
                vec![ByteString(vec![0x01]), ByteString(vec![0x02, 0x03])]
            );
        }
    }

    mod metadata {
        use super::*;

        use pretty_assertions::assert_eq;

        use std::collections::BTreeMap;

        #[test]
        fn object_meta_copy_is_independent() {
            let src = ObjectMeta {
                name: Some("gateway".into()),
                labels: Some(BTreeMap::from([("tier".into(), "edge".into())])),
                ..Default::default()
            };

            let mut actual = src.deep_copy();
            actual
                .labels
                .get_or_insert_with(BTreeMap::new)
                .insert("tier".into(), "core".into());

            assert_eq!(
                src.labels,
                Some(BTreeMap::from([("tier".into(), "edge".into())]))
            );
        }
    }
}
