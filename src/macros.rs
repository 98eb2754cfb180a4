//! Macros for export.

/// Implements `SpaceUsage` for a stack-only (`Copy`) type.
///
/// # Example
///
/// ```
/// # #[macro_use] extern crate growvec;
/// use std::mem;
/// use growvec::SpaceUsage;
///
/// # #[allow(dead_code)]
/// struct Point { x: u32, y: u32 }
///
/// impl_stack_only_space_usage!(Point);
///
/// fn main() {
///     let point = Point { x: 0, y: 0 };
///     assert_eq!(point.total_bytes(), mem::size_of::<Point>());
/// }
/// ```
#[macro_export]
macro_rules! impl_stack_only_space_usage {
    ( $t:ty ) => {
        impl $crate::SpaceUsage for $t {
            #[inline]
            fn is_stack_only() -> bool {
                true
            }
            #[inline]
            fn heap_bytes(&self) -> usize {
                0
            }
        }
    };
}

/// Implements serde’s `Serialize` and `Deserialize` for a vector type by
/// way of its tagged string form.
#[cfg(feature = "serde")]
macro_rules! impl_tagged_serde {
    ( [ $( $param:tt )* ] $t:ty, $expecting:expr ) => {
        impl< $( $param )* > serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_tagged())
            }
        }

        impl<'de, $( $param )* > serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct TaggedVisitor<V>(::std::marker::PhantomData<V>);

                impl<'de, V> serde::de::Visitor<'de> for TaggedVisitor<V>
                where
                    V: ::std::str::FromStr<Err = $crate::Error>,
                {
                    type Value = V;

                    fn expecting(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, value: &str) -> ::std::result::Result<V, E>
                    where
                        E: serde::de::Error,
                    {
                        value.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(TaggedVisitor(::std::marker::PhantomData))
            }
        }
    };
}
