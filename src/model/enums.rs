//! Advisory enumerations.
//!
//! Watson documents a legal value set for many string fields, but the
//! service may add values before the client learns about them. [`open_enum!`]
//! declares the documented values as variants and adds an `Other(String)`
//! variant that carries anything else verbatim, so decoding never fails on
//! an unfamiliar value and every `match` needs a fallback arm.

/// Declares an open string enumeration.
///
/// ```rust
/// watson_client::open_enum! {
///     /// Traffic light colour.
///     pub enum Light {
///         /// Stop.
///         Red => "red",
///         /// Go.
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Light::from("red"), Light::Red);
/// assert_eq!(Light::from("blue"), Light::Other("blue".to_string()));
/// assert!(!Light::from("blue").is_known());
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value this client version does not know about.
            Other(String),
        }

        impl $name {
            /// Documented wire values.
            pub const KNOWN: &'static [&'static str] = &[$($value),+];

            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Other(value) => value.as_str(),
                }
            }

            /// Returns true for documented values.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::__private::serde_json::Value {
            fn from(value: $name) -> Self {
                $crate::__private::serde_json::Value::String(value.as_str().to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(value))
            }
        }
    };
}
