//! Closed string vocabularies.
//!
//! Every token the engine accepts is spelled the way design tools spell it
//! ("600", "third", "space-between"). The macro generates the enum, its
//! serde representation and a strict `FromStr` that rejects anything else.
//! Deserialization goes through the same `FromStr`, so a token rejected
//! inside a JSON document is logged like any other rejection.

/// Declare a closed token vocabulary.
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:path) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every token of the vocabulary, in ascending order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The token as written by callers and design tools
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::LayoutError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::LayoutError::invalid_token($kind, s)),
                }
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::LayoutError;

            fn try_from(s: String) -> ::std::result::Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}
