/// Declares a closed set of string values used by the Confluence API
///
/// Generates serde renames, `as_str`, `Display` and a `FromStr` that rejects
/// unknown values with [`crate::error::AppError::InvalidInput`]. An optional
/// `_ => Variant` arm adds a catch-all that absorbs values the API introduces
/// later when decoding responses; it is never listed in `ALL` nor parsed.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
        $( $(#[$umeta:meta])* _ => $unknown:ident )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
            $( $(#[$umeta])* #[serde(rename = "unknown", other)] $unknown, )?
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                    $( $name::$unknown => "unknown", )?
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $value => Ok($name::$variant), )+
                    other => Err(crate::error::AppError::InvalidInput(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($value),+].join(", ")
                    ))),
                }
            }
        }
    };
}

/// Shared building blocks of Confluence payloads
pub mod common;
/// Page models
pub mod page;
/// Space models
pub mod space;

pub use common::*;
pub use page::*;
pub use space::*;
