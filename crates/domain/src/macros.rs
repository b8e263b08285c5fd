//! Macro for implementing Display and FromStr for domain enums
//!
//! Material kinds, notification types and priorities all cross the UI
//! boundary as short lowercase strings. This macro provides a single
//! implementation of both Display and FromStr for them, with
//! case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use reciclo_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Bin {
//!     Green,
//!     Blue,
//! }
//!
//! impl_domain_status_conversions!(Bin {
//!     Green => "green",
//!     Blue => "blue",
//! });
//!
//! assert_eq!("GREEN".parse::<Bin>(), Ok(Bin::Green));
//! assert_eq!(Bin::Blue.to_string(), "blue");
//! ```

/// Implements Display and FromStr traits for string-keyed domain enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase key
/// - FromStr trait: parses case-insensitive (and whitespace-trimmed) keys
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
