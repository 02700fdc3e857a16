//! Macro for implementing Display and FromStr for label enums
//!
//! Small closed enums such as [`crate::Language`] and [`crate::ViewType`] are
//! written to logs, JSON and the command line using a short lowercase label.
//! This macro keeps the two directions of that mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use intrasync_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Format {
//!     Ics,
//!     Json,
//! }
//!
//! impl_label_conversions!(Format {
//!     Ics => "ics",
//!     Json => "json",
//! });
//!
//! assert_eq!(Format::Ics.to_string(), "ics");
//! assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// - Display writes the label exactly as given
/// - FromStr parses case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Short lowercase label for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
