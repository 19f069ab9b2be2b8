//! An immutable RGB color value with validated construction and canonical hexadecimal text.
//!
//! # Creating colors
//!
//! Build a color from three bytes, which always succeeds:
//!
//! ```
//! use rgb_color::RgbColor;
//! let color = RgbColor::new(0xAB, 0xCD, 0xEF);
//! assert_eq!(0xAB, color.red());
//! ```
//!
//! Wider integers are checked, and the error names the offending channel:
//!
//! ```
//! use rgb_color::RgbColor;
//! assert!(RgbColor::from_i32(1, 2, 3).is_ok());
//! let err = RgbColor::from_i64(0, 0, 256).unwrap_err();
//! assert_eq!("blue", err.parameter_name());
//! ```
//!
//! # Text
//!
//! Colors parse from six hexadecimal digits, in any case, and format back to uppercase:
//!
//! ```
//! use rgb_color::RgbColor;
//! let color: RgbColor = "abcdef".parse().unwrap();
//! assert_eq!("ABCDEF", color.to_string());
//! ```
//!
//! Use `try_parse` when malformed text is expected:
//!
//! ```
//! use rgb_color::RgbColor;
//! let (parsed, color) = RgbColor::try_parse("ABCGEF");
//! assert!(!parsed);
//! assert_eq!(RgbColor::new(0, 0, 0), color);
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod channel;
mod color;
mod error;

pub use channel::Channel;
pub use color::RgbColor;
pub use error::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
