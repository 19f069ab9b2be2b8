use crate::Channel;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A channel value fell outside of [0, 255].
    #[error("the value must be in the range [0; 255], found {value} (parameter '{channel}')")]
    OutOfRange {
        /// The channel that failed validation.
        channel: Channel,

        /// The rejected value.
        value: i64,
    },

    /// The text was not exactly six hexadecimal digits.
    #[error("wrong symbol in '{input}', expected six hexadecimal digits (parameter 'input')")]
    InvalidFormat {
        /// The rejected text.
        input: String,
    },
}

impl Error {
    /// Returns the name of the parameter that caused this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// let err = RgbColor::from_i32(0, 256, 0).unwrap_err();
    /// assert_eq!("green", err.parameter_name());
    /// let err = RgbColor::parse("ABCGEF").unwrap_err();
    /// assert_eq!("input", err.parameter_name());
    /// ```
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Error::OutOfRange { channel, .. } => channel.name(),
            Error::InvalidFormat { .. } => "input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = Error::OutOfRange {
            channel: Channel::Blue,
            value: -1,
        };
        assert_eq!(
            "the value must be in the range [0; 255], found -1 (parameter 'blue')",
            err.to_string()
        );
    }

    #[test]
    fn display_invalid_format() {
        let err = Error::InvalidFormat {
            input: "XYZ".to_string(),
        };
        assert!(err.to_string().contains("'XYZ'"));
        assert_eq!("input", err.parameter_name());
    }
}
