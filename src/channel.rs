use crate::{Error, Result};
use num_traits::ToPrimitive;
use std::fmt;

/// One of the three primary color components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// Returns the parameter name of this channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::Channel;
    /// assert_eq!("red", Channel::Red.name());
    /// assert_eq!("blue", Channel::Blue.name());
    /// ```
    pub fn name(&self) -> &'static str {
        match *self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Checks that `value` fits in this channel, i.e. lies in [0, 255].
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::Channel;
    /// assert_eq!(255, Channel::Green.check(255i64).unwrap());
    /// assert!(Channel::Green.check(256i64).is_err());
    /// ```
    pub fn check<T>(self, value: T) -> Result<u8>
    where
        T: ToPrimitive + Into<i64> + Copy,
    {
        value.to_u8().ok_or_else(|| Error::OutOfRange {
            channel: self,
            value: value.into(),
        })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bounds() {
        assert_eq!(0, Channel::Red.check(0i32).unwrap());
        assert_eq!(255, Channel::Red.check(255i32).unwrap());
        assert_eq!(
            Error::OutOfRange {
                channel: Channel::Red,
                value: -1
            },
            Channel::Red.check(-1i32).unwrap_err()
        );
        assert_eq!(
            Error::OutOfRange {
                channel: Channel::Blue,
                value: i64::MAX
            },
            Channel::Blue.check(i64::MAX).unwrap_err()
        );
    }

    #[test]
    fn display() {
        assert_eq!("green", Channel::Green.to_string());
    }
}
