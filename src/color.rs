use crate::{Channel, Error, Result};
use num_traits::ToPrimitive;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A RGB color value.
///
/// The canonical text form is six uppercase hexadecimal digits, red then green then blue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Black, `000000`.
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    /// White, `FFFFFF`.
    pub const WHITE: RgbColor = RgbColor::new(u8::MAX, u8::MAX, u8::MAX);

    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// let color = RgbColor::new(1, 2, 3);
    /// assert_eq!(1, color.red());
    /// assert_eq!(2, color.green());
    /// assert_eq!(3, color.blue());
    /// ```
    pub const fn new(red: u8, green: u8, blue: u8) -> RgbColor {
        RgbColor { red, green, blue }
    }

    /// Creates a new color from integers that may not fit in a channel.
    ///
    /// Channels are checked in red, green, blue order and the first one outside of [0, 255] is
    /// reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::{Channel, Error, RgbColor};
    /// assert_eq!(RgbColor::new(1, 2, 3), RgbColor::create(1i16, 2, 3).unwrap());
    /// assert_eq!(
    ///     Error::OutOfRange { channel: Channel::Red, value: 300 },
    ///     RgbColor::create(300i16, -1, 0).unwrap_err(),
    /// );
    /// ```
    pub fn create<T>(red: T, green: T, blue: T) -> Result<RgbColor>
    where
        T: ToPrimitive + Into<i64> + Copy,
    {
        let red = Channel::Red.check(red)?;
        let green = Channel::Green.check(green)?;
        let blue = Channel::Blue.check(blue)?;
        Ok(RgbColor::new(red, green, blue))
    }

    /// Creates a new color from 32-bit integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// assert_eq!(RgbColor::new(100, 150, 200), RgbColor::from_i32(100, 150, 200).unwrap());
    /// assert_eq!("blue", RgbColor::from_i32(0, 0, 256).unwrap_err().parameter_name());
    /// ```
    pub fn from_i32(red: i32, green: i32, blue: i32) -> Result<RgbColor> {
        RgbColor::create(red, green, blue)
    }

    /// Creates a new color from 64-bit integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// assert_eq!(RgbColor::WHITE, RgbColor::from_i64(255, 255, 255).unwrap());
    /// assert_eq!("red", RgbColor::from_i64(-1, 0, 0).unwrap_err().parameter_name());
    /// ```
    pub fn from_i64(red: i64, green: i64, blue: i64) -> Result<RgbColor> {
        RgbColor::create(red, green, blue)
    }

    /// Parses a color from six hexadecimal digits, in any case.
    ///
    /// The text is not trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// assert_eq!(RgbColor::new(0xAB, 0xCD, 0xEF), RgbColor::parse("abcdef").unwrap());
    /// assert!(RgbColor::parse("ABCGEF").is_err());
    /// assert!(RgbColor::parse(" ABCDEF").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<RgbColor> {
        parse_hex(s).ok_or_else(|| Error::InvalidFormat {
            input: s.to_string(),
        })
    }

    /// Parses a color, returning a success flag instead of an error.
    ///
    /// On failure the returned color is black.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// assert_eq!((true, RgbColor::new(1, 2, 3)), RgbColor::try_parse("010203"));
    /// assert_eq!((false, RgbColor::BLACK), RgbColor::try_parse("ABCGEF"));
    /// ```
    pub fn try_parse(s: &str) -> (bool, RgbColor) {
        match parse_hex(s) {
            Some(color) => (true, color),
            None => (false, RgbColor::default()),
        }
    }

    /// Returns the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the value of `channel`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::{Channel, RgbColor};
    /// assert_eq!(2, RgbColor::new(1, 2, 3).channel(Channel::Green));
    /// ```
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Packs the channels into a single integer, blue in the most significant byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// assert_eq!(0x030201, RgbColor::new(1, 2, 3).hash_code());
    /// ```
    pub fn hash_code(&self) -> i32 {
        (i32::from(self.blue) << 16) | (i32::from(self.green) << 8) | i32::from(self.red)
    }

    /// Returns true if `other` is an `RgbColor` equal to this one.
    ///
    /// Values of any other type are never equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_color::RgbColor;
    /// let color = RgbColor::parse("ABCDEF").unwrap();
    /// assert!(color.equals_any(&RgbColor::new(0xAB, 0xCD, 0xEF)));
    /// assert!(!color.equals_any(&"ABCDEF"));
    /// ```
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<RgbColor>() == Some(self)
    }
}

fn parse_hex(s: &str) -> Option<RgbColor> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |start: usize| u8::from_str_radix(&s[start..start + 2], 16).ok();
    Some(RgbColor::new(byte(0)?, byte(2)?, byte(4)?))
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<RgbColor> {
        RgbColor::parse(s)
    }
}

impl Hash for RgbColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> RgbColor {
        RgbColor::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> RgbColor {
        RgbColor::new(red, green, blue)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(color: RgbColor) -> [u8; 3] {
        [color.red, color.green, color.blue]
    }
}

impl TryFrom<(i32, i32, i32)> for RgbColor {
    type Error = Error;

    fn try_from((red, green, blue): (i32, i32, i32)) -> Result<RgbColor> {
        RgbColor::from_i32(red, green, blue)
    }
}

impl TryFrom<(i64, i64, i64)> for RgbColor {
    type Error = Error;

    fn try_from((red, green, blue): (i64, i64, i64)) -> Result<RgbColor> {
        RgbColor::from_i64(red, green, blue)
    }
}
