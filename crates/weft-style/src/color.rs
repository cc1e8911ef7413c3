#![forbid(unsafe_code)]

//! Colors and their CSS / class-name formatting.
//!
//! Channels are stored as `f32` in `0.0..=1.0`. Values outside that range
//! are kept as given; formatting rounds and saturates them to `0..=255`.

use core::fmt;

use crate::classes::float_class;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque color from channels in `0.0..=1.0`.
    #[must_use]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb255(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba255(red, green, blue, 1.0)
    }

    /// Color from 8-bit channels and a `0.0..=1.0` alpha.
    #[must_use]
    pub const fn rgba255(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha,
        }
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    ///
    /// ```
    /// use weft_style::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff0000"), Ok(Color::rgb255(255, 0, 0)));
    /// assert_eq!(Color::from_hex("#fff"), Ok(Color::rgb255(255, 255, 255)));
    /// assert!(Color::from_hex("ff0000").is_err());
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }

        let nibble = |i: usize| -> u8 {
            // Digits were validated above, so the lookup cannot miss.
            (digits.as_bytes()[i] as char).to_digit(16).unwrap_or(0) as u8
        };
        let byte = |i: usize| nibble(i) * 16 + nibble(i + 1);

        match digits.len() {
            3 => Ok(Self::rgb255(
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
            )),
            6 => Ok(Self::rgb255(byte(0), byte(2), byte(4))),
            8 => Ok(Self::rgba255(
                byte(0),
                byte(2),
                byte(4),
                f32::from(byte(6)) / 255.0,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Red, green, and blue as rounded bytes, alpha untouched.
    #[must_use]
    pub fn to_rgba255(self) -> (u8, u8, u8, f32) {
        (
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue),
            self.alpha,
        )
    }

    /// Canonical CSS form, e.g. `rgba(255,0,0,1)`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Class-safe fragment, e.g. `255-0-0-1`.
    ///
    /// Built from the same bytes and alpha as [`Color::to_css`], so colors
    /// with different CSS get different fragments.
    #[must_use]
    pub fn class_fragment(self) -> String {
        let (r, g, b, a) = self.to_rgba255();
        format!("{r}-{g}-{b}-{}", float_class(a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba255();
        write!(f, "rgba({r},{g},{b},{a})")
    }
}

#[inline]
fn channel_byte(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Errors from [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input did not start with `#`.
    MissingHash,
    /// The number of hex digits was not 3, 6, or 8.
    InvalidLength(usize),
    /// A character was not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex color must start with '#'"),
            Self::InvalidLength(len) => {
                write!(f, "hex color must have 3, 6, or 8 digits, got {len}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl std::error::Error for ColorParseError {}
