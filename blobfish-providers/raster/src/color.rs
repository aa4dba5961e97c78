//! Raw RGB colours and the percentual colour distance used for thresholding.

use thiserror::Error;

/// A raw 8-bit-per-channel RGB colour.
///
/// # Examples
/// ```
/// use blobfish_providers_raster::Rgb;
///
/// let navy = Rgb::new(50, 50, 220);
/// assert_eq!(navy.distance(navy), 0);
/// assert_eq!(Rgb::from_hex("3232dc")?, navy);
/// # Ok::<(), blobfish_providers_raster::ColorParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Error returned when a colour string cannot be parsed.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ColorParseError {
    /// The input was not six hexadecimal digits.
    #[error("colour must be six hex digits (like `3232dc`), got `{input}`")]
    InvalidHex {
        /// The raw string supplied by the caller.
        input: String,
    },
}

impl Rgb {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `RRGGBB` hex string, with an optional leading `#`.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidHex`] when the input is not six
    /// hexadecimal digits.
    ///
    /// # Examples
    /// ```
    /// use blobfish_providers_raster::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff0080")?, Rgb::new(255, 0, 128));
    /// assert!(Rgb::from_hex("red").is_err());
    /// # Ok::<(), blobfish_providers_raster::ColorParseError>(())
    /// ```
    pub fn from_hex(raw: &str) -> Result<Self, ColorParseError> {
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex {
                input: raw.to_owned(),
            });
        }
        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).unwrap_or_default()
        };
        Ok(Self::new(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Returns the percentual difference between two colours.
    ///
    /// The squared channel deltas are summed and scaled so that the distance
    /// between black and white is 100 and identical colours are 0.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        let squared = (dr * dr + dg * dg + db * db) as u32;
        squared * 100 / (255 * 255 * 3)
    }
}
