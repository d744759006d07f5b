//! Rgb type — the 8-bit pixel representation every conversion starts from.
//!
//! Stores three 0–255 channels. Conversions to and from the other models are
//! thin wrappers over [`crate::math`].

use crate::cmyk::Cmyk;
use crate::constants::WEB_SAFE_LEVELS;
use crate::hsb::Hsb;
use crate::math;

/// RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `(r, g, b)` tuple.
    pub fn to_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Create from HSB.
    pub fn from_hsb(hsb: Hsb) -> Self {
        math::hsb_to_rgb(hsb)
    }

    /// Convert to HSB.
    pub fn to_hsb(&self) -> Hsb {
        math::rgb_to_hsb(*self)
    }

    /// Create from CMYK. The key component is ignored.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        math::cmyk_to_rgb(cmyk)
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        math::rgb_to_cmyk(*self)
    }

    /// Nearest color of the 216-color web-safe palette.
    #[must_use]
    pub fn to_web_safe(&self) -> Self {
        math::nearest_web_safe(*self)
    }

    /// Whether every channel already sits on a web-safe level.
    pub fn is_web_safe(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| WEB_SAFE_LEVELS.contains(c))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        color.to_tuple()
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        Self::from_hsb(hsb)
    }
}

impl From<Rgb> for Hsb {
    fn from(color: Rgb) -> Self {
        color.to_hsb()
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        Self::from_cmyk(cmyk)
    }
}

impl From<Rgb> for Cmyk {
    fn from(color: Rgb) -> Self {
        color.to_cmyk()
    }
}

/// All 216 web-safe colors, red-major then green then blue.
pub fn web_safe_palette() -> impl Iterator<Item = Rgb> {
    WEB_SAFE_LEVELS.into_iter().flat_map(|r| {
        WEB_SAFE_LEVELS.into_iter().flat_map(move |g| {
            WEB_SAFE_LEVELS
                .into_iter()
                .map(move |b| Rgb::new(r, g, b))
        })
    })
}
