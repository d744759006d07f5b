//! Hue/saturation/brightness value type.

use std::fmt;

use crate::math::clamp_unit;

/// HSB (a.k.a. HSV) color with every component in the 0.0–1.0 range.
///
/// Hue maps 0.0–1.0 onto 0°–360°. Components are clamped whenever a value is
/// built, so an out-of-range input saturates to the nearest bound instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HsbFields", into = "HsbFields")
)]
pub struct Hsb {
    h: f64,
    s: f64,
    b: f64,
}

impl Hsb {
    /// Black: zero hue, saturation and brightness.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        b: 0.0,
    };

    /// Create from hue, saturation and brightness, clamping each to 0.0–1.0.
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self {
            h: clamp_unit(h),
            s: clamp_unit(s),
            b: clamp_unit(b),
        }
    }

    /// Hue (0.0–1.0).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation (0.0–1.0).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Brightness (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Hue in degrees (0.0–360.0).
    pub fn hue_degrees(&self) -> f64 {
        self.h * 360.0
    }

    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self {
            h: clamp_unit(h),
            ..self
        }
    }

    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: clamp_unit(s),
            ..self
        }
    }

    #[must_use]
    pub fn with_brightness(self, b: f64) -> Self {
        Self {
            b: clamp_unit(b),
            ..self
        }
    }

    /// Components as `(h, s, b)`.
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.h, self.s, self.b)
    }
}

impl From<(f64, f64, f64)> for Hsb {
    fn from((h, s, b): (f64, f64, f64)) -> Self {
        Self::new(h, s, b)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({:.0}°, {:.0}%, {:.0}%)",
            self.hue_degrees(),
            self.s * 100.0,
            self.b * 100.0
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct HsbFields {
    h: f64,
    s: f64,
    b: f64,
}

#[cfg(feature = "serde")]
impl From<HsbFields> for Hsb {
    fn from(fields: HsbFields) -> Self {
        Self::new(fields.h, fields.s, fields.b)
    }
}

#[cfg(feature = "serde")]
impl From<Hsb> for HsbFields {
    fn from(hsb: Hsb) -> Self {
        Self {
            h: hsb.h,
            s: hsb.s,
            b: hsb.b,
        }
    }
}
