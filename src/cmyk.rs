//! Cyan/magenta/yellow/key value type.

use std::fmt;

use crate::math::clamp_unit;

/// CMYK color with every component in the 0.0–1.0 range.
///
/// As with [`Hsb`](crate::Hsb), components saturate to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CmykFields", into = "CmykFields")
)]
pub struct Cmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl Cmyk {
    /// No ink at all.
    pub const WHITE: Self = Self {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 0.0,
    };

    /// Create from the four components, clamping each to 0.0–1.0.
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: clamp_unit(c),
            m: clamp_unit(m),
            y: clamp_unit(y),
            k: clamp_unit(k),
        }
    }

    /// Cyan (0.0–1.0).
    pub fn c(&self) -> f64 {
        self.c
    }
    /// Magenta (0.0–1.0).
    pub fn m(&self) -> f64 {
        self.m
    }
    /// Yellow (0.0–1.0).
    pub fn y(&self) -> f64 {
        self.y
    }
    /// Key, i.e. black (0.0–1.0).
    pub fn k(&self) -> f64 {
        self.k
    }

    #[must_use]
    pub fn with_cyan(self, c: f64) -> Self {
        Self {
            c: clamp_unit(c),
            ..self
        }
    }

    #[must_use]
    pub fn with_magenta(self, m: f64) -> Self {
        Self {
            m: clamp_unit(m),
            ..self
        }
    }

    #[must_use]
    pub fn with_yellow(self, y: f64) -> Self {
        Self {
            y: clamp_unit(y),
            ..self
        }
    }

    #[must_use]
    pub fn with_key(self, k: f64) -> Self {
        Self {
            k: clamp_unit(k),
            ..self
        }
    }

    /// Components as `(c, m, y, k)`.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.c, self.m, self.y, self.k)
    }
}

impl From<(f64, f64, f64, f64)> for Cmyk {
    fn from((c, m, y, k): (f64, f64, f64, f64)) -> Self {
        Self::new(c, m, y, k)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({:.0}%, {:.0}%, {:.0}%, {:.0}%)",
            self.c * 100.0,
            self.m * 100.0,
            self.y * 100.0,
            self.k * 100.0
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CmykFields {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

#[cfg(feature = "serde")]
impl From<CmykFields> for Cmyk {
    fn from(fields: CmykFields) -> Self {
        Self::new(fields.c, fields.m, fields.y, fields.k)
    }
}

#[cfg(feature = "serde")]
impl From<Cmyk> for CmykFields {
    fn from(cmyk: Cmyk) -> Self {
        Self {
            c: cmyk.c,
            m: cmyk.m,
            y: cmyk.y,
            k: cmyk.k,
        }
    }
}
