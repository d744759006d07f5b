//! Numeric constants shared by the conversions.

/// Largest 8-bit channel value, as a float.
pub const CHANNEL_MAX: f64 = 255.0;

/// Hue boundaries of the six hexagon sectors, as fractions of the full circle.
pub(crate) const SIXTH: f64 = 1.0 / 6.0;
pub(crate) const THIRD: f64 = 1.0 / 3.0;
pub(crate) const HALF: f64 = 0.5;
pub(crate) const TWO_THIRDS: f64 = 2.0 / 3.0;
pub(crate) const FIVE_SIXTHS: f64 = 5.0 / 6.0;

/// Scales `hue * (max - min) / 255` back to a channel offset (6 sectors × 255).
pub(crate) const SECTOR_SCALE: f64 = 1530.0;

/// Number of steps between web-safe levels.
pub(crate) const WEB_SAFE_STEPS: f64 = 5.0;

/// The six legal web-safe channel levels.
pub const WEB_SAFE_LEVELS: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xCC, 0xFF];
