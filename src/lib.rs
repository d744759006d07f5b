//! # picker-color
//!
//! Color math for color picker widgets: RGB ↔ HSB, RGB ↔ CMYK, web-safe
//! snapping, and brightness/saturation/hue adjustments.
//!
//! Every function is pure and total. [`Hsb`] and [`Cmyk`] clamp their
//! components to 0.0–1.0, so out-of-range input saturates instead of failing.
//!
//! ## Usage
//!
//! ```rust
//! use picker_color::{hsb_to_rgb, nearest_web_safe, rgb_to_hsb, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let hsb = rgb_to_hsb(red);
//! assert_eq!((hsb.h(), hsb.s(), hsb.b()), (0.0, 1.0, 1.0));
//! assert_eq!(hsb_to_rgb(hsb), red);
//!
//! assert_eq!(nearest_web_safe(Rgb::new(130, 130, 130)), Rgb::new(153, 153, 153));
//! ```
//!
//! ## Features
//!
//! - `hex` (default): `Rgb::from_hex`, `Rgb::to_hex`, `FromStr` and `Display`.
//! - `serde`: serialization of [`Rgb`], [`Hsb`] and [`Cmyk`]. Decoded
//!   [`Hsb`]/[`Cmyk`] values are clamped like any other.

mod adjust;
mod cmyk;
mod color;
mod constants;
mod error;
#[cfg(feature = "hex")]
mod hex;
mod hsb;
mod math;

pub use adjust::{
    modify_brightness, modify_hue, modify_saturation, set_brightness, set_hue, set_saturation,
};
pub use cmyk::Cmyk;
pub use color::{web_safe_palette, Rgb};
pub use constants::{CHANNEL_MAX, WEB_SAFE_LEVELS};
pub use error::{ParseColorError, Result};
pub use hsb::Hsb;
pub use math::{cmyk_to_rgb, hsb_to_rgb, nearest_web_safe, rgb_to_cmyk, rgb_to_hsb};
