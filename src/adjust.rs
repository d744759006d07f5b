//! Brightness, saturation and hue adjustments that round-trip through HSB.
//!
//! `set_*` replaces one HSB component with an absolute value, `modify_*`
//! scales it by a factor (below 1.0 lowers it, above 1.0 raises it). Either
//! way the new component is clamped to 0.0–1.0 before converting back.

use crate::color::Rgb;
use crate::hsb::Hsb;
use crate::math::{hsb_to_rgb, rgb_to_hsb};

fn adjust(color: Rgb, f: impl FnOnce(Hsb) -> Hsb) -> Rgb {
    hsb_to_rgb(f(rgb_to_hsb(color)))
}

pub fn set_brightness(color: Rgb, brightness: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_brightness(brightness))
}

pub fn modify_brightness(color: Rgb, factor: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_brightness(hsb.b() * factor))
}

pub fn set_saturation(color: Rgb, saturation: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_saturation(saturation))
}

pub fn modify_saturation(color: Rgb, factor: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_saturation(hsb.s() * factor))
}

pub fn set_hue(color: Rgb, hue: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_hue(hue))
}

/// Scale the hue. Values past 1.0 clamp to 1.0 (red) rather than wrapping.
pub fn modify_hue(color: Rgb, factor: f64) -> Rgb {
    adjust(color, |hsb| hsb.with_hue(hsb.h() * factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE: Rgb = Rgb::new(200, 100, 50);

    #[test]
    fn test_set_brightness() {
        assert_eq!(set_brightness(ORANGE, 1.0), Rgb::new(255, 128, 64));
        assert_eq!(set_brightness(ORANGE, 0.5), Rgb::new(128, 64, 32));
        assert_eq!(set_brightness(ORANGE, 0.0), Rgb::BLACK);
        assert_eq!(set_brightness(ORANGE, 3.0), set_brightness(ORANGE, 1.0));
    }

    #[test]
    fn test_modify_brightness() {
        assert_eq!(modify_brightness(ORANGE, 2.0), Rgb::new(255, 128, 64));
        assert_eq!(modify_brightness(Rgb::new(100, 100, 100), 0.5), Rgb::new(50, 50, 50));
        assert_eq!(modify_brightness(ORANGE, 1.0), ORANGE);
    }

    #[test]
    fn test_set_saturation() {
        assert_eq!(set_saturation(ORANGE, 0.0), Rgb::new(200, 200, 200));
        assert_eq!(set_saturation(ORANGE, -1.0), Rgb::new(200, 200, 200));
    }

    #[test]
    fn test_modify_saturation() {
        assert_eq!(modify_saturation(ORANGE, 0.5), Rgb::new(200, 150, 125));
        assert_eq!(modify_saturation(ORANGE, 0.0), Rgb::new(200, 200, 200));
    }

    #[test]
    fn test_set_hue() {
        assert_eq!(set_hue(ORANGE, 0.5), Rgb::new(50, 200, 200));
        assert_eq!(set_hue(Rgb::new(255, 0, 0), 1.0 / 3.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_modify_hue() {
        assert_eq!(modify_hue(ORANGE, 0.5), Rgb::new(200, 75, 50));
        // hue of 0.9667 scaled past 1.0 clamps to pure red
        assert_eq!(modify_hue(Rgb::new(255, 0, 51), 2.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_gray_ignores_hue() {
        let gray = Rgb::new(90, 90, 90);
        assert_eq!(set_hue(gray, 0.4), gray);
        assert_eq!(modify_hue(gray, 3.0), gray);
    }
}
