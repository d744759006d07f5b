//! Color math: RGB ↔ HSB, RGB ↔ CMYK and web-safe snapping.
//!
//! Integer channels are 0–255, everything else is normalized to 0.0–1.0.

use tracing::{trace, warn};

use crate::cmyk::Cmyk;
use crate::color::Rgb;
use crate::constants::{
    CHANNEL_MAX, FIVE_SIXTHS, HALF, SECTOR_SCALE, SIXTH, THIRD, TWO_THIRDS, WEB_SAFE_STEPS,
};
use crate::hsb::Hsb;

/// Clamp to 0.0–1.0. NaN becomes 0.0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        trace!("saturating NaN component to 0.0");
        0.0
    } else if value > 1.0 {
        trace!(value, "saturating component to 1.0");
        1.0
    } else if value < 0.0 {
        trace!(value, "saturating component to 0.0");
        0.0
    } else {
        value
    }
}

/// Round to the nearest channel value. Out-of-range results saturate.
#[inline]
fn channel(value: f64) -> u8 {
    value.round() as u8
}

/// RGB → HSB.
///
/// Brightness is the largest channel and saturation the spread relative to
/// it. Hue is measured from whichever channel is largest, with red at 0°,
/// green at 120° and blue at 240°.
pub fn rgb_to_hsb(color: Rgb) -> Hsb {
    let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let brightness = max as f64 / CHANNEL_MAX;
    let saturation = if max == 0 {
        0.0
    } else {
        delta as f64 / max as f64
    };

    let q = if delta == 0 { 0.0 } else { 60.0 / delta as f64 };
    let hue = if max == r {
        if g < b {
            (360.0 + q * (g - b) as f64) / 360.0
        } else {
            q * (g - b) as f64 / 360.0
        }
    } else if max == g {
        (120.0 + q * (b - r) as f64) / 360.0
    } else {
        (240.0 + q * (r - g) as f64) / 360.0
    };

    Hsb::new(hue, saturation, brightness)
}

/// HSB → RGB.
///
/// The hue circle is split into six sectors. In each one, two channels sit
/// at the maximum and minimum while the third is interpolated between them.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let (h, s, b) = hsb.to_tuple();

    let max = (b * CHANNEL_MAX).round();
    let min = ((1.0 - s) * b * CHANNEL_MAX).round();
    let q = (max - min) / CHANNEL_MAX;

    let rising = |start: f64| channel((h - start) * q * SECTOR_SCALE + min);
    let falling = |start: f64| channel(-((h - start) * q) * SECTOR_SCALE + max);
    let (max, min) = (channel(max), channel(min));

    if (0.0..=SIXTH).contains(&h) {
        Rgb::new(max, rising(0.0), min)
    } else if h <= THIRD {
        Rgb::new(falling(SIXTH), max, min)
    } else if h <= HALF {
        Rgb::new(min, max, rising(THIRD))
    } else if h <= TWO_THIRDS {
        Rgb::new(min, falling(HALF), max)
    } else if h <= FIVE_SIXTHS {
        Rgb::new(rising(TWO_THIRDS), min, max)
    } else if h <= 1.0 {
        Rgb::new(max, min, falling(FIVE_SIXTHS))
    } else {
        warn!(hue = h, "hue outside 0.0–1.0, falling back to black");
        Rgb::BLACK
    }
}

/// RGB → CMYK.
///
/// C, M and Y are the plain complements of R, G and B. K is their minimum
/// but is not subtracted from them, so the result carries the black level
/// twice. [`cmyk_to_rgb`] ignores K accordingly.
pub fn rgb_to_cmyk(color: Rgb) -> Cmyk {
    let c = (CHANNEL_MAX - color.r as f64) / CHANNEL_MAX;
    let m = (CHANNEL_MAX - color.g as f64) / CHANNEL_MAX;
    let y = (CHANNEL_MAX - color.b as f64) / CHANNEL_MAX;

    let low = c.min(m).min(y);
    let k = if low > 0.0 { low } else { 0.0 };

    Cmyk::new(c, m, y, k)
}

/// CMYK → RGB. Only C, M and Y are used; K has no effect.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    Rgb::new(
        channel(CHANNEL_MAX * (1.0 - cmyk.c())),
        channel(CHANNEL_MAX * (1.0 - cmyk.m())),
        channel(CHANNEL_MAX * (1.0 - cmyk.y())),
    )
}

/// Snap each channel to the nearest of the six web-safe levels.
pub fn nearest_web_safe(color: Rgb) -> Rgb {
    let snap = |value: u8| {
        ((value as f64 / CHANNEL_MAX * WEB_SAFE_STEPS).round() / WEB_SAFE_STEPS * CHANNEL_MAX)
            as u8
    };
    Rgb::new(snap(color.r), snap(color.g), snap(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsb_approx(hsb: Hsb, h: f64, s: f64, b: f64) -> bool {
        (hsb.h() - h).abs() < 1e-9 && (hsb.s() - s).abs() < 1e-9 && (hsb.b() - b).abs() < 1e-9
    }

    #[test]
    fn test_black_to_hsb_is_zero() {
        assert_eq!(rgb_to_hsb(Rgb::new(0, 0, 0)), Hsb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        let hsb = rgb_to_hsb(Rgb::new(128, 128, 128));
        assert_eq!(hsb.h(), 0.0);
        assert_eq!(hsb.s(), 0.0);
        assert_eq!(hsb.b(), 128.0 / 255.0);
    }

    #[test]
    fn test_primaries_and_secondaries() {
        let cases = [
            (Rgb::new(255, 0, 0), 0.0),
            (Rgb::new(255, 255, 0), 1.0 / 6.0),
            (Rgb::new(0, 255, 0), 1.0 / 3.0),
            (Rgb::new(0, 255, 255), 0.5),
            (Rgb::new(0, 0, 255), 2.0 / 3.0),
            (Rgb::new(255, 0, 255), 5.0 / 6.0),
        ];
        for (rgb, hue) in cases {
            let hsb = rgb_to_hsb(rgb);
            assert!(hsb_approx(hsb, hue, 1.0, 1.0), "{rgb:?} -> {hsb:?}");
            assert_eq!(hsb_to_rgb(hsb), rgb);
        }
    }

    #[test]
    fn test_red_with_blue_wraps_hue() {
        // max is red and green < blue, so the hue lands just below 360°
        let hsb = rgb_to_hsb(Rgb::new(255, 0, 51));
        assert!(hsb.h() > 5.0 / 6.0 && hsb.h() < 1.0, "{hsb:?}");
        assert_eq!(hsb_to_rgb(hsb), Rgb::new(255, 0, 51));
    }

    #[test]
    fn test_hsb_round_trip_samples() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let rgb = Rgb::new(r, g, b);
                    assert_eq!(hsb_to_rgb(rgb_to_hsb(rgb)), rgb);
                }
            }
        }
    }

    #[test]
    fn test_hsb_to_rgb_known_values() {
        assert_eq!(hsb_to_rgb(Hsb::new(0.0, 0.0, 1.0)), Rgb::WHITE);
        assert_eq!(hsb_to_rgb(Hsb::new(0.7, 1.0, 0.0)), Rgb::BLACK);
        assert_eq!(hsb_to_rgb(Hsb::new(1.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rgb_to_cmyk_extremes() {
        assert_eq!(rgb_to_cmyk(Rgb::WHITE), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_cmyk_keeps_complements() {
        let cmyk = rgb_to_cmyk(Rgb::new(51, 102, 204));
        assert_eq!(cmyk.c(), 204.0 / 255.0);
        assert_eq!(cmyk.m(), 153.0 / 255.0);
        assert_eq!(cmyk.y(), 51.0 / 255.0);
        // K duplicates the smallest complement instead of being factored out
        assert_eq!(cmyk.k(), 51.0 / 255.0);
    }

    #[test]
    fn test_rgb_to_cmyk_zero_minimum_leaves_key_at_zero() {
        let cmyk = rgb_to_cmyk(Rgb::new(255, 128, 0));
        assert_eq!(cmyk.c(), 0.0);
        assert_eq!(cmyk.k(), 0.0);
    }

    #[test]
    fn test_cmyk_to_rgb_ignores_key() {
        assert_eq!(cmyk_to_rgb(Cmyk::new(0.0, 0.0, 0.0, 1.0)), Rgb::WHITE);
        assert_eq!(cmyk_to_rgb(Cmyk::new(1.0, 0.5, 0.0, 0.0)), Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_cmyk_round_trip_through_complements() {
        // K is dropped on the way back; the color survives only because C, M
        // and Y were never reduced by it.
        let rgb = Rgb::new(40, 80, 120);
        let cmyk = rgb_to_cmyk(rgb);
        assert!(cmyk.k() > 0.0);
        assert_eq!(cmyk_to_rgb(cmyk), rgb);
        // a conventional CMYK value with the black factored out does not survive
        let conventional = Cmyk::new(0.0, 0.0, 0.0, cmyk.k());
        assert_eq!(cmyk_to_rgb(conventional), Rgb::WHITE);
    }

    #[test]
    fn test_nearest_web_safe() {
        assert_eq!(nearest_web_safe(Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
        assert_eq!(nearest_web_safe(Rgb::new(130, 130, 130)), Rgb::new(153, 153, 153));
        assert_eq!(nearest_web_safe(Rgb::new(25, 26, 255)), Rgb::new(0, 51, 255));
        assert_eq!(nearest_web_safe(Rgb::new(128, 127, 230)), Rgb::new(153, 102, 255));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(0.3), 0.3);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }
}
