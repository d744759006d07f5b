//! Hex notation for [`Rgb`]: `#RGB`, `#RRGGBB`, with or without the `#`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::color::Rgb;
use crate::error::{ParseColorError, Result};

impl Rgb {
    /// Parse a hex string (with or without `#`, 3 or 6 digits).
    ///
    /// 3-digit shorthand expands each digit, so `F80` is `FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        let parsed = parse_digits(stripped);
        if let Err(ref err) = parsed {
            debug!(input = hex, %err, "rejected hex color");
        }
        parsed
    }

    /// Format as uppercase hex (no `#` prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn parse_digits(digits: &str) -> Result<Rgb> {
    if digits.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(bad));
    }

    // all ASCII from here on, so byte slicing is safe
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ParseColorError::InvalidLength(digits.len()))
    };
    match digits.len() {
        3 => Ok(Rgb::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        len => Err(ParseColorError::InvalidLength(len)),
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
