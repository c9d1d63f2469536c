//! RGBA colors and the textual color forms accepted by `to-color`.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// An RGBA color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

fn rgb_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
    })
}

fn rgba_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$")
            .unwrap()
    })
}

impl Color {
    pub fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// Parses `rgb(r,g,b)`, `rgba(r,g,b,a)`, `#rrggbb` and `#rgb` (shorthand,
    /// each nibble duplicated). Alpha must be a fraction in `0..=1`.
    pub fn parse(text: &str) -> Option<Color> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return Color::from_hex(hex);
        }
        if let Some(caps) = rgba_regex().captures(text) {
            let a: f32 = caps[4].parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            return Some(Color {
                r: caps[1].parse().ok()?,
                g: caps[2].parse().ok()?,
                b: caps[3].parse().ok()?,
                a,
            });
        }
        if let Some(caps) = rgb_regex().captures(text) {
            return Some(Color::opaque(
                caps[1].parse().ok()?,
                caps[2].parse().ok()?,
                caps[3].parse().ok()?,
            ));
        }
        None
    }

    fn from_hex(hex: &str) -> Option<Color> {
        match hex.len() {
            6 => {
                let n = u32::from_str_radix(hex, 16).ok()?;
                Some(Color::opaque((n >> 16) as u8, (n >> 8) as u8, n as u8))
            }
            3 => {
                let n = u32::from_str_radix(hex, 16).ok()?;
                let dup = |nibble: u32| ((nibble << 4) | nibble) as u8;
                Some(Color::opaque(
                    dup((n >> 8) & 0xf),
                    dup((n >> 4) & 0xf),
                    dup(n & 0xf),
                ))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
