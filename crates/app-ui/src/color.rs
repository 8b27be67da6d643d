//! Color parsing and perceived brightness
//!
//! The page reports its rendered background as resolved color text
//! (`rgb(r, g, b)`, `rgba(r, g, b, a)` or `#RRGGBB`). This module turns that
//! text into channels and picks a readable text color from it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Luminance weights for the red, green and blue channels (BT.709)
pub const LUMINANCE_WEIGHTS: (f64, f64, f64) = (0.2126, 0.7152, 0.0722);

/// Brightness below which text is drawn white
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Brightness assumed when the background cannot be read
pub const DEFAULT_FALLBACK_BRIGHTNESS: f64 = 0.5;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in `[0, 1]`
    ///
    /// `(0.2126·R + 0.7152·G + 0.0722·B) / 255`, without sRGB
    /// linearization.
    pub fn brightness(&self) -> f64 {
        let (wr, wg, wb) = LUMINANCE_WEIGHTS;
        (wr * f64::from(self.r) + wg * f64::from(self.g) + wb * f64::from(self.b)) / 255.0
    }
}

/// A background color as the page resolved it at query time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedBackground {
    /// Color channels
    pub rgb: Rgb,
    /// Alpha in `[0, 1]`, when the resolved value carried one
    pub alpha: Option<f64>,
}

impl ComputedBackground {
    /// Parse resolved color text
    ///
    /// Returns `None` when fewer than three numeric channels can be read,
    /// e.g. for `transparent` or an empty string.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return parse_hex_rgba(value);
        }

        let mut numbers = number_pattern()
            .find_iter(value)
            .filter_map(|m| m.as_str().parse::<f64>().ok());

        let r = channel(numbers.next()?);
        let g = channel(numbers.next()?);
        let b = channel(numbers.next()?);
        let alpha = numbers.next().map(|a| a.clamp(0.0, 1.0));

        Some(Self { rgb: Rgb::new(r, g, b), alpha })
    }

    /// Whether nothing of this color shows through
    pub fn is_transparent(&self) -> bool {
        matches!(self.alpha, Some(a) if a <= 0.0)
    }

    /// Perceived brightness, or `None` for a fully transparent color
    pub fn brightness(&self) -> Option<f64> {
        if self.is_transparent() {
            None
        } else {
            Some(self.rgb.brightness())
        }
    }
}

/// Resolve the brightness of resolved color text
///
/// Unreadable or fully transparent values resolve to `fallback`.
pub fn brightness_of(value: &str, fallback: f64) -> f64 {
    ComputedBackground::parse(value)
        .and_then(|bg| bg.brightness())
        .unwrap_or(fallback)
}

/// The two text colors the page can be switched between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// White text, for dark backgrounds
    White,
    /// Black text, for light backgrounds
    Black,
}

impl TextColor {
    /// Pick the readable text color for a background brightness
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness < BRIGHTNESS_THRESHOLD {
            TextColor::White
        } else {
            TextColor::Black
        }
    }

    /// CSS color keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl std::fmt::Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// `#RRGGBB` or `#RRGGBBAA`; shorthand forms are not resolved values
fn parse_hex_rgba(value: &str) -> Option<ComputedBackground> {
    let digits = value.strip_prefix('#')?;
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let rgb = Rgb::new(byte_at(0)?, byte_at(2)?, byte_at(4)?);
    let alpha = if digits.len() == 8 {
        Some(f64::from(byte_at(6)?) / 255.0)
    } else {
        None
    };

    Some(ComputedBackground { rgb, alpha })
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn number_pattern() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?|\.\d+").unwrap())
}
