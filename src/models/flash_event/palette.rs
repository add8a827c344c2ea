//! Colours used to accent timers and cards per trigger type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(hex.get(6..8)?, 16).ok()?
        } else {
            255
        };

        Some(RgbaColor::new(r, g, b, a))
    }

    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same colour with a new alpha, for glows and tinted backgrounds.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// Gradient stops for a trigger type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPalette {
    pub primary: RgbaColor,
    pub secondary: RgbaColor,
}

impl TriggerPalette {
    pub const fn new(primary: RgbaColor, secondary: RgbaColor) -> Self {
        Self { primary, secondary }
    }

    /// Colour at `t` along the gradient, clamped to [0, 1].
    pub fn sample(&self, t: f32) -> RgbaColor {
        let weight = t.clamp(0.0, 1.0);
        let mix = |start: u8, end: u8| -> u8 {
            let start_f = start as f32;
            let end_f = end as f32;
            (start_f + (end_f - start_f) * weight).round().clamp(0.0, 255.0) as u8
        };
        RgbaColor::new(
            mix(self.primary.r, self.secondary.r),
            mix(self.primary.g, self.secondary.g),
            mix(self.primary.b, self.secondary.b),
            mix(self.primary.a, self.secondary.a),
        )
    }

    /// Glow colour drawn behind urgent timers (60% primary).
    pub fn glow(&self) -> RgbaColor {
        self.primary.with_alpha(153)
    }
}
