//! Color parsing and HSL adjustments
//!
//! Only what the palette needs: parse the CSS-ish literals in the color
//! table, test perceived lightness, and shift saturation/lightness in HSL
//! space before printing the result back as hex.

use ::palette::{Darken, Desaturate, FromColor, Hsl, Srgb};

use crate::error::ColorError;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgb(r, g, b)`
    ///
    /// Alpha is accepted and dropped.
    pub fn parse(literal: &str) -> Result<Self, ColorError> {
        let trimmed = literal.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| ColorError::Unrecognised(literal.to_string()));
        }
        if let Some(args) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_args(args, literal);
        }
        Err(ColorError::Unrecognised(literal.to_string()))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 | 4 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::new(digits.next()??, digits.next()??, digits.next()??))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    fn parse_rgb_args(args: &str, literal: &str) -> Result<Self, ColorError> {
        let channels: Vec<&str> = args.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return Err(ColorError::Unrecognised(literal.to_string()));
        }
        let mut values = [0u8; 3];
        for (slot, channel) in values.iter_mut().zip(&channels) {
            let value: u32 = channel
                .parse()
                .map_err(|_| ColorError::Unrecognised(literal.to_string()))?;
            *slot = u8::try_from(value)
                .map_err(|_| ColorError::ChannelOutOfRange(literal.to_string()))?;
        }
        Ok(Self::new(values[0], values[1], values[2]))
    }

    /// Perceived brightness in `0.0..=1.0` (ITU-R BT.601 weights)
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0 / 255.0
    }

    /// Check if the color reads as light
    pub fn is_light(&self) -> bool {
        self.brightness() >= 0.5
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Take `saturation` off the HSL saturation and `lightness` off the HSL
    /// lightness, both as absolute amounts clamped at zero
    pub fn muted(&self, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::from_color(Srgb::<u8>::from(*self).into_format::<f32>());
        let muted = hsl.desaturate_fixed(saturation).darken_fixed(lightness);
        let srgb: Srgb = Srgb::from_color(muted);
        srgb.into_format::<u8>().into()
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}
