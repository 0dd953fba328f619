//! Segment colors
//!
//! Segment `i` is painted `colors[i % colors.len()]`. Custom colors replace
//! the default palette entirely while any are set. Label text picks black or
//! white, whichever contrasts more with the fill.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a packed 0xRRGGBB value (upper byte ignored)
    pub const fn from_u32(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance (0 = black, 1 = white)
    pub fn luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio, 1.0 to 21.0
    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (light, dark) = if a > b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Black or white, whichever reads better on this color
    pub fn text_color(&self) -> Rgb {
        if self.contrast_ratio(&Rgb::WHITE) >= self.contrast_ratio(&Rgb::BLACK) {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#RRGGBB`, `RRGGBB` and `#RGB`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            3 => {
                let short = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
                ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)
            }
            _ => return Err(invalid()),
        };
        Ok(Rgb::from_u32(packed))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Built-in segment colors
pub static DEFAULT_COLORS: [Rgb; 10] = [
    Rgb::from_u32(0xFF6B6B),
    Rgb::from_u32(0x4ECDC4),
    Rgb::from_u32(0x45B7D1),
    Rgb::from_u32(0xFFA07A),
    Rgb::from_u32(0x98D8C8),
    Rgb::from_u32(0xF7DC6F),
    Rgb::from_u32(0xBB8FCE),
    Rgb::from_u32(0x85C1E2),
    Rgb::from_u32(0xF8B739),
    Rgb::from_u32(0x52B788),
];

/// Segment color selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    custom: Vec<Rgb>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored hex strings, dropping any that fail to parse
    pub fn from_hex_strings(colors: &[String]) -> Self {
        let custom = colors
            .iter()
            .filter_map(|hex| match hex.parse::<Rgb>() {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("Dropping stored color: {}", e);
                    None
                }
            })
            .collect();
        Self { custom }
    }

    pub fn to_hex_strings(&self) -> Vec<String> {
        self.custom.iter().map(Rgb::to_hex).collect()
    }

    pub fn is_custom(&self) -> bool {
        !self.custom.is_empty()
    }

    pub fn custom(&self) -> &[Rgb] {
        &self.custom
    }

    /// Colors currently in effect
    pub fn colors(&self) -> &[Rgb] {
        if self.custom.is_empty() {
            &DEFAULT_COLORS
        } else {
            &self.custom
        }
    }

    /// Fill color for segment `index`
    pub fn color_for(&self, index: usize) -> Rgb {
        let colors = self.colors();
        colors[index % colors.len()]
    }

    /// Append a random custom color
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Rgb {
        let color = Rgb::from_u32(rng.random_range(0..0xFF_FFFF));
        self.custom.push(color);
        color
    }

    pub fn add(&mut self, color: Rgb) {
        self.custom.push(color);
    }

    pub fn update(&mut self, index: usize, color: Rgb) -> Result<(), ColorError> {
        let slot = self.custom.get_mut(index).ok_or(ColorError::NoSuchColor(index))?;
        *slot = color;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Rgb, ColorError> {
        if index < self.custom.len() {
            Ok(self.custom.remove(index))
        } else {
            Err(ColorError::NoSuchColor(index))
        }
    }

    /// Back to the default palette
    pub fn reset(&mut self) {
        self.custom.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::RngState;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF6B6B".parse::<Rgb>(), Ok(Rgb::new(0xFF, 0x6B, 0x6B)));
        assert_eq!("4ecdc4".parse::<Rgb>(), Ok(Rgb::new(0x4E, 0xCD, 0xC4)));
        assert_eq!("#fff".parse::<Rgb>(), Ok(Rgb::WHITE));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
        assert!("+12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(0x0a, 0xb0, 0xff).to_hex(), "#0AB0FF");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_text_color() {
        assert_eq!(Rgb::WHITE.text_color(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.text_color(), Rgb::WHITE);
        assert_eq!(Rgb::from_u32(0x000080).text_color(), Rgb::WHITE);
        assert_eq!(Rgb::from_u32(0xF7DC6F).text_color(), Rgb::BLACK);
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        assert!((Rgb::WHITE.contrast_ratio(&Rgb::BLACK) - 21.0).abs() < 1e-9);
        assert!((Rgb::WHITE.contrast_ratio(&Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_palette_cycles() {
        let palette = Palette::new();
        assert!(!palette.is_custom());
        assert_eq!(palette.color_for(0), DEFAULT_COLORS[0]);
        assert_eq!(palette.color_for(10), DEFAULT_COLORS[0]);
        assert_eq!(palette.color_for(13), DEFAULT_COLORS[3]);
    }

    #[test]
    fn test_custom_colors() {
        let mut palette = Palette::new();
        let mut rng = RngState::new(3).to_rng();
        palette.add_random(&mut rng);
        palette.add(Rgb::WHITE);
        assert!(palette.is_custom());
        assert_eq!(palette.colors().len(), 2);
        assert_eq!(palette.color_for(3), Rgb::WHITE);

        palette.update(0, Rgb::BLACK).unwrap();
        assert_eq!(palette.color_for(0), Rgb::BLACK);
        assert_eq!(palette.update(7, Rgb::BLACK), Err(ColorError::NoSuchColor(7)));

        assert_eq!(palette.remove(1), Ok(Rgb::WHITE));
        palette.reset();
        assert_eq!(palette.colors(), &DEFAULT_COLORS);
    }

    #[test]
    fn test_hex_strings_round_trip() {
        let stored = vec!["#112233".to_string(), "bogus".to_string()];
        let palette = Palette::from_hex_strings(&stored);
        assert_eq!(palette.to_hex_strings(), vec!["#112233".to_string()]);
    }
}
