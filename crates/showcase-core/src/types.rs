//! Small value types shared across the core

use std::fmt;

/// Accent color of a catalog entry, stored as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    /// Create an accent from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an accent from a packed `0xRRGGBB` value
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Relative luminance in `0.0..=1.0`, used to pick readable foregrounds
    pub fn luminance(&self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }

    /// Whether text drawn on this accent should be dark
    pub fn prefers_dark_text(&self) -> bool {
        self.luminance() > 0.6
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32() {
        assert_eq!(Accent::from_u32(0x61DAFB), Accent::rgb(0x61, 0xDA, 0xFB));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Accent::from_u32(0x000020).to_string(), "#000020");
        assert_eq!(Accent::from_u32(0x6C63FF).to_string(), "#6C63FF");
    }

    #[test]
    fn test_text_contrast() {
        assert!(Accent::from_u32(0x61DAFB).prefers_dark_text());
        assert!(!Accent::from_u32(0x000020).prefers_dark_text());
    }
}
