//! Colors - Page Theme Colors

use std::fmt;

/// An opaque RGB colour, written as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

/// Shorthand constructor, mirrors CSS hex notation
pub const fn rgb(hex: u32) -> Rgb {
    Rgb(hex & 0x00ff_ffff)
}

impl Rgb {
    pub fn r(&self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub fn g(&self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn b(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Page colour palette - All colors are accessed via associated functions
pub struct PageColors;

impl PageColors {
    // Fetch status
    /// Fetch failure text - Red
    pub fn load_failed() -> Rgb { rgb(0xff0000) }

    // Form feedback
    /// Success text - Green
    pub fn success_fg() -> Rgb { rgb(0x28a745) }
    /// Success background - Light green
    pub fn success_bg() -> Rgb { rgb(0xd4edda) }
    /// Error text - Red
    pub fn error_fg() -> Rgb { rgb(0xdc3545) }
    /// Error background - Light red
    pub fn error_bg() -> Rgb { rgb(0xffbaba) }
}
