//! Pixel colors and bit polarity
//!
//! A monochrome panel has two pixel states: ink ([`Color::Colored`]) and
//! paper ([`Color::Uncolored`]). Which bit value stands for ink is decided by
//! the [`Polarity`] convention of the canvas.
//!
//! | Polarity   | Colored | Uncolored |
//! |------------|---------|-----------|
//! | `Normal`   | 0       | 1         |
//! | `Inverted` | 1       | 0         |
//!
//! ## Example
//!
//! ```
//! use il3829::{Color, Polarity};
//!
//! assert_eq!(Polarity::Normal.fill_byte(Color::Colored), 0x00);
//! assert_eq!(Polarity::Inverted.fill_byte(Color::Colored), 0xFF);
//! ```

/// Color of a single pixel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Ink
    Colored,
    /// Paper
    Uncolored,
}

impl From<bool> for Color {
    fn from(colored: bool) -> Self {
        if colored {
            Self::Colored
        } else {
            Self::Uncolored
        }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

/// Mapping between [`Color`] and the bit stored in the framebuffer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Polarity {
    /// Colored clears the bit (controller RAM: 0 = black)
    #[default]
    Normal,
    /// Colored sets the bit
    Inverted,
}

impl Polarity {
    /// Whether `color` is stored as a set bit
    pub fn bit_set(self, color: Color) -> bool {
        match (self, color) {
            (Self::Normal, Color::Uncolored) | (Self::Inverted, Color::Colored) => true,
            (Self::Normal, Color::Colored) | (Self::Inverted, Color::Uncolored) => false,
        }
    }

    /// Byte value with all 8 pixels set to `color`
    pub fn fill_byte(self, color: Color) -> u8 {
        if self.bit_set(color) { 0xFF } else { 0x00 }
    }

    /// Color stored by a bit
    pub fn color(self, bit_set: bool) -> Color {
        match self {
            Self::Normal => Color::from(!bit_set),
            Self::Inverted => Color::from(bit_set),
        }
    }
}
