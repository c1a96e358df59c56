//! Glyph table contract
//!
//! A [`Font`] is a fixed-size bitmap font covering printable ASCII from `' '`
//! upward. Each glyph is `height` rows of `ceil(width / 8)` bytes, most
//! significant bit first, and glyphs follow one another in character order.

/// Bitmap font backed by a static glyph table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    /// Glyph width in pixels
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
    /// Packed glyph rows for consecutive characters starting at `' '`
    pub table: &'static [u8],
}

impl Font {
    /// Create a font from its glyph table
    pub const fn new(width: u16, height: u16, table: &'static [u8]) -> Self {
        Self {
            width,
            height,
            table,
        }
    }

    /// Bytes per glyph row
    pub fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub fn glyph_size(&self) -> usize {
        self.height as usize * self.row_bytes()
    }

    /// Packed rows of `ch`, or `None` if the table has no entry for it
    pub fn glyph(&self, ch: char) -> Option<&'static [u8]> {
        let index = (ch as u32).checked_sub(' ' as u32)? as usize;
        let start = index.checked_mul(self.glyph_size())?;
        self.table.get(start..start.checked_add(self.glyph_size())?)
    }
}
