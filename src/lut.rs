//! Waveform look-up tables
//!
//! The controller needs a 30-byte waveform program before the first update.
//! Two tables are provided: a full update that cycles every pixel (slow, clean)
//! and a partial update that only drives changed pixels (fast, may ghost).

/// Length in bytes of a waveform table
pub const LUT_SIZE: usize = 30;

/// Waveform for a full update
#[rustfmt::skip]
pub const LUT_FULL_UPDATE: [u8; LUT_SIZE] = [
    0x02, 0x02, 0x01, 0x11, 0x12, 0x12, 0x22, 0x22,
    0x66, 0x69, 0x69, 0x59, 0x58, 0x99, 0x99, 0x88,
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xB4, 0x13, 0x51,
    0x35, 0x51, 0x51, 0x19, 0x01, 0x00,
];

/// Waveform for a partial update
#[rustfmt::skip]
pub const LUT_PARTIAL_UPDATE: [u8; LUT_SIZE] = [
    0x10, 0x18, 0x18, 0x08, 0x18, 0x18, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x13, 0x14, 0x44, 0x12,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Waveform selected at initialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lut {
    /// Full update: higher quality, slower
    #[default]
    FullUpdate,
    /// Partial update: faster, may leave ghosting
    PartialUpdate,
}

impl Lut {
    /// Raw table bytes uploaded with [`WRITE_LUT_REGISTER`](crate::command::WRITE_LUT_REGISTER)
    pub fn bytes(self) -> &'static [u8; LUT_SIZE] {
        match self {
            Self::FullUpdate => &LUT_FULL_UPDATE,
            Self::PartialUpdate => &LUT_PARTIAL_UPDATE,
        }
    }
}
