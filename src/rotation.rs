//! Coordinate rotation and bit-packing utilities
//!
//! The framebuffer stores 8 horizontal pixels per byte, most significant bit
//! first, rows one after another. Drawing happens in logical coordinates that
//! are mapped onto the buffer according to the canvas [`Rotation`].
//!
//! ## Rotation Modes
//!
//! For a buffer `W` pixels wide and `H` pixels high:
//!
//! - **Rotate0**: identity, logical bounds `W x H`
//! - **Rotate90**: logical bounds `H x W`, `(x, y) -> (W - y, x)`
//! - **Rotate180**: logical bounds `W x H`, `(x, y) -> (W - x, H - y)`
//! - **Rotate270**: logical bounds `H x W`, `(x, y) -> (y, H - x)`
//!
//! A mapped point can land one past the buffer edge; it is dropped by the
//! absolute bounds check like any other out-of-range point.
//!
//! ## Example
//!
//! ```
//! use il3829::{rotation::pixel_location, rotation::rotate_point, Rotation};
//!
//! // Pixel (0,0) is the MSB of byte 0
//! assert_eq!(pixel_location(0, 0, 8), (0, 0x80));
//!
//! // Pixel (7,1) of a 16-pixel wide buffer is the LSB of byte 2
//! assert_eq!(pixel_location(7, 1, 16), (2, 0x01));
//!
//! assert_eq!(rotate_point(2, 3, 16, 8, Rotation::Rotate270), Some((3, 6)));
//! ```

use crate::config::Rotation;

/// Map logical coordinates to absolute buffer coordinates
///
/// Returns `None` if (`x`, `y`) is outside the logical bounds for `rotation`.
/// The returned point is not checked against the buffer.
pub fn rotate_point(x: i32, y: i32, width: i32, height: i32, rotation: Rotation) -> Option<(i32, i32)> {
    let (bound_x, bound_y) = if rotation.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    };
    if x < 0 || x >= bound_x || y < 0 || y >= bound_y {
        return None;
    }

    Some(match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - y, x),
        Rotation::Rotate180 => (width - x, height - y),
        Rotation::Rotate270 => (y, height - x),
    })
}

/// Get the byte index and bit mask of an absolute pixel
///
/// `width` must be a multiple of 8 and (`x`, `y`) must be inside the buffer.
pub fn pixel_location(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (x / 8 + (width / 8) * y) as usize;
    let bit = 0x80 >> (x % 8);
    (index, bit)
}

/// Round a width up to the next multiple of 8
///
/// Saturates at the largest multiple of 8 that fits in a `u32`.
pub fn byte_aligned_width(width: u32) -> u32 {
    width.div_ceil(8).min(u32::MAX / 8) * 8
}
