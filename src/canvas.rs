//! Packed monochrome framebuffer and drawing primitives
//!
//! A [`Canvas`] owns a 1-bit-per-pixel buffer laid out exactly as the
//! controller RAM expects: `width / 8` bytes per row, most significant bit
//! first. Drawing takes logical coordinates, maps them through the canvas
//! [`Rotation`], and silently ignores anything that falls outside.
//!
//! ## Example
//!
//! ```
//! use il3829::{Canvas, Color, Rotation};
//!
//! let mut canvas = Canvas::new(16, 16, Rotation::Rotate0);
//! canvas.clear(Color::Uncolored);
//! canvas.draw_filled_rectangle(4, 4, 11, 11, Color::Colored);
//!
//! assert_eq!(canvas.pixel(0, 0), Some(Color::Uncolored));
//! assert_eq!(canvas.pixel(8, 8), Some(Color::Colored));
//! assert_eq!(canvas.pixel(15, 15), Some(Color::Uncolored));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Color, Polarity};
use crate::config::Rotation;
use crate::error::CanvasError;
use crate::font::Font;
use crate::rotation::{byte_aligned_width, pixel_location, rotate_point};

/// In-memory framebuffer with drawing primitives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels, always a multiple of 8
    width: u32,
    /// Height in pixels
    height: u32,
    rotation: Rotation,
    polarity: Polarity,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Create a zeroed canvas
    ///
    /// `width` is rounded up to the next multiple of 8.
    pub fn new(width: u32, height: u32, rotation: Rotation) -> Self {
        let width = byte_aligned_width(width);
        let len = ((width / 8) as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            rotation,
            polarity: Polarity::default(),
            buffer: vec![0u8; len],
        }
    }

    /// Create a canvas seeded with an existing image
    ///
    /// Copies as much of `source` as fits into the buffer.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InsufficientSource` if `source` holds fewer than
    /// `width * height / 8` bytes.
    pub fn from_bytes(
        width: u32,
        height: u32,
        rotation: Rotation,
        source: &[u8],
    ) -> Result<Self, CanvasError> {
        let required =
            usize::try_from(u64::from(width) * u64::from(height) / 8).unwrap_or(usize::MAX);
        if source.len() < required {
            return Err(CanvasError::InsufficientSource {
                required,
                provided: source.len(),
            });
        }

        let mut canvas = Self::new(width, height, rotation);
        let len = canvas.buffer.len().min(source.len());
        canvas.buffer[..len].copy_from_slice(&source[..len]);
        Ok(canvas)
    }

    /// Select the bit polarity used by every drawing call
    #[must_use]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Buffer width in pixels (multiple of 8)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rotation applied by [`draw_pixel`](Self::draw_pixel)
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Bit polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Packed pixel data, ready to send to the controller
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable access to the packed pixel data
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Consume the canvas, returning its buffer
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    /// Set every pixel to `color`
    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(self.polarity.fill_byte(color));
    }

    /// Set the pixel at buffer coordinates (`x`, `y`), ignoring rotation
    pub fn draw_absolute_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };
        if self.polarity.bit_set(color) {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
    }

    /// Read the pixel at buffer coordinates (`x`, `y`), ignoring rotation
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        Some(self.polarity.color(self.buffer[index] & bit != 0))
    }

    /// Set the pixel at logical coordinates (`x`, `y`)
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (width, height) = self.extent();
        if let Some((x, y)) = rotate_point(x, y, width, height, self.rotation) {
            self.draw_absolute_pixel(x, y, color);
        }
    }

    /// Draw one glyph with its top-left corner at (`x`, `y`)
    ///
    /// Only the glyph's set bits are drawn; characters the font has no glyph
    /// for draw nothing.
    pub fn draw_char_at(&mut self, x: i32, y: i32, ch: char, font: &Font, color: Color) {
        let Some(glyph) = font.glyph(ch) else {
            return;
        };
        let row_bytes = font.row_bytes();
        if row_bytes == 0 {
            return;
        }

        for (row, dy) in glyph.chunks(row_bytes).zip(0i32..) {
            for (i, dx) in (0..usize::from(font.width)).zip(0i32..) {
                let set = row.get(i / 8).is_some_and(|byte| byte & (0x80 >> (i % 8)) != 0);
                if set {
                    self.draw_pixel(x.saturating_add(dx), y.saturating_add(dy), color);
                }
            }
        }
    }

    /// Draw `text` left to right starting at (`x`, `y`)
    ///
    /// Advances by the font width per character without wrapping. Returns
    /// the number of characters processed.
    pub fn draw_string_at(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: &Font,
        color: Color,
    ) -> usize {
        let mut column = x;
        let mut count = 0;
        for ch in text.chars() {
            self.draw_char_at(column, y, ch, font, color);
            column = column.saturating_add(i32::from(font.width));
            count += 1;
        }
        count
    }

    /// Draw a line between two points, both included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (bound_x, bound_y) = self.logical_extent();
        for (x, y) in LinePoints::new(x0, y0, x1, y1).clip(bound_x, bound_y) {
            self.draw_pixel(x, y, color);
        }
    }

    /// Draw `line_width` pixels to the right of (`x`, `y`)
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, line_width: i32, color: Color) {
        let x = i64::from(x);
        self.horizontal_span(x, x + i64::from(line_width), i64::from(y), color);
    }

    /// Draw `line_height` pixels downward from (`x`, `y`)
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, line_height: i32, color: Color) {
        let y = i64::from(y);
        self.vertical_span(i64::from(x), y, y + i64::from(line_height), color);
    }

    /// Draw the outline of the rectangle spanned by two corners
    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (min_x, max_x) = (i64::from(x0.min(x1)), i64::from(x0.max(x1)));
        let (min_y, max_y) = (i64::from(y0.min(y1)), i64::from(y0.max(y1)));

        self.horizontal_span(min_x, max_x + 1, min_y, color);
        self.horizontal_span(min_x, max_x + 1, max_y, color);
        self.vertical_span(min_x, min_y, max_y + 1, color);
        self.vertical_span(max_x, min_y, max_y + 1, color);
    }

    /// Fill the rectangle spanned by two corners
    pub fn draw_filled_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (min_x, max_x) = (i64::from(x0.min(x1)), i64::from(x0.max(x1)));
        let (min_y, max_y) = (i64::from(y0.min(y1)), i64::from(y0.max(y1)));
        let (bound_x, _) = self.logical_extent();

        for x in min_x.max(0)..=max_x.min(bound_x - 1) {
            self.vertical_span(x, min_y, max_y + 1, color);
        }
    }

    /// Draw a circle outline centered on (`x`, `y`)
    ///
    /// A radius of 0 plots the center; a negative radius draws nothing.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) {
        self.circle(x, y, radius, color, false);
    }

    /// Draw a filled circle centered on (`x`, `y`)
    pub fn draw_filled_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) {
        self.circle(x, y, radius, color, true);
    }

    fn circle(&mut self, x: i32, y: i32, radius: i32, color: Color, filled: bool) {
        if radius < 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(radius));
        let (bound_x, bound_y) = self.logical_extent();
        if bound_x == 0 || bound_y == 0 {
            return;
        }

        // Nearest and furthest canvas column / row from the center
        let near_x = cx - cx.clamp(0, bound_x - 1);
        let near_y = cy - cy.clamp(0, bound_y - 1);
        let far_x = cx.abs().max((cx - (bound_x - 1)).abs());
        let far_y = cy.abs().max((cy - (bound_y - 1)).abs());
        let distance = |dx: i64, dy: i64| i128::from(dx).pow(2) + i128::from(dy).pow(2);

        // Whole canvas at least 2 pixels outside the outline
        let outer = i128::from(r) + 2;
        if distance(near_x, near_y) >= outer * outer {
            return;
        }

        // Whole canvas at least 2 pixels inside the outline
        let inner = i128::from(r - 2);
        if r >= 2 && distance(far_x, far_y) <= inner * inner {
            if filled {
                for row in 0..bound_y {
                    self.horizontal_span(0, bound_x, row, color);
                }
            }
            return;
        }

        let mut x_pos = -r;
        let mut y_pos: i64 = 0;
        let mut err = 2 - 2 * r;

        // Both offsets only shrink toward the center line, so once either
        // leaves the canvas nothing further can land on it
        while y_pos <= far_y && -x_pos >= near_x.abs() {
            self.plot(cx - x_pos, cy + y_pos, color);
            self.plot(cx + x_pos, cy + y_pos, color);
            self.plot(cx + x_pos, cy - y_pos, color);
            self.plot(cx - x_pos, cy - y_pos, color);
            if filled {
                self.horizontal_span(cx + x_pos, cx - x_pos + 1, cy + y_pos, color);
                self.horizontal_span(cx + x_pos, cx - x_pos + 1, cy - y_pos, color);
            }

            let mut e2 = err;
            if e2 <= y_pos {
                y_pos += 1;
                err += y_pos * 2 + 1;
                if -x_pos == y_pos && e2 <= x_pos {
                    e2 = 0;
                }
            }
            if e2 > x_pos {
                x_pos += 1;
                err += x_pos * 2 + 1;
            }
            if x_pos > 0 {
                break;
            }
        }
    }

    /// Plot the cells `x_start..x_end` of row `y`, clipped to the canvas
    fn horizontal_span(&mut self, x_start: i64, x_end: i64, y: i64, color: Color) {
        let (bound_x, bound_y) = self.logical_extent();
        if y < 0 || y >= bound_y {
            return;
        }
        for x in x_start.max(0)..x_end.min(bound_x) {
            self.plot(x, y, color);
        }
    }

    /// Plot the cells `y_start..y_end` of column `x`, clipped to the canvas
    fn vertical_span(&mut self, x: i64, y_start: i64, y_end: i64, color: Color) {
        let (bound_x, bound_y) = self.logical_extent();
        if x < 0 || x >= bound_x {
            return;
        }
        for y in y_start.max(0)..y_end.min(bound_y) {
            self.plot(x, y, color);
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.draw_pixel(x, y, color);
        }
    }

    /// Buffer dimensions as signed coordinates
    fn extent(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    /// Bounds accepted by [`draw_pixel`](Self::draw_pixel)
    fn logical_extent(&self) -> (i64, i64) {
        let (width, height) = self.extent();
        let (width, height) = (i64::from(width), i64::from(height));
        if self.rotation.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Byte index and mask of an absolute pixel, if inside the buffer
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let (width, height) = self.extent();
        if x < 0 || x >= width || y < 0 || y >= height {
            return None;
        }
        Some(pixel_location(x as u32, y as u32, self.width))
    }
}

/// Pixels of a line between two points, both ends included
///
/// Steps one pixel at a time along the major axis and takes the minor
/// coordinate nearest the ideal line, the same pixels Bresenham's algorithm
/// selects. Each point is computed from its step index, so the walk can be
/// narrowed to the steps that land on the canvas.
#[derive(Clone, Debug)]
struct LinePoints {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
    steps: i64,
    next: i64,
    last: i64,
}

impl LinePoints {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let dx = i64::from(x1) - x0;
        let dy = i64::from(y1) - y0;
        let steps = dx.abs().max(dy.abs());
        Self {
            x0,
            y0,
            dx,
            dy,
            steps,
            next: 0,
            last: steps,
        }
    }

    /// Keep only the steps whose major coordinate is inside `bound_x` x `bound_y`
    fn clip(mut self, bound_x: i64, bound_y: i64) -> Self {
        let (start, delta, bound) = if self.dx.abs() >= self.dy.abs() {
            (self.x0, self.dx, bound_x)
        } else {
            (self.y0, self.dy, bound_y)
        };
        let (lo, hi) = if delta >= 0 {
            (-start, bound - 1 - start)
        } else {
            (start - (bound - 1), start)
        };
        self.next = self.next.max(lo);
        self.last = self.last.min(hi);
        self
    }

    fn point(&self, step: i64) -> (i32, i32) {
        let x = self.x0 + axis_offset(self.dx, step, self.steps);
        let y = self.y0 + axis_offset(self.dy, step, self.steps);
        // Both lie between the endpoints
        (x as i32, y as i32)
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }
}

/// Offset along one axis after `step` of `steps`, rounded to the nearest pixel
fn axis_offset(delta: i64, step: i64, steps: i64) -> i64 {
    if steps == 0 {
        return 0;
    }
    let steps = i128::from(steps);
    let scaled = i128::from(delta.abs()) * i128::from(step) * 2 + steps;
    let magnitude = (scaled / (2 * steps)) as i64;
    if delta < 0 { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 8x3 and 10x2 glyphs for ' ' and '!'
    static NARROW: [u8; 6] = [0x00, 0x00, 0x00, 0x18, 0x24, 0x7E];
    static WIDE: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x80, 0x40, 0x00, 0xC0];

    fn colored_points(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.pixel(x, y) == Some(Color::Colored) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    fn blank(width: u32, height: u32, rotation: Rotation) -> Canvas {
        let mut canvas = Canvas::new(width, height, rotation);
        canvas.clear(Color::Uncolored);
        canvas
    }

    #[test]
    fn test_new_rounds_width_up() {
        let canvas = Canvas::new(13, 5, Rotation::Rotate0);
        assert_eq!(canvas.width(), 16);
        assert_eq!(canvas.height(), 5);
        assert_eq!(canvas.buffer().len(), 10);
    }

    #[test]
    fn test_from_bytes_copies_source() {
        let source = [0xA5u8; 4];
        let canvas = Canvas::from_bytes(16, 2, Rotation::Rotate0, &source).unwrap();
        assert_eq!(canvas.buffer(), &source);
    }

    #[test]
    fn test_from_bytes_insufficient_source() {
        let result = Canvas::from_bytes(16, 2, Rotation::Rotate0, &[0u8; 3]);
        assert_eq!(
            result,
            Err(CanvasError::InsufficientSource {
                required: 4,
                provided: 3
            })
        );
    }

    #[test]
    fn test_absolute_pixel_normal_polarity() {
        let mut canvas = blank(16, 1, Rotation::Rotate0);
        canvas.draw_absolute_pixel(9, 0, Color::Colored);
        assert_eq!(canvas.buffer(), &[0xFF, 0xBF]);
    }

    #[test]
    fn test_absolute_pixel_inverted_polarity() {
        let mut canvas = Canvas::new(16, 1, Rotation::Rotate0).with_polarity(Polarity::Inverted);
        canvas.clear(Color::Uncolored);
        canvas.draw_absolute_pixel(0, 0, Color::Colored);
        assert_eq!(canvas.buffer(), &[0x80, 0x00]);
        assert_eq!(canvas.pixel(0, 0), Some(Color::Colored));
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(16, 2, Rotation::Rotate0);
        canvas.clear(Color::Colored);
        assert!(canvas.buffer().iter().all(|byte| *byte == 0x00));
        canvas.clear(Color::Uncolored);
        assert!(canvas.buffer().iter().all(|byte| *byte == 0xFF));
    }

    #[test]
    fn test_filled_rectangle_read_back() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_filled_rectangle(4, 4, 11, 11, Color::Colored);

        assert_eq!(canvas.pixel(0, 0), Some(Color::Uncolored));
        assert_eq!(canvas.pixel(8, 8), Some(Color::Colored));
        assert_eq!(canvas.pixel(15, 15), Some(Color::Uncolored));
        for y in 0..16 {
            for x in 0..16 {
                let inside = (4..=11).contains(&x) && (4..=11).contains(&y);
                let expected = if inside { Color::Colored } else { Color::Uncolored };
                assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_filled_rectangle_corner_order() {
        let mut a = blank(16, 16, Rotation::Rotate0);
        let mut b = blank(16, 16, Rotation::Rotate0);
        a.draw_filled_rectangle(2, 3, 9, 12, Color::Colored);
        b.draw_filled_rectangle(9, 12, 2, 3, Color::Colored);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut canvas = blank(8, 8, Rotation::Rotate0);
        canvas.draw_rectangle(5, 5, 1, 1, Color::Colored);

        let points = colored_points(&canvas);
        assert_eq!(points.len(), 16);
        assert!(points.contains(&(1, 1)));
        assert!(points.contains(&(5, 5)));
        assert!(points.contains(&(1, 5)));
        assert!(!points.contains(&(3, 3)));
    }

    #[test]
    fn test_line_points_horizontal() {
        let points: Vec<_> = LinePoints::new(0, 0, 5, 0).collect();
        assert_eq!(points, [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_line_points_diagonal_and_reverse() {
        let points: Vec<_> = LinePoints::new(3, 3, 0, 0).collect();
        assert_eq!(points, [(3, 3), (2, 2), (1, 1), (0, 0)]);

        let points: Vec<_> = LinePoints::new(0, 0, 4, 2).collect();
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(4, 2)));
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn test_line_single_point() {
        let points: Vec<_> = LinePoints::new(2, 2, 2, 2).collect();
        assert_eq!(points, [(2, 2)]);
    }

    #[test]
    fn test_draw_line_plots_uniformly() {
        let mut canvas = blank(8, 2, Rotation::Rotate0);
        canvas.draw_line(0, 0, 5, 0, Color::Colored);
        assert_eq!(canvas.buffer(), &[0x03, 0xFF]);
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let mut canvas = blank(8, 8, Rotation::Rotate0);
        canvas.draw_horizontal_line(6, 0, 4, Color::Colored);
        canvas.draw_vertical_line(0, 6, 4, Color::Colored);
        assert_eq!(
            colored_points(&canvas),
            [(6, 0), (7, 0), (0, 6), (0, 7)]
        );
    }

    #[test]
    fn test_circle_radius_zero_is_center() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_circle(5, 6, 0, Color::Colored);
        assert_eq!(colored_points(&canvas), [(5, 6)]);

        let mut filled = blank(16, 16, Rotation::Rotate0);
        filled.draw_filled_circle(5, 6, 0, Color::Colored);
        assert_eq!(colored_points(&filled), [(5, 6)]);
    }

    #[test]
    fn test_circle_outline_is_symmetric() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_circle(8, 8, 3, Color::Colored);

        let points = colored_points(&canvas);
        for (x, y) in [(5, 8), (11, 8), (8, 5), (8, 11)] {
            assert!(points.contains(&(x, y)), "missing ({x}, {y})");
        }
        assert!(!points.contains(&(8, 8)));
        for (x, y) in points.iter() {
            assert!(points.contains(&(16 - x, *y)));
            assert!(points.contains(&(*x, 16 - y)));
        }
    }

    #[test]
    fn test_filled_circle_covers_center() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_filled_circle(8, 8, 3, Color::Colored);

        let points = colored_points(&canvas);
        assert!(points.contains(&(8, 8)));
        assert!(points.contains(&(6, 7)));
        assert!(!points.contains(&(4, 4)));
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut canvas = blank(8, 8, Rotation::Rotate0);
        canvas.draw_circle(4, 4, -2, Color::Colored);
        assert!(colored_points(&canvas).is_empty());
    }

    #[test]
    fn test_draw_pixel_rotate90() {
        // 16 wide, 8 high buffer; logical canvas is 8 wide, 16 high
        let mut canvas = blank(16, 8, Rotation::Rotate90);
        canvas.draw_pixel(2, 3, Color::Colored);
        assert_eq!(colored_points(&canvas), [(13, 2)]);

        // Logical x beyond the swapped bounds is ignored
        let before = canvas.clone();
        canvas.draw_pixel(8, 0, Color::Colored);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_draw_pixel_rotate180_uses_height() {
        let mut canvas = blank(16, 8, Rotation::Rotate180);
        canvas.draw_pixel(1, 1, Color::Colored);
        assert_eq!(colored_points(&canvas), [(15, 7)]);
    }

    #[test]
    fn test_draw_pixel_rotate270() {
        let mut canvas = blank(16, 8, Rotation::Rotate270);
        canvas.draw_pixel(2, 3, Color::Colored);
        assert_eq!(colored_points(&canvas), [(3, 6)]);
    }

    #[test]
    fn test_draw_char_at() {
        let font = Font::new(8, 3, &NARROW);
        let mut canvas = blank(16, 4, Rotation::Rotate0);
        canvas.draw_char_at(4, 1, '!', &font, Color::Colored);

        assert_eq!(
            colored_points(&canvas),
            [
                (7, 1),
                (8, 1),
                (6, 2),
                (9, 2),
                (5, 3),
                (6, 3),
                (7, 3),
                (8, 3),
                (9, 3),
                (10, 3)
            ]
        );
    }

    #[test]
    fn test_draw_char_at_width_not_byte_aligned() {
        let font = Font::new(10, 2, &WIDE);
        let mut canvas = blank(16, 2, Rotation::Rotate0);
        canvas.draw_char_at(0, 0, '!', &font, Color::Colored);

        assert_eq!(colored_points(&canvas), [(0, 0), (9, 0), (8, 1), (9, 1)]);
    }

    #[test]
    fn test_draw_char_without_glyph_is_noop() {
        let font = Font::new(8, 3, &NARROW);
        assert!(font.glyph('A').is_none());

        let mut canvas = blank(8, 4, Rotation::Rotate0);
        canvas.draw_char_at(0, 0, 'A', &font, Color::Colored);
        canvas.draw_char_at(0, 0, '\u{e9}', &font, Color::Colored);
        assert!(colored_points(&canvas).is_empty());
    }

    #[test]
    fn test_draw_string_at_advances_by_font_width() {
        let font = Font::new(8, 3, &NARROW);
        let mut canvas = blank(24, 3, Rotation::Rotate0);

        let count = canvas.draw_string_at(0, 0, "! !", &font, Color::Colored);

        assert_eq!(count, 3);
        assert_eq!(canvas.pixel(3, 0), Some(Color::Colored));
        assert_eq!(canvas.pixel(11, 0), Some(Color::Uncolored));
        assert_eq!(canvas.pixel(19, 0), Some(Color::Colored));
    }

    #[test]
    fn test_draw_string_clips_at_edge() {
        let font = Font::new(8, 3, &NARROW);
        let mut canvas = blank(8, 3, Rotation::Rotate0);
        let count = canvas.draw_string_at(0, 0, "!!", &font, Color::Colored);
        assert_eq!(count, 2);
        assert_eq!(colored_points(&canvas).len(), 10);
    }

    #[test]
    fn test_line_points_clip_to_canvas() {
        let points: Vec<_> = LinePoints::new(-3, 0, 20, 0).clip(8, 4).collect();
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(7, 0)));
        assert_eq!(points.len(), 8);

        let points: Vec<_> = LinePoints::new(20, 1, -3, 1).clip(8, 4).collect();
        assert_eq!(points.first(), Some(&(7, 1)));
        assert_eq!(points.last(), Some(&(0, 1)));

        assert_eq!(LinePoints::new(9, 0, 12, 0).clip(8, 4).count(), 0);
    }

    #[test]
    fn test_line_spanning_i32_range() {
        let mut canvas = blank(16, 4, Rotation::Rotate0);
        canvas.draw_line(i32::MIN, 0, i32::MAX, 0, Color::Colored);
        canvas.draw_line(i32::MAX, i32::MIN, i32::MIN, i32::MAX, Color::Colored);

        for x in 0..16 {
            assert_eq!(canvas.pixel(x, 0), Some(Color::Colored));
        }
    }

    #[test]
    fn test_rectangles_spanning_i32_range() {
        let mut outline = blank(16, 4, Rotation::Rotate0);
        outline.draw_rectangle(i32::MIN, 0, i32::MAX, 1, Color::Colored);
        let points = colored_points(&outline);
        assert_eq!(points.len(), 32);
        assert!(points.iter().all(|(_, y)| *y <= 1));

        let mut filled = blank(16, 4, Rotation::Rotate90);
        filled.draw_filled_rectangle(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::Colored);
        // Logical y = 0 maps one past the right edge, so buffer column 0 stays clear
        let points = colored_points(&filled);
        assert_eq!(points.len(), 15 * 4);
        assert!(points.iter().all(|(x, _)| *x >= 1));
    }

    #[test]
    fn test_lines_with_extreme_lengths() {
        let mut canvas = blank(8, 8, Rotation::Rotate0);
        canvas.draw_horizontal_line(i32::MIN, 2, i32::MAX, Color::Colored);
        canvas.draw_vertical_line(3, i32::MAX, i32::MAX, Color::Colored);
        assert!(colored_points(&canvas).is_empty());

        canvas.draw_horizontal_line(i32::MIN, 2, i32::MAX, Color::Colored);
        canvas.draw_horizontal_line(-4, 5, i32::MAX, Color::Colored);
        assert_eq!(colored_points(&canvas).len(), 8);
    }

    #[test]
    fn test_circle_larger_than_canvas() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_circle(4, 4, i32::MAX, Color::Colored);
        assert!(colored_points(&canvas).is_empty());

        canvas.draw_filled_circle(4, 4, i32::MAX, Color::Colored);
        assert_eq!(colored_points(&canvas).len(), 16 * 16);
    }

    #[test]
    fn test_circle_centered_far_away() {
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_circle(i32::MAX, 0, 2, Color::Colored);
        canvas.draw_filled_circle(i32::MIN, i32::MIN, i32::MAX, Color::Colored);
        canvas.draw_circle(0, i32::MIN, 3, Color::Colored);
        // Bounding box overlaps the canvas but the arc passes far outside it
        canvas.draw_circle(1_500_000_000, 1_500_000_000, 1_600_000_000, Color::Colored);
        canvas.draw_filled_circle(1_500_000_000, 1_500_000_000, 1_600_000_000, Color::Colored);
        assert!(colored_points(&canvas).is_empty());
    }

    #[test]
    fn test_circle_crossing_canvas_edge() {
        // Center off the left edge, arc passes through columns 0..=2
        let mut canvas = blank(16, 16, Rotation::Rotate0);
        canvas.draw_circle(-3, 8, 5, Color::Colored);

        let points = colored_points(&canvas);
        assert!(points.contains(&(2, 8)));
        assert!(points.iter().all(|(x, _)| *x <= 2));
    }

    #[test]
    fn test_new_with_max_width() {
        let canvas = Canvas::new(u32::MAX, 0, Rotation::Rotate0);
        assert_eq!(canvas.width(), u32::MAX - 7);
        assert!(canvas.buffer().is_empty());
    }

    fn any_rotation() -> impl Strategy<Value = Rotation> {
        prop_oneof![
            Just(Rotation::Rotate0),
            Just(Rotation::Rotate90),
            Just(Rotation::Rotate180),
            Just(Rotation::Rotate270),
        ]
    }

    proptest! {
        #[test]
        fn prop_width_is_byte_aligned(width in 0u32..512, height in 0u32..64) {
            let canvas = Canvas::new(width, height, Rotation::Rotate0);
            prop_assert_eq!(canvas.width() % 8, 0);
            prop_assert!(canvas.width() >= width);
            prop_assert!(canvas.width() < width + 8);
            prop_assert_eq!(canvas.buffer().len(), (canvas.width() / 8 * height) as usize);
        }

        #[test]
        fn prop_out_of_range_pixel_is_noop(
            x in -64i32..64,
            y in -64i32..64,
            rotation in any_rotation(),
            colored in any::<bool>(),
        ) {
            let (bound_x, bound_y) = if rotation.swaps_axes() { (8, 24) } else { (24, 8) };
            prop_assume!(x < 0 || x >= bound_x || y < 0 || y >= bound_y);

            let mut canvas = Canvas::new(24, 8, rotation);
            canvas.clear(Color::Uncolored);
            let before = canvas.clone();
            canvas.draw_pixel(x, y, Color::from(colored));
            prop_assert_eq!(canvas, before);
        }

        #[test]
        fn prop_absolute_pixel_is_idempotent(
            x in -4i32..28,
            y in -4i32..12,
            colored in any::<bool>(),
            seed in any::<u8>(),
        ) {
            let mut canvas = Canvas::from_bytes(24, 8, Rotation::Rotate0, &[seed; 24]).unwrap();
            canvas.draw_absolute_pixel(x, y, Color::from(colored));
            let once = canvas.clone();
            canvas.draw_absolute_pixel(x, y, Color::from(colored));
            prop_assert_eq!(canvas, once);
        }

        #[test]
        fn prop_drawing_never_resizes_buffer(
            x0 in -40i32..40,
            y0 in -40i32..40,
            x1 in -40i32..40,
            y1 in -40i32..40,
            rotation in any_rotation(),
        ) {
            let mut canvas = Canvas::new(20, 12, rotation);
            canvas.draw_line(x0, y0, x1, y1, Color::Colored);
            canvas.draw_rectangle(x0, y0, x1, y1, Color::Colored);
            canvas.draw_circle(x0, y0, (x1 - x0).abs() % 16, Color::Colored);
            prop_assert_eq!(canvas.buffer().len(), 3 * 12);
        }

        #[test]
        fn prop_any_coordinates_never_panic(
            x0 in any::<i32>(),
            y0 in any::<i32>(),
            x1 in any::<i32>(),
            y1 in any::<i32>(),
            radius in any::<i32>(),
            rotation in any_rotation(),
        ) {
            let mut canvas = Canvas::new(24, 8, rotation);
            canvas.draw_pixel(x0, y0, Color::Colored);
            canvas.draw_line(x0, y0, x1, y1, Color::Colored);
            canvas.draw_horizontal_line(x0, y0, x1, Color::Colored);
            canvas.draw_vertical_line(x0, y0, y1, Color::Colored);
            canvas.draw_rectangle(x0, y0, x1, y1, Color::Colored);
            canvas.draw_filled_rectangle(x0, y0, x1, y1, Color::Uncolored);
            canvas.draw_circle(x0, y0, radius, Color::Colored);
            canvas.draw_filled_circle(x1, y1, radius, Color::Uncolored);
            prop_assert_eq!(canvas.buffer().len(), 3 * 8);
        }
    }
}
