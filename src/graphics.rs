//! Graphics support via embedded-graphics
//!
//! [`Canvas`] implements [`DrawTarget`] so any embedded-graphics primitive,
//! font or image can be rendered into the framebuffer. Pixels go through
//! [`Canvas::draw_pixel`], so the canvas rotation applies and anything off
//! the canvas is dropped.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use il3829::{Canvas, Color, Rotation};
//!
//! let mut canvas = Canvas::new(200, 200, Rotation::Rotate90);
//! canvas.clear(Color::Uncolored);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::Colored))
//!     .draw(&mut canvas);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Colored, 2))
//!     .draw(&mut canvas);
//!
//! let _ = Text::new(
//!     "Hello, E-Paper!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::Colored),
//! )
//! .draw(&mut canvas);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::canvas::Canvas;
use crate::color::Color;

impl DrawTarget for Canvas {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.draw_pixel(x, y, color);
        }

        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        if self.rotation().swaps_axes() {
            Size::new(self.height(), self.width())
        } else {
            Size::new(self.width(), self.height())
        }
    }
}
