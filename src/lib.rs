//! IL3829 E-Paper Display Driver
//!
//! A driver for 200x200 monochrome e-paper panels built on the IL3829
//! controller, plus a 1-bit framebuffer with drawing primitives to render
//! into.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc` for [`Canvas`])
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full and partial update LUTs
//! - Windowed frame memory writes
//! - Rotation and bit polarity per canvas
//! - Bounded busy waits
//! - Exclusive panel sessions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use il3829::{Builder, Canvas, Color, Display, Interface, Lut, Panel, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! static PANEL: Panel = Panel::new();
//!
//! let claim = match PANEL.claim() {
//!     Ok(claim) => claim,
//!     Err(_) => return,
//! };
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = Builder::new().busy_timeout_ms(10_000).build();
//!
//! let mut display = Display::new(interface, config, claim);
//! let _ = display.init(Lut::FullUpdate, &mut delay);
//!
//! let mut canvas = Canvas::new(200, 200, Rotation::Rotate0);
//! canvas.clear(Color::Uncolored);
//! canvas.draw_circle(100, 100, 40, Color::Colored);
//!
//! let _ = display.set_frame_from_canvas(&canvas, 0, 0, &mut delay);
//! let _ = display.display_frame(&mut delay);
//! let _ = display.sleep(&mut delay);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

/// Framebuffer and drawing primitives
pub mod canvas;
/// Pixel colors and bit polarity
pub mod color;
/// IL3829 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font contract
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Look-Up Tables for refresh modes
pub mod lut;
/// Coordinate rotation utilities
pub mod rotation;
/// Panel ownership and session state
pub mod session;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use canvas::Canvas;
pub use color::{Color, Polarity};
pub use config::{
    Builder, Config, DEFAULT_BUSY_POLL_INTERVAL_MS, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_PANEL_SIZE,
    Dimensions, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, Rotation,
};
pub use display::Display;
pub use error::{BuilderError, CanvasError, Error};
pub use font::Font;
pub use interface::{DEFAULT_RESET_DELAY_MS, DisplayInterface, Interface, InterfaceError};
pub use lut::Lut;
pub use session::{Panel, PanelClaim, SessionBusy, SessionState};
