//! Core display operations
//!
//! [`Display`] sequences the controller protocol: hardware initialization,
//! RAM window addressing, frame transmission, update activation and deep
//! sleep. Every byte goes through the [`DisplayInterface`] individually.

use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::command::{
    BOOSTER_SOFT_START_CONTROL, DATA_ENTRY_MODE_SETTING, DEEP_SLEEP_MODE,
    DISPLAY_UPDATE_CONTROL_2, DRIVER_OUTPUT_CONTROL, MASTER_ACTIVATION, SET_DUMMY_LINE_PERIOD,
    SET_GATE_TIME, SET_RAM_X_ADDRESS_COUNTER, SET_RAM_X_ADDRESS_START_END_POSITION,
    SET_RAM_Y_ADDRESS_COUNTER, SET_RAM_Y_ADDRESS_START_END_POSITION, TERMINATE_FRAME_READ_WRITE,
    WRITE_LUT_REGISTER, WRITE_RAM, WRITE_VCOM_REGISTER,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::lut::Lut;
use crate::session::{PanelClaim, SessionState};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// RAM window in panel pixels, inclusive on both ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Window {
    x_start: i32,
    y_start: i32,
    x_end: i32,
    y_end: i32,
}

/// Protocol controller for an IL3829 panel
///
/// Holds the panel's [`PanelClaim`] for as long as it lives.
///
/// ## Example
///
/// ```rust,no_run
/// use il3829::{Builder, Display, Interface, Lut, Panel};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// static PANEL: Panel = Panel::new();
///
/// let claim = match PANEL.claim() {
///     Ok(claim) => claim,
///     Err(_) => return,
/// };
/// let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
/// let mut display = Display::new(interface, Builder::new().build(), claim);
///
/// let _ = display.init(Lut::FullUpdate, &mut delay);
/// let _ = display.clear_frame_memory(0xFF, &mut delay);
/// let _ = display.display_frame(&mut delay);
/// let _ = display.sleep(&mut delay);
/// ```
pub struct Display<'p, I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Session lifecycle state
    state: SessionState,
    /// Exclusive ownership of the panel
    claim: PanelClaim<'p>,
}

impl<'p, I> Display<'p, I>
where
    I: DisplayInterface,
{
    /// Create a new, uninitialized session
    pub fn new(interface: I, config: Config, claim: PanelClaim<'p>) -> Self {
        Self {
            interface,
            config,
            state: SessionState::Uninitialized,
            claim,
        }
    }

    /// Reset the controller and program it with `lut`
    ///
    /// Accepted in any state; a hardware reset also wakes the controller
    /// from deep sleep. The session stays `Uninitialized` until the whole
    /// sequence has been sent.
    pub fn init<D: DelayNs>(&mut self, lut: Lut, delay: &mut D) -> DisplayResult<I> {
        log::debug!("initializing panel with {:?} waveform", lut);
        self.state = SessionState::Uninitialized;
        self.interface.reset(delay).map_err(Error::Transport)?;

        let last_row = self.config.dimensions.rows.saturating_sub(1);
        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&[
            (last_row & 0xFF) as u8,
            (last_row >> 8) as u8,
            self.config.gate_scanning,
        ])?;

        self.send_command(BOOSTER_SOFT_START_CONTROL)?;
        let booster = self.config.booster_soft_start;
        self.send_data(&booster)?;

        self.send_command(WRITE_VCOM_REGISTER)?;
        self.send_data(&[self.config.vcom])?;

        self.send_command(SET_DUMMY_LINE_PERIOD)?;
        self.send_data(&[self.config.dummy_line_period])?;

        if let Some(width) = self.config.gate_line_width {
            self.send_command(SET_GATE_TIME)?;
            self.send_data(&[width])?;
        }

        self.send_command(DATA_ENTRY_MODE_SETTING)?;
        self.send_data(&[self.config.data_entry_mode])?;

        self.send_command(WRITE_LUT_REGISTER)?;
        self.send_data(lut.bytes())?;

        self.state = SessionState::Active;
        Ok(())
    }

    /// Write an image into controller RAM at (`x`, `y`)
    ///
    /// `x` and `image_width` are truncated to multiples of 8. The window is
    /// clipped to the panel; each row sends only the bytes that fit while the
    /// source still advances by `image_width / 8` bytes, so a sub-window of a
    /// wider image can be transmitted.
    ///
    /// Negative coordinates, an empty window or an origin outside the panel
    /// transmit nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` before sending anything if `buffer`
    /// does not cover the clipped window.
    pub fn set_frame_memory<D: DelayNs>(
        &mut self,
        buffer: &[u8],
        x: i32,
        y: i32,
        image_width: i32,
        image_height: i32,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.ensure_active()?;

        let Some(window) = self.frame_window(x, y, image_width, image_height) else {
            log::debug!(
                "skipping frame write: x={}, y={}, w={}, h={}",
                x,
                y,
                image_width,
                image_height
            );
            return Ok(());
        };

        let row_bytes = ((window.x_end - window.x_start) / 8 + 1) as usize;
        let stride = ((image_width & !0x7) / 8) as usize;
        let rows = (window.y_end - window.y_start + 1) as usize;
        let required = (rows - 1)
            .checked_mul(stride)
            .and_then(|bytes| bytes.checked_add(row_bytes))
            .unwrap_or(usize::MAX);
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.len(),
            });
        }

        self.set_memory_area(window)?;
        self.set_memory_pointer(window.x_start, window.y_start, delay)?;

        self.send_command(WRITE_RAM)?;
        for row in buffer.chunks(stride).take(rows) {
            for byte in row.iter().take(row_bytes) {
                self.interface.send_data(*byte).map_err(Error::Transport)?;
            }
        }

        Ok(())
    }

    /// Write a canvas into controller RAM at (`x`, `y`)
    pub fn set_frame_from_canvas<D: DelayNs>(
        &mut self,
        canvas: &Canvas,
        x: i32,
        y: i32,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
        self.set_frame_memory(canvas.buffer(), x, y, width, height, delay)
    }

    /// Fill the whole of controller RAM with `color`
    pub fn clear_frame_memory<D: DelayNs>(&mut self, color: u8, delay: &mut D) -> DisplayResult<I> {
        self.ensure_active()?;

        let dims = self.config.dimensions;
        self.set_memory_area(Window {
            x_start: 0,
            y_start: 0,
            x_end: i32::from(dims.cols) - 1,
            y_end: i32::from(dims.rows) - 1,
        })?;
        self.set_memory_pointer(0, 0, delay)?;

        self.send_command(WRITE_RAM)?;
        for _ in 0..dims.buffer_size() {
            self.interface.send_data(color).map_err(Error::Transport)?;
        }

        Ok(())
    }

    /// Show the contents of controller RAM on the panel
    pub fn display_frame<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_active()?;

        self.send_command(DISPLAY_UPDATE_CONTROL_2)?;
        self.send_data(&[self.config.display_update_ctrl2])?;
        self.send_command(MASTER_ACTIVATION)?;
        self.send_command(TERMINATE_FRAME_READ_WRITE)?;

        self.wait_until_idle(delay)
    }

    /// Enter deep sleep
    ///
    /// Call [`init`](Self::init) to use the panel again.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_active()?;

        self.send_command(DEEP_SLEEP_MODE)?;
        self.state = SessionState::Asleep;
        log::debug!("panel entering deep sleep");

        self.wait_until_idle(delay)
    }

    /// Poll the busy line until the controller is idle
    ///
    /// Polls every `busy_poll_interval_ms`. Gives up after `busy_timeout_ms`
    /// unless the timeout is 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::Timeout` if the busy line stays asserted too long.
    pub fn wait_until_idle<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let interval = self.config.busy_poll_interval_ms;
        let timeout = self.config.busy_timeout_ms;
        let mut waited: u32 = 0;

        loop {
            if !self.interface.is_busy().map_err(Error::Transport)? {
                return Ok(());
            }
            if timeout > 0 && waited >= timeout {
                log::warn!("busy line still asserted after {} ms", waited);
                return Err(Error::Timeout);
            }
            delay.delay_ms(interval);
            waited = waited.saturating_add(interval.max(1));
        }
    }

    /// Set the busy-wait bound in milliseconds. 0 waits indefinitely.
    pub fn set_busy_timeout(&mut self, timeout_ms: u32) -> &mut Self {
        self.config.busy_timeout_ms = timeout_ms;
        self
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// End the session, returning the interface and releasing the panel
    pub fn release(self) -> I {
        drop(self.claim);
        self.interface
    }

    /// Clip a requested frame to the panel
    fn frame_window(&self, x: i32, y: i32, image_width: i32, image_height: i32) -> Option<Window> {
        if x < 0 || y < 0 || image_width < 0 || image_height < 0 {
            return None;
        }

        // RAM X addressing works in 8-pixel units
        let x = x & !0x7;
        let image_width = image_width & !0x7;

        let cols = i32::from(self.config.dimensions.cols);
        let rows = i32::from(self.config.dimensions.rows);
        if image_width == 0 || image_height == 0 || x >= cols || y >= rows {
            return None;
        }

        let x_end = if x.saturating_add(image_width) >= cols {
            cols - 1
        } else {
            x + image_width - 1
        };
        let y_end = if y.saturating_add(image_height) >= rows {
            rows - 1
        } else {
            y + image_height - 1
        };

        log::trace!("frame window x={}..={}, y={}..={}", x, x_end, y, y_end);
        Some(Window {
            x_start: x,
            y_start: y,
            x_end,
            y_end,
        })
    }

    /// Program the RAM window
    fn set_memory_area(&mut self, window: Window) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_ADDRESS_START_END_POSITION)?;
        self.send_data(&[
            ((window.x_start >> 3) & 0xFF) as u8,
            ((window.x_end >> 3) & 0xFF) as u8,
        ])?;

        self.send_command(SET_RAM_Y_ADDRESS_START_END_POSITION)?;
        self.send_data(&[
            (window.y_start & 0xFF) as u8,
            ((window.y_start >> 8) & 0xFF) as u8,
            (window.y_end & 0xFF) as u8,
            ((window.y_end >> 8) & 0xFF) as u8,
        ])
    }

    /// Move the RAM address counter
    fn set_memory_pointer<D: DelayNs>(&mut self, x: i32, y: i32, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_ADDRESS_COUNTER)?;
        self.send_data(&[((x >> 3) & 0xFF) as u8])?;

        self.send_command(SET_RAM_Y_ADDRESS_COUNTER)?;
        self.send_data(&[(y & 0xFF) as u8, ((y >> 8) & 0xFF) as u8])?;

        self.wait_until_idle(delay)
    }

    fn ensure_active(&self) -> DisplayResult<I> {
        match self.state {
            SessionState::Active => Ok(()),
            state => Err(Error::NotActive { state }),
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Transport)
    }

    /// Send data bytes to the display controller, one transfer per byte
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        for byte in data {
            self.interface.send_data(*byte).map_err(Error::Transport)?;
        }
        Ok(())
    }
}
