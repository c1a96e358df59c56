//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Default panel width and height in pixels
pub const DEFAULT_PANEL_SIZE: u16 = 200;

/// Default spacing between busy-line polls in milliseconds
pub const DEFAULT_BUSY_POLL_INTERVAL_MS: u32 = 100;

/// Default bound on a busy wait in milliseconds
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to gate outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to source outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows or cols is zero or not a multiple of 8
    /// - rows > MAX_GATE_OUTPUTS
    /// - cols > MAX_SOURCE_OUTPUTS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_GATE_OUTPUTS || rows % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SOURCE_OUTPUTS || cols % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Calculate required buffer size in bytes for a full frame
    pub fn buffer_size(&self) -> usize {
        (self.cols as usize / 8) * self.rows as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_PANEL_SIZE,
            cols: DEFAULT_PANEL_SIZE,
        }
    }
}

/// Canvas rotation relative to the panel's native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Whether logical axes are swapped relative to the buffer
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Display configuration
///
/// Holds the controller parameters written during initialization and the
/// busy-wait timing. Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Booster soft-start settings (3 bytes for command 0x0C)
    pub booster_soft_start: [u8; 3],
    /// Gate scanning byte (third byte of driver output control)
    pub gate_scanning: u8,
    /// VCOM register value
    pub vcom: u8,
    /// Dummy line period
    pub dummy_line_period: u8,
    /// Gate line width, only sent when set
    pub gate_line_width: Option<u8>,
    /// Data entry mode byte
    pub data_entry_mode: u8,
    /// Display Update Control 2 activation mask
    pub display_update_ctrl2: u8,
    /// Spacing between busy-line polls in milliseconds
    pub busy_poll_interval_ms: u32,
    /// Upper bound on a busy wait in milliseconds (0 waits forever)
    pub busy_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use il3829::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(200, 200) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = Builder::new().dimensions(dims).busy_timeout_ms(5_000).build();
/// assert_eq!(config.busy_poll_interval_ms, 100);
/// ```
#[must_use]
pub struct Builder {
    dimensions: Dimensions,
    booster_soft_start: [u8; 3],
    gate_scanning: u8,
    vcom: u8,
    dummy_line_period: u8,
    gate_line_width: Option<u8>,
    data_entry_mode: u8,
    display_update_ctrl2: u8,
    busy_poll_interval_ms: u32,
    busy_timeout_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            booster_soft_start: [0xD7, 0xD6, 0x9D],
            gate_scanning: 0x00,
            vcom: 0xA8,
            dummy_line_period: 0x08,
            gate_line_width: None,
            // X increment, Y increment
            data_entry_mode: 0x03,
            // Enable clock+analog, pattern display, disable analog+clock
            display_update_ctrl2: 0xC4,
            busy_poll_interval_ms: DEFAULT_BUSY_POLL_INTERVAL_MS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values for a 200x200 panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set gate scanning byte
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set dummy line period
    pub fn dummy_line_period(mut self, value: u8) -> Self {
        self.dummy_line_period = value;
        self
    }

    /// Set gate line width
    ///
    /// Some panel revisions need this after the dummy line period.
    pub fn gate_line_width(mut self, value: u8) -> Self {
        self.gate_line_width = Some(value);
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set Display Update Control 2 activation mask
    pub fn display_update_ctrl2(mut self, value: u8) -> Self {
        self.display_update_ctrl2 = value;
        self
    }

    /// Set spacing between busy-line polls
    pub fn busy_poll_interval_ms(mut self, value: u32) -> Self {
        self.busy_poll_interval_ms = value;
        self
    }

    /// Set the busy-wait bound. Set to 0 to wait indefinitely.
    pub fn busy_timeout_ms(mut self, value: u32) -> Self {
        self.busy_timeout_ms = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            dimensions: self.dimensions,
            booster_soft_start: self.booster_soft_start,
            gate_scanning: self.gate_scanning,
            vcom: self.vcom,
            dummy_line_period: self.dummy_line_period,
            gate_line_width: self.gate_line_width,
            data_entry_mode: self.data_entry_mode,
            display_update_ctrl2: self.display_update_ctrl2,
            busy_poll_interval_ms: self.busy_poll_interval_ms,
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}
