//! IL3829 command definitions
//!
//! Command bytes are sent with the DC line low, their parameters follow one
//! byte at a time with the DC line high.
//!
//! ## Example
//!
//! ```rust,no_run
//! use il3829::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Set VCOM
//! let _ = interface.send_command(command::WRITE_VCOM_REGISTER);
//! let _ = interface.send_data(0xA8);
//! ```

// System control commands

/// Driver output control command (0x01)
///
/// Sets the number of gate lines and the scanning order.
/// Requires 3 bytes: [rows-1 (LSB), rows-1 (MSB), scanning mode]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Booster soft-start control command (0x0C)
///
/// Requires 3 bytes of phase settings.
pub const BOOSTER_SOFT_START_CONTROL: u8 = 0x0C;

/// Gate scan start position command (0x0F)
pub const GATE_SCAN_START_POSITION: u8 = 0x0F;

/// Deep sleep mode command (0x10)
///
/// Only a hardware reset wakes the controller afterwards.
pub const DEEP_SLEEP_MODE: u8 = 0x10;

/// Data entry mode setting command (0x11)
///
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE_SETTING: u8 = 0x11;

/// Software reset command (0x12)
pub const SW_RESET: u8 = 0x12;

/// Temperature sensor control command (0x1A)
pub const TEMPERATURE_SENSOR_CONTROL: u8 = 0x1A;

// Display update commands

/// Master activation command (0x20)
///
/// Starts the update sequence selected by [`DISPLAY_UPDATE_CONTROL_2`].
/// BUSY goes high until the panel has finished.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 1 command (0x21)
pub const DISPLAY_UPDATE_CONTROL_1: u8 = 0x21;

/// Display update control 2 command (0x22)
///
/// Requires 1 byte selecting the stages of the update sequence
/// (clock, analog, LUT load, pattern display).
pub const DISPLAY_UPDATE_CONTROL_2: u8 = 0x22;

// RAM and waveform commands

/// Write RAM command (0x24)
///
/// Subsequent data bytes are written at the RAM address counter, which then
/// advances according to the data entry mode.
pub const WRITE_RAM: u8 = 0x24;

/// Write VCOM register command (0x2C)
///
/// Requires 1 byte.
pub const WRITE_VCOM_REGISTER: u8 = 0x2C;

/// Write LUT register command (0x32)
///
/// Requires the 30-byte waveform table.
pub const WRITE_LUT_REGISTER: u8 = 0x32;

/// Set dummy line period command (0x3A)
pub const SET_DUMMY_LINE_PERIOD: u8 = 0x3A;

/// Set gate line width command (0x3B)
pub const SET_GATE_TIME: u8 = 0x3B;

/// Border waveform control command (0x3C)
pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;

/// Set RAM X address start/end command (0x44)
///
/// Requires 2 bytes in 8-pixel units: [start, end]
pub const SET_RAM_X_ADDRESS_START_END_POSITION: u8 = 0x44;

/// Set RAM Y address start/end command (0x45)
///
/// Requires 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const SET_RAM_Y_ADDRESS_START_END_POSITION: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// Requires 1 byte in 8-pixel units.
pub const SET_RAM_X_ADDRESS_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Requires 2 bytes: [address_LSB, address_MSB]
pub const SET_RAM_Y_ADDRESS_COUNTER: u8 = 0x4F;

/// Terminate frame read/write command (0xFF)
///
/// NOP that closes the current RAM access.
pub const TERMINATE_FRAME_READ_WRITE: u8 = 0xFF;
