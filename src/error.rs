//! Error types for the driver
//!
//! ## Error Types
//!
//! - [`Error`] - Runtime errors during protocol operations
//! - [`BuilderError`] - Invalid panel dimensions
//! - [`CanvasError`] - Canvas construction failures
//! - [`SessionBusy`] - A panel already has an open session
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use il3829::{BuilderError, Dimensions};
//!
//! let result = Dimensions::new(200, 196); // Not byte aligned
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//! ```

use crate::interface::DisplayInterface;
use crate::session::SessionState;

/// Maximum gate outputs (rows) supported by the IL3829 controller
pub const MAX_GATE_OUTPUTS: u16 = 296;

/// Maximum source outputs (columns) supported by the IL3829 controller
pub const MAX_SOURCE_OUTPUTS: u16 = 200;

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific transport error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Transport failure
    ///
    /// The in-flight operation stopped at the failing byte; nothing further
    /// was sent.
    Transport(I::Error),
    /// The busy line did not clear within the configured bound
    Timeout,
    /// The session is not active
    ///
    /// Only [`Display::init`](crate::Display::init) is accepted outside the
    /// active state.
    NotActive {
        /// Current session state
        state: SessionState,
    },
    /// Frame buffer is too small for the addressed window
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport unavailable: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for display"),
            Self::NotActive { state } => write!(f, "Session not active: {state:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when validating configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_GATE_OUTPUTS}x{MAX_SOURCE_OUTPUTS}, both must be multiples of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when constructing a [`Canvas`](crate::Canvas)
#[derive(Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// Seed bytes do not cover the declared canvas area
    InsufficientSource {
        /// Bytes needed to cover `width * height` pixels
        required: usize,
        /// Bytes supplied
        provided: usize,
    },
}

impl core::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsufficientSource { required, provided } => write!(
                f,
                "Insufficient source: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for CanvasError {}

/// A session is already open on this panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBusy;

impl core::fmt::Display for SessionBusy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Panel already has an open session")
    }
}

impl core::error::Error for SessionBusy {}
