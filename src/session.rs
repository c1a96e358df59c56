//! Panel ownership and session state
//!
//! A [`Panel`] stands for one physical display. Claiming it yields a
//! [`PanelClaim`] that a [`Display`](crate::Display) holds for its whole
//! lifetime, so a second session on the same panel is refused with
//! [`SessionBusy`] until the first one is dropped or released.
//!
//! ```
//! use il3829::{Panel, SessionBusy};
//!
//! static PANEL: Panel = Panel::new();
//!
//! let claim = PANEL.claim();
//! assert!(claim.is_ok());
//! assert_eq!(PANEL.claim().err(), Some(SessionBusy));
//!
//! drop(claim);
//! assert!(PANEL.claim().is_ok());
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

pub use crate::error::SessionBusy;

/// Lifecycle state of a display session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Created, controller not yet initialized
    #[default]
    Uninitialized,
    /// Initialized and accepting frame operations
    Active,
    /// In deep sleep; a new initialization is required
    Asleep,
}

/// Claim cell for one physical panel
#[derive(Debug, Default)]
pub struct Panel {
    claimed: AtomicBool,
}

impl Panel {
    /// Create an unclaimed panel
    pub const fn new() -> Self {
        Self {
            claimed: AtomicBool::new(false),
        }
    }

    /// Claim exclusive use of the panel
    ///
    /// # Errors
    ///
    /// Returns [`SessionBusy`] if a claim is outstanding.
    pub fn claim(&self) -> Result<PanelClaim<'_>, SessionBusy> {
        self.claimed
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| PanelClaim { panel: self })
            .map_err(|_| SessionBusy)
    }

    /// Whether a claim is outstanding
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Relaxed)
    }
}

/// Exclusive ownership token for a [`Panel`]
///
/// Dropping the claim releases the panel.
#[derive(Debug)]
pub struct PanelClaim<'a> {
    panel: &'a Panel,
}

impl Drop for PanelClaim<'_> {
    fn drop(&mut self) {
        self.panel.claimed.store(false, Ordering::Release);
    }
}
