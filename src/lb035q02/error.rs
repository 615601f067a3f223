//! Driver error type
//!
//! Bus and pin failures are reduced to their `embedded-hal` error kinds so the
//! error does not carry the HAL's types around.

pub use display_interface::DisplayError;

use embedded_hal::{digital, spi};

use crate::lb035q02::state::{PanelEvent, PanelState};

/// Everything that can go wrong while driving the panel
#[derive(Debug, Clone, thiserror::Error)]
pub enum PanelError {
    /// The SPI transfer of a register write failed. Not retried.
    #[error("SPI transfer failed: {0:?}")]
    Bus(spi::ErrorKind),
    /// No bus endpoint is attached to the panel
    #[error("panel has no bus endpoint bound")]
    NotBound,
    /// A bus endpoint is attached already
    #[error("panel already has a bus endpoint bound")]
    AlreadyBound,
    /// The requested transition is not valid from the current state
    #[error("cannot {event:?} a panel that is {state:?}")]
    InvalidTransition {
        /// State the panel was in, left unchanged
        state: PanelState,
        /// Rejected request
        event: PanelEvent,
    },
    /// The host display engine refused to enable the pixel output
    #[error("display engine failed to enable: {0:?}")]
    Engine(DisplayError),
    /// Driving the power-enable line failed
    #[error("power-enable line failed: {0:?}")]
    PowerLine(digital::ErrorKind),
}

// `DisplayError` has no equality, engine failures compare by variant
impl PartialEq for PanelError {
    fn eq(&self, other: &Self) -> bool {
        use PanelError::*;

        match (self, other) {
            (Bus(a), Bus(b)) => a == b,
            (NotBound, NotBound) | (AlreadyBound, AlreadyBound) => true,
            (
                InvalidTransition { state, event },
                InvalidTransition {
                    state: other_state,
                    event: other_event,
                },
            ) => state == other_state && event == other_event,
            (Engine(a), Engine(b)) => core::mem::discriminant(a) == core::mem::discriminant(b),
            (PowerLine(a), PowerLine(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PanelError {}

impl PanelError {
    pub(crate) fn bus(err: impl spi::Error) -> Self {
        PanelError::Bus(err.kind())
    }

    pub(crate) fn power_line(err: impl digital::Error) -> Self {
        PanelError::PowerLine(err.kind())
    }
}
