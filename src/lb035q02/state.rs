//! Panel lifecycle states and the transition table

use crate::lb035q02::error::PanelError;

/// Observable state of a panel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Unpowered, the initial state
    #[default]
    Disabled,
    /// Powered, configured and streaming pixels
    Active,
    /// Powered down by a suspend, resumable
    Suspended,
}

/// Transition requested by the host display subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Power up and start streaming
    Enable,
    /// Power down for good
    Disable,
    /// Power down until a resume
    Suspend,
    /// Power up again after a suspend
    Resume,
}

impl PanelState {
    /// State reached by applying `event`, or `InvalidTransition`.
    ///
    /// ```text
    /// Disabled  --enable-->  Active
    /// Active    --enable-->  Active     (no-op)
    /// Active    --disable--> Disabled
    /// Active    --suspend--> Suspended
    /// Suspended --resume-->  Active
    /// Suspended --disable--> Disabled
    /// ```
    pub fn on(self, event: PanelEvent) -> Result<PanelState, PanelError> {
        use PanelEvent::*;
        use PanelState::*;

        match (self, event) {
            (Disabled, Enable) | (Active, Enable) | (Suspended, Resume) => Ok(Active),
            (Active, Disable) | (Suspended, Disable) => Ok(Disabled),
            (Active, Suspend) => Ok(Suspended),
            (state, event) => Err(PanelError::InvalidTransition { state, event }),
        }
    }
}
