//! Seams between a panel driver and the host display subsystem

use crate::lb035q02::{error::DisplayError, error::PanelError, timings::Timings};

/// What a panel tells the host display engine at probe time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Signal flags, see [`Flag`](crate::lb035q02::Flag)
    pub flags: u32,
    /// Pixel timings the engine must generate
    pub timings: Timings,
}

impl PanelConfig {
    /// Whether every bit of `flag` is set
    pub const fn has(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }
}

/// The host display engine feeding the panel's pixel bus
pub trait DisplayEngine {
    /// Start the pixel clock and timing generator
    fn enable(&mut self) -> Result<(), DisplayError>;

    /// Stop pixel output
    fn disable(&mut self);
}

impl<E: DisplayEngine + ?Sized> DisplayEngine for &mut E {
    fn enable(&mut self) -> Result<(), DisplayError> {
        E::enable(self)
    }

    fn disable(&mut self) {
        E::disable(self)
    }
}

/// Operations the host display subsystem drives on any panel
pub trait Panel {
    /// Name used to match the panel against board descriptions
    fn name(&self) -> &'static str;

    /// Publish signal flags and timings
    fn probe(&mut self) -> PanelConfig;

    /// Power up and configure the panel
    ///
    /// If a register write fails, the engine and power line are left on and
    /// the state does not change. Calling `enable` again re-enables the
    /// engine without disabling it first, then re-runs the whole program.
    fn enable(&mut self) -> Result<(), PanelError>;

    /// Power down. Only fails for an invalid transition, I/O errors are logged.
    fn disable(&mut self) -> Result<(), PanelError>;

    /// Power down, remembering that a resume is expected
    fn suspend(&mut self) -> Result<(), PanelError>;

    /// Power up again after a suspend
    ///
    /// On failure the panel stays suspended, with the same partial-program
    /// caveat as [`Panel::enable`].
    fn resume(&mut self) -> Result<(), PanelError>;
}
