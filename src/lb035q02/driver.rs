//! LB035Q02 Panel Driver Implementation
//!
//! This module contains the power sequencing and the lifecycle state machine
//! for the LB035Q02 panel.
//!
//! ## Architecture
//!
//! ### Lifecycle (host facing, via [`Panel`])
//! - `enable()` / `resume()` - power the panel and program its registers
//! - `disable()` / `suspend()` - power the panel down
//!
//! ### Power Sequencing (internal)
//! - `power_on()` - engine enable, power line, register program
//! - `power_off()` - power line, engine disable
//!
//! ### Bus Attachment
//! - `bind()` / `unbind()` - attach the SPI endpoint found by bus enumeration
//!
//! ## Critical Implementation Details
//!
//! ### Power-on order
//!
//! The display engine must be feeding the pixel bus before the register
//! program runs. If the power line cannot be asserted, the engine is disabled
//! again before the error is returned.
//!
//! ### Partial programs
//!
//! A failed register write stops the program. Writes already sent are not
//! undone and the panel stays powered, so its configuration is undefined
//! until the next successful `enable()` / `resume()`.
//!
//! ### Tear-down never fails
//!
//! `disable()` and `suspend()` log I/O failures and keep them in
//! [`Lb035q02::last_teardown_fault`] instead of returning them.

use embedded_hal::digital::OutputPin;

use crate::lb035q02::{
    cmd::{encode_write, RegisterWrite},
    error::PanelError,
    flag::Flag,
    interface::{BusBinding, FrameTransport},
    panel::{DisplayEngine, Panel, PanelConfig},
    power::{NoPin, PowerEnable},
    program::INIT_PROGRAM,
    state::{PanelEvent, PanelState},
    timings::{Timings, LB035Q02_TIMINGS},
    DRIVER_NAME,
};

/// LB035Q02 Panel Driver
///
/// ## Type Parameters
///
/// - `BUS` - serial configuration endpoint, see [`FrameTransport`]
/// - `PWR` - power-enable GPIO, [`NoPin`] when the board has none
/// - `ENG` - host display engine driving the pixel bus
pub struct Lb035q02<BUS, PWR, ENG> {
    bus: BusBinding<BUS>,
    power: Option<PowerEnable<PWR>>,
    engine: ENG,
    program: &'static [RegisterWrite],
    state: PanelState,
    teardown_fault: Option<PanelError>,
}

impl<BUS, PWR, ENG> Lb035q02<BUS, PWR, ENG> {
    /// Create a disabled, unbound panel
    pub fn new(engine: ENG, power: Option<PowerEnable<PWR>>) -> Self {
        Lb035q02 {
            bus: BusBinding::new(),
            power,
            engine,
            program: &INIT_PROGRAM,
            state: PanelState::Disabled,
            teardown_fault: None,
        }
    }

    /// Replace the register program sent on every power-on
    pub fn with_program(mut self, program: &'static [RegisterWrite]) -> Self {
        self.program = program;
        self
    }

    /// Attach the SPI endpoint. Fails with `AlreadyBound` if one is attached.
    pub fn bind(&mut self, endpoint: BUS) -> Result<(), PanelError> {
        self.bus.bind(endpoint)
    }

    /// Detach the SPI endpoint on device removal
    pub fn unbind(&mut self) -> Option<BUS> {
        self.bus.unbind()
    }

    /// Whether an SPI endpoint is attached
    pub fn is_bound(&self) -> bool {
        self.bus.is_bound()
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Pixel timings the host engine has to generate
    pub fn timings(&self) -> &'static Timings {
        &LB035Q02_TIMINGS
    }

    /// Failure swallowed by the most recent `disable()` / `suspend()`
    pub fn last_teardown_fault(&self) -> Option<&PanelError> {
        self.teardown_fault.as_ref()
    }

    /// The host display engine
    pub fn engine(&self) -> &ENG {
        &self.engine
    }

    /// Take the driver apart
    pub fn release(self) -> (ENG, Option<PowerEnable<PWR>>, Option<BUS>) {
        let Lb035q02 {
            mut bus,
            power,
            engine,
            ..
        } = self;
        (engine, power, bus.unbind())
    }
}

impl<BUS, ENG> Lb035q02<BUS, NoPin, ENG> {
    /// Create a panel for a board without a power-enable line
    pub fn without_power_line(engine: ENG) -> Self {
        Self::new(engine, None)
    }
}

impl<BUS, PWR, ENG> Lb035q02<BUS, PWR, ENG>
where
    BUS: FrameTransport,
    PWR: OutputPin,
    ENG: DisplayEngine,
{
    /// Write one panel register
    pub fn write_reg(&mut self, index: u8, value: u16) -> Result<(), PanelError> {
        log::trace!("R{:02X}h <- {:04X}h", index, value);
        self.bus
            .endpoint()?
            .transmit(&encode_write(index, value))
            .map_err(PanelError::bus)
    }

    /// Send the whole register program, stopping at the first failure
    fn write_program(&mut self) -> Result<(), PanelError> {
        let program = self.program;
        log::debug!("Writing {} panel registers", program.len());

        for (n, reg) in program.iter().enumerate() {
            if let Err(e) = self.write_reg(reg.index, reg.value) {
                log::error!(
                    "Register write {}/{} (R{:02X}h) failed: {:?}",
                    n + 1,
                    program.len(),
                    reg.index,
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Bring the panel up: engine, power line, register program
    pub(crate) fn power_on(&mut self) -> Result<(), PanelError> {
        if !self.bus.is_bound() {
            return Err(PanelError::NotBound);
        }
        if self.state == PanelState::Active {
            return Ok(());
        }

        self.engine.enable().map_err(|e| {
            log::error!("Display engine refused to enable: {:?}", e);
            PanelError::Engine(e)
        })?;

        if let Some(line) = self.power.as_mut() {
            if let Err(e) = line.assert() {
                log::error!("Could not assert power-enable line: {:?}", e);
                self.engine.disable();
                return Err(e);
            }
        }

        self.write_program()
    }

    /// Take the panel down: power line, then engine. No register writes.
    ///
    /// Neither step needs the bus, so an unbound panel is still powered down
    /// before `NotBound` is reported.
    pub(crate) fn power_off(&mut self) -> Result<(), PanelError> {
        let bound = if self.bus.is_bound() {
            Ok(())
        } else {
            Err(PanelError::NotBound)
        };
        if self.state != PanelState::Active {
            return bound;
        }

        let deasserted = match self.power.as_mut() {
            Some(line) => line.deassert(),
            None => Ok(()),
        };
        self.engine.disable();
        deasserted.and(bound)
    }

    fn dispatch(&mut self, event: PanelEvent) -> Result<(), PanelError> {
        let next = self
            .state
            .on(event)
            .inspect_err(|e| log::warn!("Rejected panel request: {}", e))?;

        match event {
            PanelEvent::Enable | PanelEvent::Resume => self.power_on()?,
            PanelEvent::Disable | PanelEvent::Suspend => {
                self.teardown_fault = self.power_off().err();
                if let Some(e) = &self.teardown_fault {
                    log::error!("Ignoring failure during panel {:?}: {}", event, e);
                }
            }
        }

        if self.state != next {
            log::info!("Panel {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(())
    }
}

impl<BUS, PWR, ENG> Panel for Lb035q02<BUS, PWR, ENG>
where
    BUS: FrameTransport,
    PWR: OutputPin,
    ENG: DisplayEngine,
{
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn probe(&mut self) -> PanelConfig {
        let timings = *self.timings();
        log::info!(
            "Probed {}: {}x{} @ {} kHz",
            DRIVER_NAME,
            timings.x_res,
            timings.y_res,
            timings.pixel_clock
        );
        PanelConfig {
            flags: Flag::LB035Q02,
            timings,
        }
    }

    fn enable(&mut self) -> Result<(), PanelError> {
        self.dispatch(PanelEvent::Enable)
    }

    fn disable(&mut self) -> Result<(), PanelError> {
        self.dispatch(PanelEvent::Disable)
    }

    fn suspend(&mut self) -> Result<(), PanelError> {
        self.dispatch(PanelEvent::Suspend)
    }

    fn resume(&mut self) -> Result<(), PanelError> {
        self.dispatch(PanelEvent::Resume)
    }
}
