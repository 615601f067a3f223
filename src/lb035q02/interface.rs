//! Serial configuration interface
//!
//! The panel controller sits on a plain SPI bus with its own chip select. A
//! register write must keep the bus for both frames but pulse chip select in
//! between, which `SpiDevice` cannot express, so the transport drives the bus
//! and chip select itself.
use embedded_hal::{
    digital::OutputPin,
    spi::{self, SpiBus},
};
use embedded_hal_bus::spi::DeviceError;

use crate::lb035q02::{cmd::WireFrames, error::PanelError};

/// Anything that can put one register write on the wire.
///
/// Implementations must send both frames as one transaction: no other traffic
/// between them, a chip-select break after the index frame, and chip select
/// released after the value frame.
pub trait FrameTransport {
    /// Failure reported by the bus
    type Error: spi::Error;

    /// Send the index frame then the value frame
    fn transmit(&mut self, frames: &WireFrames) -> Result<(), Self::Error>;
}

impl<T: FrameTransport + ?Sized> FrameTransport for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, frames: &WireFrames) -> Result<(), Self::Error> {
        T::transmit(self, frames)
    }
}

/// [`FrameTransport`] over an exclusively owned SPI bus and a chip-select pin
pub struct SpiTransport<SPI, CS> {
    /// SPI bus, mode 0, write only
    spi: SPI,
    /// Chip select, active low
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS> {
    /// Wrap the bus and chip select
    pub fn new(spi: SPI, cs: CS) -> Self {
        SpiTransport { spi, cs }
    }

    /// Give the bus and chip select back
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn frame(&mut self, frame: &[u8]) -> Result<(), DeviceError<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(DeviceError::Cs)?;

        let sent = self.spi.write(frame).and_then(|()| self.spi.flush());

        // release chip select even when the write failed
        let released = self.cs.set_high().map_err(DeviceError::Cs);
        sent.map_err(DeviceError::Spi)?;
        released
    }
}

impl<SPI, CS> FrameTransport for SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = DeviceError<SPI::Error, CS::Error>;

    fn transmit(&mut self, frames: &WireFrames) -> Result<(), Self::Error> {
        self.frame(&frames.index)?;
        self.frame(&frames.value)
    }
}

/// Holds the bus endpoint the panel was attached to, if any
pub struct BusBinding<T> {
    endpoint: Option<T>,
}

impl<T> Default for BusBinding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BusBinding<T> {
    /// An empty binding
    pub const fn new() -> Self {
        BusBinding { endpoint: None }
    }

    /// Attach the endpoint found by bus enumeration
    pub fn bind(&mut self, endpoint: T) -> Result<(), PanelError> {
        if self.endpoint.is_some() {
            log::error!("Refusing to bind a second bus endpoint");
            return Err(PanelError::AlreadyBound);
        }
        self.endpoint = Some(endpoint);
        log::debug!("Bus endpoint bound");
        Ok(())
    }

    /// Detach and return the endpoint
    pub fn unbind(&mut self) -> Option<T> {
        let endpoint = self.endpoint.take();
        if endpoint.is_some() {
            log::debug!("Bus endpoint unbound");
        }
        endpoint
    }

    /// Whether an endpoint is attached
    pub fn is_bound(&self) -> bool {
        self.endpoint.is_some()
    }

    /// The attached endpoint
    pub fn endpoint(&mut self) -> Result<&mut T, PanelError> {
        self.endpoint.as_mut().ok_or(PanelError::NotBound)
    }
}
