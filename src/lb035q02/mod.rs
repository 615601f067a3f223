//! LB035Q02 TFT Panel Driver
//!
//! Used in the LG.Philips 3.5" QVGA panel found on OMAP3 boards, driven by the
//! SoC's parallel RGB output with a separate SPI link for configuration.
//!
//! ### Usage
//! The driver does not touch pixels. The host display engine streams those;
//! this driver powers the panel and programs its registers. To bring it up:
//!
//! 1. create the driver with your [`DisplayEngine`] and optional
//!    [`PowerEnable`] line using [`Lb035q02::new`]
//! 1. attach the SPI endpoint with [`Lb035q02::bind`], usually an
//!    [`SpiTransport`] over the bus and the panel's chip select
//! 1. hand [`Panel::probe`]'s timings to the engine, then call
//!    [`Panel::enable`]
//!
//! All methods take `&mut self`. Share the driver between tasks only behind
//! your own mutex.

pub mod cmd;
pub mod driver;
pub mod error;
pub mod interface;
pub mod panel;
pub mod power;
pub mod program;
pub mod state;
pub mod timings;

mod flag;
#[cfg(test)]
mod mock;

pub use cmd::{encode_write, RegisterWrite, WireFrames};
pub use driver::Lb035q02;
pub use error::{DisplayError, PanelError};
pub use flag::Flag;
pub use interface::{BusBinding, FrameTransport, SpiTransport};
pub use panel::{DisplayEngine, Panel, PanelConfig};
pub use power::{NoPin, PowerEnable};
pub use program::INIT_PROGRAM;
pub use state::{PanelEvent, PanelState};
pub use timings::{Timings, LB035Q02_TIMINGS};

/// Name the display subsystem matches boards against
pub const DRIVER_NAME: &str = "lgphilips_lb035q02_panel";

/// Name the SPI bus matches the configuration endpoint against
pub const SPI_DRIVER_NAME: &str = "lgphilips_lb035q02_panel-spi";

/// Display width, pixels horizontally
pub const WIDTH: u16 = LB035Q02_TIMINGS.x_res;

/// Display height, pixels vertically
pub const HEIGHT: u16 = LB035Q02_TIMINGS.y_res;
