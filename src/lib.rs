//! Driver for the LG.Philips LB035Q02 TFT panel
//!
//! Brings the panel from unpowered to streaming pixels and back, and
//! programs its controller registers over SPI. Built on
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) 1.0 so any
//! HAL can provide the bus and pins.
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod lb035q02;

pub use lb035q02::*;
