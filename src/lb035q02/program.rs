//! Power-on register program
//!
//! Taken from the power-on sequence on page 28 of the LB035Q02 datasheet.
//! Sent in this exact order on every power-on.

use crate::lb035q02::cmd::RegisterWrite;

/// Number of writes in [`INIT_PROGRAM`]
pub const INIT_PROGRAM_LEN: usize = 24;

/// Register writes that configure the panel controller after power is applied
pub const INIT_PROGRAM: [RegisterWrite; INIT_PROGRAM_LEN] = [
    RegisterWrite::new(0x01, 0x6300),
    RegisterWrite::new(0x02, 0x0200),
    RegisterWrite::new(0x03, 0x0177),
    RegisterWrite::new(0x04, 0x04c7),
    RegisterWrite::new(0x05, 0xffc0),
    RegisterWrite::new(0x06, 0xe806),
    RegisterWrite::new(0x0a, 0x4008),
    RegisterWrite::new(0x0b, 0x0000),
    RegisterWrite::new(0x0d, 0x0030),
    RegisterWrite::new(0x0e, 0x2800),
    RegisterWrite::new(0x0f, 0x0000),
    RegisterWrite::new(0x16, 0x9f80),
    RegisterWrite::new(0x17, 0x0a0f),
    RegisterWrite::new(0x1e, 0x00c1),
    // gamma
    RegisterWrite::new(0x30, 0x0300),
    RegisterWrite::new(0x31, 0x0007),
    RegisterWrite::new(0x32, 0x0000),
    RegisterWrite::new(0x33, 0x0000),
    RegisterWrite::new(0x34, 0x0707),
    RegisterWrite::new(0x35, 0x0004),
    RegisterWrite::new(0x36, 0x0302),
    RegisterWrite::new(0x37, 0x0202),
    RegisterWrite::new(0x3a, 0x0a0d),
    RegisterWrite::new(0x3b, 0x0806),
];
