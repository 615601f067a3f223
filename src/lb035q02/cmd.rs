//! Two-frame register write encoding
//!
//! Every register write is two 3-byte SPI frames sent in one transaction,
//! with a chip-select break between them:
//!
//! ```text
//! index frame: 0x70 0x00 <index & 0x7F>
//! value frame: 0x72 <value MSB> <value LSB>
//! ```
//!
//! The panel never answers, so nothing is read back.

/// Framing bytes of the panel's serial interface
pub struct Cmd;
impl Cmd {
    /// Start byte of the index frame (ID = 0b011100, RS = 0, write)
    pub const SET_INDEX: u8 = 0x70;
    /// Start byte of the value frame (ID = 0b011100, RS = 1, write)
    pub const WRITE_VALUE: u8 = 0x72;
    /// Register indices are 7 bits wide
    pub const INDEX_MASK: u8 = 0x7F;
}

/// Length of one frame in bytes
pub const FRAME_LEN: usize = 3;

/// One logical register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Register index, only the low 7 bits reach the wire
    pub index: u8,
    /// Register value
    pub value: u16,
}

impl RegisterWrite {
    /// Describe a write of `value` into register `index`
    pub const fn new(index: u8, value: u16) -> Self {
        RegisterWrite { index, value }
    }

    /// Serialize into the wire frames
    pub const fn encode(&self) -> WireFrames {
        encode_write(self.index, self.value)
    }
}

/// The two frames of a single register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFrames {
    /// Selects the register, sent first and followed by a chip-select break
    pub index: [u8; FRAME_LEN],
    /// Carries the value and ends the transaction
    pub value: [u8; FRAME_LEN],
}

/// Encode a register write.
///
/// Out-of-range indices are masked to 7 bits, not rejected.
pub const fn encode_write(index: u8, value: u16) -> WireFrames {
    let [msb, lsb] = value.to_be_bytes();
    WireFrames {
        index: [Cmd::SET_INDEX, 0x00, index & Cmd::INDEX_MASK],
        value: [Cmd::WRITE_VALUE, msb, lsb],
    }
}
