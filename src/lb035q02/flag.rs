/// Pixel-bus signal flags a panel publishes to the host display engine.
///
/// Combined into [`PanelConfig::flags`](crate::lb035q02::PanelConfig::flags).
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Sync and clock polarity
    pub const INVERT_VSYNC: u32 = 1 << 0; // VSYNC active low
    pub const INVERT_HSYNC: u32 = 1 << 1; // HSYNC active low
    pub const INVERT_PIXEL_CLOCK: u32 = 1 << 2; // data driven on rising edge
    pub const INVERT_OUTPUT_ENABLE: u32 = 1 << 3; // DE active low

    // Panel technology
    pub const TFT: u32 = 1 << 20; // active matrix, otherwise STN

    /// What the LB035Q02 needs: TFT with both syncs active low
    pub const LB035Q02: u32 = Self::TFT | Self::INVERT_VSYNC | Self::INVERT_HSYNC;
}
