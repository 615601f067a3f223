//! Pixel timing descriptor
//!
//! Read by the host display engine to program its timing generator before the
//! panel is enabled. The driver itself never touches pixel timing.

use embedded_graphics::geometry::{OriginDimensions, Size};

/// Video timings of a parallel RGB panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Active pixels per line
    pub x_res: u16,
    /// Active lines per frame
    pub y_res: u16,
    /// Pixel clock in kHz
    pub pixel_clock: u32,
    /// Horizontal sync pulse width, in pixel clocks
    pub hsw: u16,
    /// Horizontal front porch
    pub hfp: u16,
    /// Horizontal back porch
    pub hbp: u16,
    /// Vertical sync pulse width, in lines
    pub vsw: u16,
    /// Vertical front porch
    pub vfp: u16,
    /// Vertical back porch
    pub vbp: u16,
}

impl Timings {
    /// Pixel clocks per line, blanking included
    pub const fn h_total(&self) -> u32 {
        self.x_res as u32 + self.hsw as u32 + self.hfp as u32 + self.hbp as u32
    }

    /// Lines per frame, blanking included
    pub const fn v_total(&self) -> u32 {
        self.y_res as u32 + self.vsw as u32 + self.vfp as u32 + self.vbp as u32
    }

    /// Whole frames per second produced by these timings
    pub const fn refresh_rate_hz(&self) -> u32 {
        let frame = self.h_total() * self.v_total();
        if frame == 0 {
            return 0;
        }
        self.pixel_clock * 1000 / frame
    }
}

impl OriginDimensions for Timings {
    fn size(&self) -> Size {
        Size::new(self.x_res as u32, self.y_res as u32)
    }
}

/// LB035Q02: QVGA at 6.5 MHz
pub const LB035Q02_TIMINGS: Timings = Timings {
    x_res: 320,
    y_res: 240,

    pixel_clock: 6500,

    hsw: 2,
    hfp: 20,
    hbp: 68,

    vsw: 2,
    vfp: 4,
    vbp: 18,
};
