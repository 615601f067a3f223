//! Optional power-enable line
//!
//! Some boards gate panel power (or the level shifter in front of it) with a
//! GPIO. Boards without one pass `None` and the step is skipped.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::lb035q02::error::PanelError;

/// A GPIO that switches the panel supply, with its active level
pub struct PowerEnable<P> {
    pin: P,
    active_high: bool,
}

impl<P> PowerEnable<P> {
    /// Panel is powered while the pin is high
    pub const fn active_high(pin: P) -> Self {
        PowerEnable {
            pin,
            active_high: true,
        }
    }

    /// Panel is powered while the pin is low
    pub const fn active_low(pin: P) -> Self {
        PowerEnable {
            pin,
            active_high: false,
        }
    }

    /// Access the pin, e.g. to reconfigure drive strength
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> PowerEnable<P> {
    /// Drive the line to its active level
    pub fn assert(&mut self) -> Result<(), PanelError> {
        self.drive(self.active_high)
    }

    /// Drive the line to its inactive level
    pub fn deassert(&mut self) -> Result<(), PanelError> {
        self.drive(!self.active_high)
    }

    fn drive(&mut self, high: bool) -> Result<(), PanelError> {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(PanelError::power_line)
    }
}

/// Placeholder pin type for boards without a power-enable line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorKind;

    #[derive(Default)]
    struct Level {
        high: Option<bool>,
        fail: bool,
    }

    impl ErrorType for Level {
        type Error = ErrorKind;
    }

    impl OutputPin for Level {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.high = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.high = Some(true);
            Ok(())
        }
    }

    #[test]
    fn test_active_high() {
        let mut line = PowerEnable::active_high(Level::default());
        line.assert().unwrap();
        assert_eq!(line.pin.high, Some(true));
        line.deassert().unwrap();
        assert_eq!(line.release().high, Some(false));
    }

    #[test]
    fn test_active_low() {
        let mut line = PowerEnable::active_low(Level::default());
        line.assert().unwrap();
        assert_eq!(line.pin.high, Some(false));
        line.deassert().unwrap();
        assert_eq!(line.pin.high, Some(true));
    }

    #[test]
    fn test_pin_error_maps_to_power_line() {
        let mut line = PowerEnable::active_high(Level {
            high: None,
            fail: true,
        });
        assert_eq!(line.assert(), Err(PanelError::PowerLine(ErrorKind::Other)));
    }
}
