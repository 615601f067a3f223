//! Recording stand-ins for the bus, the power line and the display engine.
//!
//! All three append to one shared journal so tests can assert ordering
//! across collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::{digital, spi};

use crate::lb035q02::{
    cmd::WireFrames, error::DisplayError, interface::FrameTransport, panel::DisplayEngine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    EngineOn,
    EngineOff,
    LineHigh,
    LineLow,
    Write(WireFrames),
}

#[derive(Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(crate) fn writes(&self) -> Vec<WireFrames> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(frames) => Some(*frames),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn count(&self, event: Event) -> usize {
        self.0.borrow().iter().filter(|e| **e == event).count()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Records frames; fails the `fail_at`-th transmit (1-based) with `Overrun`
pub(crate) struct Transport {
    pub(crate) journal: Journal,
    pub(crate) fail_at: Option<usize>,
    sent: usize,
}

impl Transport {
    pub(crate) fn new(journal: &Journal) -> Self {
        Transport {
            journal: journal.clone(),
            fail_at: None,
            sent: 0,
        }
    }

    pub(crate) fn failing_at(journal: &Journal, n: usize) -> Self {
        Transport {
            fail_at: Some(n),
            ..Self::new(journal)
        }
    }
}

impl FrameTransport for Transport {
    type Error = spi::ErrorKind;

    fn transmit(&mut self, frames: &WireFrames) -> Result<(), Self::Error> {
        self.sent += 1;
        if self.fail_at == Some(self.sent) {
            return Err(spi::ErrorKind::Overrun);
        }
        self.journal.push(Event::Write(*frames));
        Ok(())
    }
}

pub(crate) struct Engine {
    journal: Journal,
    pub(crate) refuse: bool,
}

impl Engine {
    pub(crate) fn new(journal: &Journal) -> Self {
        Engine {
            journal: journal.clone(),
            refuse: false,
        }
    }
}

impl DisplayEngine for Engine {
    fn enable(&mut self) -> Result<(), DisplayError> {
        if self.refuse {
            return Err(DisplayError::BusWriteError);
        }
        self.journal.push(Event::EngineOn);
        Ok(())
    }

    fn disable(&mut self) {
        self.journal.push(Event::EngineOff);
    }
}

pub(crate) struct Line {
    journal: Journal,
    pub(crate) fail: bool,
}

impl Line {
    pub(crate) fn new(journal: &Journal) -> Self {
        Line {
            journal: journal.clone(),
            fail: false,
        }
    }
}

impl digital::ErrorType for Line {
    type Error = digital::ErrorKind;
}

impl digital::OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.journal.push(Event::LineLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.journal.push(Event::LineHigh);
        Ok(())
    }
}
