//! Serial Line Driver
//!
//! The [`LineDriver`] trait is the seam between the protocol code and
//! whatever actually moves the pins: GPIO outputs on the target, or a
//! recording harness on the host.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::types::{LineState, Signal};

/// Drives the four serial interface lines
///
/// Each call changes exactly one line and takes effect immediately. There is
/// no failure path: the interface is write-only and unacknowledged.
pub trait LineDriver {
    /// Drive `signal` to `level`
    fn set_signal(&mut self, signal: Signal, level: PinState);
}

impl<T: LineDriver + ?Sized> LineDriver for &mut T {
    fn set_signal(&mut self, signal: Signal, level: PinState) {
        T::set_signal(self, signal, level);
    }
}

/// Line driver over four push-pull output pins
///
/// Pins must be infallible, as they are for on-chip GPIO. The driver keeps a
/// shadow copy of the levels it has written so callers can inspect them.
pub struct PinLines<DAT, CLK, LE, CS> {
    data: DAT,
    clock: CLK,
    latch_enable: LE,
    chip_select: CS,
    state: LineState,
}

impl<DAT, CLK, LE, CS> PinLines<DAT, CLK, LE, CS>
where
    DAT: OutputPin<Error = Infallible>,
    CLK: OutputPin<Error = Infallible>,
    LE: OutputPin<Error = Infallible>,
    CS: OutputPin<Error = Infallible>,
{
    /// Take ownership of the pins and drive them to [`LineState::IDLE`]
    #[must_use]
    pub fn new(data: DAT, clock: CLK, latch_enable: LE, chip_select: CS) -> Self {
        let mut lines = Self {
            data,
            clock,
            latch_enable,
            chip_select,
            state: LineState::IDLE,
        };
        for signal in Signal::ALL {
            lines.set_signal(signal, LineState::IDLE.level(signal));
        }
        lines
    }

    /// Levels last driven on each line
    #[must_use]
    pub const fn state(&self) -> LineState {
        self.state
    }

    /// Give the pins back
    pub fn release(self) -> (DAT, CLK, LE, CS) {
        (self.data, self.clock, self.latch_enable, self.chip_select)
    }
}

impl<DAT, CLK, LE, CS> LineDriver for PinLines<DAT, CLK, LE, CS>
where
    DAT: OutputPin<Error = Infallible>,
    CLK: OutputPin<Error = Infallible>,
    LE: OutputPin<Error = Infallible>,
    CS: OutputPin<Error = Infallible>,
{
    fn set_signal(&mut self, signal: Signal, level: PinState) {
        let result = match signal {
            Signal::Data => self.data.set_state(level),
            Signal::Clock => self.clock.set_state(level),
            Signal::LatchEnable => self.latch_enable.set_state(level),
            Signal::ChipSelect => self.chip_select.set_state(level),
        };
        match result {
            Ok(()) => self.state.set(signal, level),
            Err(never) => match never {},
        }
    }
}
