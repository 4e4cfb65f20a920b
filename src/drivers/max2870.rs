//! `MAX2870` Synthesizer Driver
//!
//! Loads pre-computed frequency profiles into a MAX2870 (or a register
//! compatible part) over the bit-banged serial interface.
//!
//! Registers are written R5 first and alone, followed by a long settle,
//! then R4 down to R0. Later registers depend on state already latched
//! by earlier ones, so the order is fixed.

use embedded_hal::delay::DelayNs;

use crate::config::{PROFILE_SETTLE_MS, REG5_SETTLE_MS};
use crate::drivers::bitbang::BitBang;
use crate::hal::lines::LineDriver;
use crate::types::FrequencyProfile;

/// `MAX2870` driver
pub struct Max2870<L, D> {
    bus: BitBang<L, D>,
}

impl<L: LineDriver, D: DelayNs> Max2870<L, D> {
    /// Create a driver on top of a line driver and delay provider
    #[must_use]
    pub const fn new(lines: L, delay: D) -> Self {
        Self {
            bus: BitBang::new(lines, delay),
        }
    }

    /// Program all six registers of `profile`
    ///
    /// Open loop: there is no lock detect read-back, so the only guarantee
    /// is that the output has had [`PROFILE_SETTLE_MS`] to settle on return.
    pub fn apply_profile(&mut self, profile: &FrequencyProfile) {
        debug!("apply profile {}", profile.name());
        let [reg5, rest @ ..] = profile.transmit_order();

        let mut txn = self.bus.open_transaction();
        txn.send_register(reg5);
        txn.settle_ms(REG5_SETTLE_MS);
        for word in rest {
            txn.send_register(word);
        }
        txn.close();

        self.bus.delay_ms(PROFILE_SETTLE_MS);
    }

    /// Blocking wait, e.g. to dwell on the current output
    pub fn wait_ms(&mut self, ms: u32) {
        self.bus.delay_ms(ms);
    }

    /// Underlying serial bus
    pub const fn bus(&self) -> &BitBang<L, D> {
        &self.bus
    }

    /// Give back the line driver and delay
    pub fn release(self) -> (L, D) {
        self.bus.release()
    }
}
