//! Bit-banged 3-wire serial interface
//!
//! Shifts 32-bit register words into a MAX2870-style synthesizer over
//! DATA/CLK, commits them with a pulse on LE, and brackets bursts of writes
//! with the chip-select sequence the part expects.
//!
//! Data is clocked into the shift register on each rising edge of CLK,
//! MSB first, so DATA only ever changes while CLK is low.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::config::{
    BITS_PER_BYTE, BIT_HOLD_US, BIT_SETUP_US, CLOCK_PULSE_US, LATCH_GUARD_US, LATCH_PULSE_US,
    LINE_SETTLE_LONG_US, LINE_SETTLE_US,
};
use crate::hal::lines::LineDriver;
use crate::types::{RegisterWord, Signal};

/// Serial bus built from a line driver and a blocking delay
pub struct BitBang<L, D> {
    lines: L,
    delay: D,
}

impl<L: LineDriver, D: DelayNs> BitBang<L, D> {
    /// Wrap a line driver and delay provider
    #[must_use]
    pub const fn new(lines: L, delay: D) -> Self {
        Self { lines, delay }
    }

    /// Drive one line, then wait `settle_us`
    fn drive(&mut self, signal: Signal, level: PinState, settle_us: u32) {
        self.lines.set_signal(signal, level);
        self.delay.delay_us(settle_us);
    }

    /// Shift one byte out, bit 7 first. CLK is low on return.
    pub fn send_byte(&mut self, value: u8) {
        let mut data = value;
        for _ in 0..BITS_PER_BYTE {
            let bit = PinState::from(data & 0x80 != 0);
            data <<= 1;

            self.drive(Signal::Data, bit, BIT_SETUP_US);
            self.drive(Signal::Clock, PinState::High, CLOCK_PULSE_US);
            self.drive(Signal::Clock, PinState::Low, BIT_HOLD_US);
        }
    }

    /// Shift a full register word out and latch it
    ///
    /// Data is transferred from the shift register to one of six latches
    /// on the rising edge of LE; the destination is selected by the control
    /// bits inside `word`.
    pub fn send_register(&mut self, word: RegisterWord) {
        trace!("write {}", word);
        for byte in word.to_be_bytes_shifted() {
            self.send_byte(byte);
        }
        self.delay.delay_us(LATCH_GUARD_US);
        self.drive(Signal::LatchEnable, PinState::High, LATCH_PULSE_US);
        self.drive(Signal::LatchEnable, PinState::Low, LATCH_GUARD_US);
    }

    /// Bring the interface from idle to active and start a burst of writes
    ///
    /// The returned guard holds the bus exclusively, so a second
    /// transaction cannot be opened until this one is closed.
    pub fn open_transaction(&mut self) -> Transaction<'_, L, D> {
        self.drive(Signal::ChipSelect, PinState::High, LINE_SETTLE_US);
        self.drive(Signal::LatchEnable, PinState::High, LINE_SETTLE_LONG_US);
        self.drive(Signal::Data, PinState::Low, LINE_SETTLE_US);
        self.drive(Signal::Clock, PinState::Low, LINE_SETTLE_US);
        self.drive(Signal::ChipSelect, PinState::Low, LINE_SETTLE_LONG_US);
        self.drive(Signal::LatchEnable, PinState::Low, LINE_SETTLE_US);
        Transaction { bus: self }
    }

    /// Return the interface to idle: CLK low, DATA low, CS high
    fn close_transaction(&mut self) {
        self.drive(Signal::Clock, PinState::Low, LINE_SETTLE_US);
        self.drive(Signal::Data, PinState::Low, LINE_SETTLE_LONG_US);
        self.drive(Signal::ChipSelect, PinState::High, LINE_SETTLE_LONG_US);
    }

    /// Blocking wait outside of any transaction
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Line driver in use
    pub const fn lines(&self) -> &L {
        &self.lines
    }

    /// Give back the line driver and delay
    pub fn release(self) -> (L, D) {
        (self.lines, self.delay)
    }
}

/// An open transaction on a [`BitBang`] bus
///
/// Dropping the guard runs the closing sequence.
pub struct Transaction<'a, L: LineDriver, D: DelayNs> {
    bus: &'a mut BitBang<L, D>,
}

impl<L: LineDriver, D: DelayNs> Transaction<'_, L, D> {
    /// Shift and latch one register word
    pub fn send_register(&mut self, word: RegisterWord) {
        self.bus.send_register(word);
    }

    /// Blocking wait while the transaction stays open
    pub fn settle_ms(&mut self, ms: u32) {
        self.bus.delay.delay_ms(ms);
    }

    /// Close the transaction now
    pub fn close(self) {}
}

impl<L: LineDriver, D: DelayNs> Drop for Transaction<'_, L, D> {
    fn drop(&mut self) {
        self.bus.close_transaction();
    }
}
