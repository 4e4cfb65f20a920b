//! Shared types used across the PLL loader
//!
//! This module defines the domain types that flow from the control loop
//! down to the line driver: the four logic signals, the opaque 32-bit
//! register word, and the six-word frequency profile.

use core::fmt;

use embedded_hal::digital::PinState;

use crate::config::{REGISTERS_PER_PROFILE, REGISTER_ADDRESS_MASK};

/// One of the four lines of the serial interface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Serial data (DATA), sampled by the chip on the rising clock edge
    Data,
    /// Serial clock (CLK)
    Clock,
    /// Load enable (LE), commits the shift register into a latch
    LatchEnable,
    /// Chip select (CE/CS)
    ChipSelect,
}

impl Signal {
    /// All signals in a fixed order (matches [`Signal::index`])
    pub const ALL: [Self; 4] = [Self::Data, Self::Clock, Self::LatchEnable, Self::ChipSelect];

    /// Position of this signal in [`Signal::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Data => 0,
            Self::Clock => 1,
            Self::LatchEnable => 2,
            Self::ChipSelect => 3,
        }
    }

    /// Short name as printed on the schematic
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Data => "DATA",
            Self::Clock => "CLK",
            Self::LatchEnable => "LE",
            Self::ChipSelect => "CS",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Signal {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.name());
    }
}

/// Snapshot of the level driven on every signal line
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LineState([PinState; 4]);

impl LineState {
    /// Idle levels: DATA, CLK and LE low, CS high
    pub const IDLE: Self = Self([PinState::Low, PinState::Low, PinState::Low, PinState::High]);

    /// Level currently driven on `signal`
    #[must_use]
    pub const fn level(&self, signal: Signal) -> PinState {
        self.0[signal.index()]
    }

    /// Record a new level for `signal`
    pub fn set(&mut self, signal: Signal, level: PinState) {
        self.0[signal.index()] = level;
    }

    /// Returns a copy with `signal` driven to `level`
    #[must_use]
    pub fn with(mut self, signal: Signal, level: PinState) -> Self {
        self.set(signal, level);
        self
    }

    /// Whether the state matches what every transaction must leave behind
    /// (CLK low, DATA low, CS high). LE is not part of the boundary state.
    #[must_use]
    pub fn is_transaction_idle(&self) -> bool {
        self.level(Signal::Clock) == PinState::Low
            && self.level(Signal::Data) == PinState::Low
            && self.level(Signal::ChipSelect) == PinState::High
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::IDLE
    }
}

impl fmt::Debug for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |s: Signal| u8::from(self.level(s) == PinState::High);
        write!(
            f,
            "LineState(DATA={} CLK={} LE={} CS={})",
            bit(Signal::Data),
            bit(Signal::Clock),
            bit(Signal::LatchEnable),
            bit(Signal::ChipSelect)
        )
    }
}

/// Opaque 32-bit configuration word for one synthesizer register
///
/// The target register is selected by the control bits carried in the
/// word itself; nothing here interprets the remaining fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterWord(u32);

impl RegisterWord {
    /// Wrap a pre-computed register value
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw register value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Bytes in transmission order, most significant first
    ///
    /// Extracted by shifting so the result does not depend on the target's
    /// memory layout.
    #[must_use]
    pub const fn to_be_bytes_shifted(self) -> [u8; 4] {
        [
            ((self.0 >> 24) & 0xFF) as u8,
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ]
    }

    /// Register address held in the control bits
    #[must_use]
    pub const fn address(self) -> u8 {
        (self.0 & REGISTER_ADDRESS_MASK) as u8
    }
}

impl From<u32> for RegisterWord {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for RegisterWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegisterWord({:#010X})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RegisterWord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "R{}={=u32:#x}", self.address(), self.0);
    }
}

/// Named set of six register words producing one output frequency
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrequencyProfile {
    name: &'static str,
    /// Indexed by register number (R0 first)
    registers: [RegisterWord; REGISTERS_PER_PROFILE],
}

impl FrequencyProfile {
    /// Build a profile from words listed R0 through R5
    #[must_use]
    pub const fn new(name: &'static str, words: [u32; REGISTERS_PER_PROFILE]) -> Self {
        Self {
            name,
            registers: [
                RegisterWord(words[0]),
                RegisterWord(words[1]),
                RegisterWord(words[2]),
                RegisterWord(words[3]),
                RegisterWord(words[4]),
                RegisterWord(words[5]),
            ],
        }
    }

    /// Profile name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Word for register `n`, `None` past R5
    #[must_use]
    pub fn register(&self, n: usize) -> Option<RegisterWord> {
        self.registers.get(n).copied()
    }

    /// Words in the order they go on the wire: R5 down to R0
    #[must_use]
    pub const fn transmit_order(&self) -> [RegisterWord; REGISTERS_PER_PROFILE] {
        let r = &self.registers;
        [r[5], r[4], r[3], r[2], r[1], r[0]]
    }
}

impl fmt::Debug for FrequencyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyProfile")
            .field("name", &self.name)
            .field("registers", &self.registers)
            .finish()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for FrequencyProfile {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.name);
    }
}
