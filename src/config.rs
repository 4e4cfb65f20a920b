//! System configuration and protocol constants
//!
//! This module defines compile-time constants for the PLL loader.
//! Protocol timing values follow the MAX2870 serial interface requirements
//! and the chip's recommended power-up ordering; treat them as a fixed
//! contract rather than tuning knobs.

/// Number of register words that make up one frequency profile
pub const REGISTERS_PER_PROFILE: usize = 6;

/// Control bits selecting the destination latch (C3..C1)
pub const REGISTER_ADDRESS_MASK: u32 = 0b111;

/// Bits shifted per byte
pub const BITS_PER_BYTE: u32 = 8;

/// DATA setup time before the rising clock edge, in microseconds
pub const BIT_SETUP_US: u32 = 2;

/// Clock high time, in microseconds
pub const CLOCK_PULSE_US: u32 = 4;

/// DATA hold time after the falling clock edge, in microseconds
pub const BIT_HOLD_US: u32 = 2;

/// Gap between the last clock bit and LE, and after LE drops, in microseconds
pub const LATCH_GUARD_US: u32 = 2;

/// LE high time, in microseconds
pub const LATCH_PULSE_US: u32 = 10;

/// Short settle after a line change in the transaction bracket
pub const LINE_SETTLE_US: u32 = 2;

/// Long settle after CS/LE/DATA changes in the transaction bracket
pub const LINE_SETTLE_LONG_US: u32 = 10;

/// Wait after writing R5 alone, before the remaining registers
pub const REG5_SETTLE_MS: u32 = 20;

/// Wait after a profile's transaction closes, before the output is relied on
pub const PROFILE_SETTLE_MS: u32 = 10;

/// Delay between platform bring-up and the first profile
pub const POWER_UP_DELAY_MS: u32 = 1_000;

/// Dwell on the bring-up profile before rotation starts
pub const BRINGUP_DWELL_MS: u32 = 10_000;

/// Dwell on each profile of the rotation
pub const ROTATION_DWELL_MS: u32 = 10_000;

/// Capacity of the profile rotation
pub const MAX_ROTATION_LEN: usize = 8;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// MAX2870 DATA
    pub const SPI_DATA: &str = "PA0";

    /// MAX2870 CLK
    pub const SPI_CLOCK: &str = "PA1";

    /// MAX2870 LE
    pub const SPI_LATCH_ENABLE: &str = "PA2";

    /// Auxiliary input (pull-up, unused by the sequencer)
    pub const AUX_INPUT: &str = "PA3";

    /// MAX2870 CE
    pub const SPI_CHIP_SELECT: &str = "PA4";

    /// Configuration switch (active low, pull-up)
    pub const CONFIG_SWITCH: &str = "PA5";
}
