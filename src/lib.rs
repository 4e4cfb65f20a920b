//! MAX2870 PLL Loader Firmware Library
//!
//! Configures a MAX2870 frequency synthesizer by shifting six pre-computed
//! 32-bit register words into it over a bit-banged 3-wire interface, then
//! steps the synthesizer through a fixed rotation of output frequencies.
//!
//! # Architecture
//!
//! Data flows one way, from the control loop down to the pins:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CONTROL LAYER                           │
//! │        ControlLoop (BRINGUP → ROTATE)  │  Rotation           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DRIVER LAYER                            │
//! │  Max2870::apply_profile  │  BitBang (byte/register/bracket)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        HAL LAYER                             │
//! │   LineDriver / PinLines (embedded-hal)  │  DelayNs           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interface is write-only and unacknowledged, so nothing below the
//! control layer returns an error.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Must come first: the logging macros are used by every module below.
#[macro_use]
mod fmt;

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Line driver seam, plus STM32 bring-up in embedded builds.
pub mod hal;

/// Peripheral Drivers
///
/// Bit-banged serial interface and the MAX2870 profile loader.
pub mod drivers;

/// Control Logic
///
/// BRINGUP/ROTATE state machine and profile rotation.
pub mod control;

/// Frequency profiles generated for this board
pub mod profiles;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::control::rotation::{Rotation, RotationError};
    pub use crate::control::state::{ControlLoop, ControlState, LoopTiming};
    pub use crate::drivers::bitbang::BitBang;
    pub use crate::drivers::max2870::Max2870;
    pub use crate::hal::lines::{LineDriver, PinLines};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::digital::{OutputPin, PinState};

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
