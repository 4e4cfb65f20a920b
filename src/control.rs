//! Control Logic
//!
//! Profile rotation and the BRINGUP/ROTATE state machine that drives the
//! synthesizer for the lifetime of the firmware.

pub mod rotation;
pub mod state;
