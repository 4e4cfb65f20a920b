//! Peripheral Drivers
//!
//! The bit-banged serial interface and the synthesizer driver built on it.
//! Both are generic over the line driver and delay, so they run unchanged
//! on the target and against the host test harness.

pub mod bitbang;
pub mod max2870;
