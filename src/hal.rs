//! Hardware Abstraction Layer
//!
//! Line driving is generic over `embedded-hal` pins and builds everywhere.
//! The STM32 bring-up and input wrappers only exist in the embedded build.

pub mod lines;

#[cfg(feature = "embedded")]
pub mod gpio;
#[cfg(feature = "embedded")]
pub mod platform;
