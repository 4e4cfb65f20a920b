//! PLL Loader Main Application
//!
//! Entry point for the MAX2870 loader firmware.
//! Brings up the board, applies the test profile, then rotates the
//! transverter LO profiles forever. Everything runs on one blocking loop;
//! no tasks are spawned.

#![no_std]
#![no_main]

use defmt::{info, panic};
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use max2870_pllset::hal::platform::initialize_platform;
use max2870_pllset::prelude::*;
use max2870_pllset::profiles;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("MAX2870 PLL loader v{}", env!("CARGO_PKG_VERSION"));

    let platform = initialize_platform();

    info!("config switch: {}", platform.config_switch.state());

    let rotation = match Rotation::new(&profiles::DEFAULT_ROTATION) {
        Ok(rotation) => rotation,
        Err(e) => panic!("bad rotation: {}", e),
    };
    info!("rotation of {} profiles", rotation.len());

    let synth = Max2870::new(platform.lines, platform.delay);
    let control = ControlLoop::new(synth, profiles::TEST_700M, rotation, LoopTiming::default());

    control.run()
}
