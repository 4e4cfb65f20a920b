//! Control Loop State Machine
//!
//! Two states: BRINGUP, entered once at power-on, and ROTATE, which cycles
//! the configured profiles forever. Transitions are pure; the loop
//! applies the side effects that belong to each state.

use embedded_hal::delay::DelayNs;

use crate::config::{BRINGUP_DWELL_MS, POWER_UP_DELAY_MS, ROTATION_DWELL_MS};
use crate::control::rotation::Rotation;
use crate::drivers::max2870::Max2870;
use crate::hal::lines::LineDriver;
use crate::types::FrequencyProfile;

/// Control loop state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlState {
    /// Power-up: bring-up profile not applied yet
    #[default]
    Bringup,
    /// Cycling the rotation
    Rotate {
        /// Index of the next profile to apply
        next: usize,
    },
}

impl ControlState {
    /// State after completing the work of this one
    ///
    /// `len` is the rotation length and must be non-zero.
    #[must_use]
    pub const fn advance(self, len: usize) -> Self {
        match self {
            Self::Bringup => Self::Rotate { next: 0 },
            Self::Rotate { next } => Self::Rotate {
                next: (next + 1) % len,
            },
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ControlState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bringup => defmt::write!(f, "BRINGUP"),
            Self::Rotate { next } => defmt::write!(f, "ROTATE(next={})", next),
        }
    }
}

/// Waits performed by the control loop around profile changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopTiming {
    /// Wait before the bring-up profile
    pub power_up_ms: u32,
    /// Dwell on the bring-up profile
    pub bringup_dwell_ms: u32,
    /// Dwell on each rotation profile
    pub dwell_ms: u32,
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            power_up_ms: POWER_UP_DELAY_MS,
            bringup_dwell_ms: BRINGUP_DWELL_MS,
            dwell_ms: ROTATION_DWELL_MS,
        }
    }
}

/// Main control loop
pub struct ControlLoop<L, D> {
    synth: Max2870<L, D>,
    bringup_profile: FrequencyProfile,
    rotation: Rotation,
    timing: LoopTiming,
    state: ControlState,
}

impl<L: LineDriver, D: DelayNs> ControlLoop<L, D> {
    /// Create a loop in the BRINGUP state
    ///
    /// The platform must already be initialised with the lines idle.
    #[must_use]
    pub fn new(
        synth: Max2870<L, D>,
        bringup_profile: FrequencyProfile,
        rotation: Rotation,
        timing: LoopTiming,
    ) -> Self {
        Self {
            synth,
            bringup_profile,
            rotation,
            timing,
            state: ControlState::Bringup,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Profiles cycled in ROTATE
    #[must_use]
    pub const fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Run BRINGUP and move to ROTATE. Does nothing once rotating.
    pub fn bringup(&mut self) {
        if self.state != ControlState::Bringup {
            warn!("bring-up requested in {}", self.state);
            return;
        }
        self.synth.wait_ms(self.timing.power_up_ms);
        info!("bring-up profile {}", self.bringup_profile.name());
        self.synth.apply_profile(&self.bringup_profile);
        self.synth.wait_ms(self.timing.bringup_dwell_ms);
        self.transition();
    }

    /// Apply the next rotation profile and dwell on it
    ///
    /// Runs bring-up first if it has not happened yet. Returns the profile
    /// that was applied.
    pub fn rotate_step(&mut self) -> FrequencyProfile {
        let next = match self.state {
            ControlState::Rotate { next } => next,
            ControlState::Bringup => {
                self.bringup();
                0
            }
        };
        let profile = *self.rotation.get_wrapped(next);
        info!("profile {} ({}/{})", profile.name(), next + 1, self.rotation.len());
        self.synth.apply_profile(&profile);
        self.synth.wait_ms(self.timing.dwell_ms);
        self.transition();
        profile
    }

    /// Perform the work of the current state
    pub fn step(&mut self) {
        match self.state {
            ControlState::Bringup => self.bringup(),
            ControlState::Rotate { .. } => {
                self.rotate_step();
            }
        }
    }

    /// Run forever
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Synthesizer driver
    pub const fn synth(&self) -> &Max2870<L, D> {
        &self.synth
    }

    /// Give back the synthesizer driver
    pub fn release(self) -> Max2870<L, D> {
        self.synth
    }

    fn transition(&mut self) {
        let next = self.state.advance(self.rotation.len());
        debug!("state {} -> {}", self.state, next);
        self.state = next;
    }
}
