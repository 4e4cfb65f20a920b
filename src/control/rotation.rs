//! Profile rotation
//!
//! Fixed-capacity list of profiles the control loop cycles through.

use core::fmt;

use heapless::Vec;

use crate::config::MAX_ROTATION_LEN;
use crate::types::FrequencyProfile;

/// Reasons a rotation cannot be built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationError {
    /// No profiles given
    Empty,
    /// More profiles than [`MAX_ROTATION_LEN`]
    TooLong {
        /// Number of profiles supplied
        len: usize,
    },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rotation has no profiles"),
            Self::TooLong { len } => {
                write!(f, "rotation has {len} profiles, capacity is {MAX_ROTATION_LEN}")
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RotationError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Empty => defmt::write!(f, "Empty"),
            Self::TooLong { len } => defmt::write!(f, "TooLong({})", len),
        }
    }
}

/// Non-empty, ordered list of profiles
#[derive(Clone, Debug)]
pub struct Rotation {
    profiles: Vec<FrequencyProfile, MAX_ROTATION_LEN>,
}

impl Rotation {
    /// Build a rotation from profiles in cycling order
    pub fn new(profiles: &[FrequencyProfile]) -> Result<Self, RotationError> {
        if profiles.is_empty() {
            return Err(RotationError::Empty);
        }
        let profiles = Vec::from_slice(profiles).map_err(|()| RotationError::TooLong {
            len: profiles.len(),
        })?;
        Ok(Self { profiles })
    }

    /// Number of profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Never true for a constructed rotation
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile at `index`, wrapping past the end
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &FrequencyProfile {
        &self.profiles[index % self.profiles.len()]
    }

    /// Profiles in order
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyProfile> {
        self.profiles.iter()
    }
}
