//! Frequency profile table
//!
//! Register words generated with the MAX2870 EV kit software for a
//! transverter local oscillator. The loader never inspects these values;
//! to add a frequency, paste the six words the tool produces (R0 first).

use crate::types::FrequencyProfile;

/// 700 MHz test output, applied once at bring-up
pub const TEST_700M: FrequencyProfile = FrequencyProfile::new(
    "TEST_700M",
    [0x8070_0000, 0x2003_03E9, 0x0001_0042, 0x0000_0133, 0x61BF_42FC, 0x0140_0005],
);

/// 1150 MHz LO (1295 MHz with a 145 MHz IF), integer-N mode
pub const LO_1150M_INT: FrequencyProfile = FrequencyProfile::new(
    "LO_1150M_INT",
    [0x805C_0000, 0x8003_03E9, 0x0001_0A42, 0x0000_0133, 0x61AF_42FC, 0x0140_0005],
);

/// 1150 MHz LO (1295 MHz with a 145 MHz IF)
pub const LO_1150M: FrequencyProfile = FrequencyProfile::new(
    "LO_1150M",
    [0x005C_0000, 0x2003_03E9, 0x0001_0A42, 0x0000_0133, 0x61AF_42FC, 0x0140_0005],
);

/// 1995 MHz LO (2427 MHz with a 432 MHz IF)
pub const LO_1995M: FrequencyProfile = FrequencyProfile::new(
    "LO_1995M",
    [0x004F_8258, 0x2003_03E9, 0x0001_0C42, 0x0000_0133, 0x619F_42FC, 0x0140_0005],
);

/// 5328 MHz LO (5760 MHz with a 432 MHz IF)
pub const LO_5328M: FrequencyProfile = FrequencyProfile::new(
    "LO_5328M",
    [0x006A_8078, 0x2003_03E9, 0x0001_0E42, 0x0000_0133, 0x618F_42FC, 0x0140_0005],
);

/// Every profile known to the firmware
pub static ALL: [FrequencyProfile; 5] = [TEST_700M, LO_1150M_INT, LO_1150M, LO_1995M, LO_5328M];

/// Profiles cycled after bring-up, in order
pub const DEFAULT_ROTATION: [FrequencyProfile; 3] = [LO_1150M, LO_1995M, LO_5328M];

/// Look up a profile by name
#[must_use]
pub fn by_name(name: &str) -> Option<&'static FrequencyProfile> {
    ALL.iter().find(|p| p.name() == name)
}
