// crates/wick-core/src/profile/defaults.rs

use crate::filter::biquad::{BUTTER_100HZ, BUTTER_60HZ};
use crate::profile::profile::Profile;

/// Reference timer: phase-correct 8-bit PWM off a 9.6 MHz clock with a
/// 1:8 prescaler overflows at 2343.75 Hz.
pub const OVERFLOW_RATE_MHZ: u32 = 2_343_750;

/// Wind constant the flame was tuned around.
pub const DEFAULT_WIND: u8 = 84;

pub fn default_profile() -> Profile {
    Profile {
        version: 1,
        seed: 0xF11C_CAFE, // deterministic default seed
        wind: DEFAULT_WIND,
        overflow_rate_mhz: OVERFLOW_RATE_MHZ,
        filter: BUTTER_100HZ,
    }
}

/// The 60 Hz coefficient family with otherwise default knobs.
pub fn profile_60hz() -> Profile {
    Profile {
        filter: BUTTER_60HZ,
        ..default_profile()
    }
}
