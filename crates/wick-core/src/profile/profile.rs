// crates/wick-core/src/profile/profile.rs

use crate::error::{Result, WickError};
use crate::filter::biquad::BiquadParams;

/// Everything needed to reproduce a flicker stream, as plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub version: u16,

    /// Initial live generator state. 0 is sanitized to 1 at engine
    /// construction; when booting from a seed store this field carries
    /// the already-advanced word.
    pub seed: u32,

    /// Wind bias constant. The unlit baseline sits at 255 - wind.
    pub wind: u8,

    /// Hardware timer overflow rate in millihertz. Kept fractional-free
    /// this way: the reference timer runs at 2343.75 Hz.
    pub overflow_rate_mhz: u32,

    /// Coefficient family, chosen at configuration time.
    pub filter: BiquadParams,
}

impl Profile {
    /// Unlit resting duty level.
    #[inline]
    pub fn baseline(&self) -> i16 {
        255 - self.wind as i16
    }

    /// Normalization of filter amplitude into the duty range.
    /// Truncating, same as the mapper's division.
    #[inline]
    pub fn intensity_scale(&self) -> i16 {
        (2 * self.filter.normalization as i32 / self.wind.max(1) as i32) as i16
    }

    /// Down-counter reload value: floor(overflow rate / update rate).
    /// The quantization error this floor introduces is the accepted
    /// cost of decoupling the update rate from compute time.
    pub fn tick_reload(&self) -> Result<u8> {
        let update_mhz = self.filter.update_rate_hz as u32 * 1000;
        if update_mhz == 0 {
            return Err(WickError::Validation("update rate must be non-zero".into()));
        }
        let reload = self.overflow_rate_mhz / update_mhz;
        if reload == 0 {
            return Err(WickError::Validation(
                "update rate exceeds the timer overflow rate".into(),
            ));
        }
        if reload > u8::MAX as u32 {
            return Err(WickError::Validation(
                "tick reload does not fit the 8-bit down-counter".into(),
            ));
        }
        Ok(reload as u8)
    }
}
