use crate::error::{Result, WickError};
use crate::profile::profile::Profile;

pub fn validate_profile(p: &Profile) -> Result<()> {
    // Mapper invariant: wind drives both the baseline and the scale
    // divisor; 0 would put the division off a cliff.
    if p.wind == 0 {
        return Err(WickError::Validation("wind must be non-zero".into()));
    }

    if p.filter.normalization <= 0 {
        return Err(WickError::Validation(
            "filter normalization must be positive".into(),
        ));
    }

    // Scale must survive as a positive i16 divisor.
    let scale = 2 * p.filter.normalization as i32 / p.wind as i32;
    if scale < 1 {
        return Err(WickError::Validation(
            "normalization too small for wind: intensity scale underflows".into(),
        ));
    }
    if scale > i16::MAX as i32 {
        return Err(WickError::Validation(
            "normalization too large for wind: intensity scale overflows".into(),
        ));
    }

    if p.overflow_rate_mhz == 0 {
        return Err(WickError::Validation(
            "timer overflow rate must be non-zero".into(),
        ));
    }

    // Shift schedule sanity: every exponent must stay inside a 16-bit
    // word or the fixed-point bookkeeping is meaningless.
    let shifts = [
        p.filter.bx_shift_y,
        p.filter.bx_shift_d1,
        p.filter.bx_shift_d2,
        p.filter.y_shift_a1,
        p.filter.a1_shift_up,
        p.filter.y_shift_a2,
        p.filter.a2_shift_up,
        p.filter.d2_shift_d1,
    ];
    if shifts.iter().any(|&s| s >= 16) {
        return Err(WickError::Validation(
            "filter shift exponent out of range".into(),
        ));
    }

    // A zero or oversized reload is a configuration error; catch it here
    // rather than in the run loop.
    p.tick_reload()?;

    Ok(())
}
