// crates/wick-core/src/noise/normal.rs

use crate::rng::lfsr::{self, LfsrState};

/// Bits consumed from the generator per sample: 16 center bits + two
/// 4-bit fuzz draws.
pub const BITS_PER_SAMPLE: u64 = 24;

/// Approximate a normal distribution with mean 0 and std 32.
///
/// A binomial(16, 0.5) variate is built from 16 single-bit draws, each
/// contributing 16 when set, on a running value starting at -128. That
/// folds the sum onto [-128, 112] with mean 0 and sd 32. A symmetric
/// triangular fuzz term (difference of two independent 4-bit draws,
/// -15..=15) then linearly interpolates the binomial steps.
///
/// The final addition wraps mod 256: overflow blends the two tails
/// together instead of clipping them. Wrapping is the contract here;
/// the intensity mapper is the place that saturates.
pub fn normal(s: LfsrState) -> (LfsrState, i8) {
    let mut s = s;
    let mut center: i8 = -128;
    for _ in 0..16 {
        let (next, bit) = lfsr::step(s);
        s = next;
        center = center.wrapping_add((bit as i8) << 4);
    }

    let (s, hi) = lfsr::draw(s, 4);
    let (s, lo) = lfsr::draw(s, 4);
    let fuzz = (hi as i8) - (lo as i8);

    (s, center.wrapping_add(fuzz))
}
