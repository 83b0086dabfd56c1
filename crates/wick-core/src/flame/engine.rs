// crates/wick-core/src/flame/engine.rs

use crate::error::Result;
use crate::validate::validate_profile;

use crate::filter::biquad::{self, BiquadState};
use crate::flame::intensity::intensity;
use crate::noise::normal::{self, BITS_PER_SAMPLE};
use crate::profile::profile::Profile;
use crate::rng::lfsr::LfsrState;
use crate::stats::counters::Counters;

/// The flicker pipeline: bit source -> shaper -> filter -> mapper.
///
/// Owns all mutable run state. The generator state is seeded once at
/// construction and never reset; the filter's delay terms start at zero
/// and persist across every frame.
pub struct Engine {
    pub profile: Profile,
    pub stats: Counters,
    lfsr: LfsrState,
    filt: BiquadState,
    baseline: i16,
    scale: i16,
}

impl Engine {
    pub fn new(profile: Profile) -> Result<Self> {
        validate_profile(&profile)?;

        Ok(Self {
            lfsr: LfsrState::from_seed(profile.seed),
            filt: BiquadState::default(),
            stats: Counters::default(),
            baseline: profile.baseline(),
            scale: profile.intensity_scale(),
            profile,
        })
    }

    /// Run one full compute cycle and return the duty value for it.
    /// Exactly one call per observed scheduler tick.
    pub fn next_frame(&mut self) -> u8 {
        let (s, x) = normal::normal(self.lfsr);
        self.lfsr = s;

        let (f, y) = biquad::filter(self.filt, &self.profile.filter, x);
        self.filt = f;

        self.stats.frames += 1;
        self.stats.bits += BITS_PER_SAMPLE;

        intensity(y, self.baseline, self.scale)
    }

    /// Offline path: collect `n` frames back to back. Produces the same
    /// stream as the real-time path, which only changes the cadence.
    pub fn run_frames(&mut self, n: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(n as usize);
        for _ in 0..n {
            out.push(self.next_frame());
        }
        out
    }
}
