// crates/wick-core/src/rng/lfsr.rs

/// Feedback polynomial for the 32-bit Galois LFSR.
pub const POLY: u32 = 0xA3AC_183C;

/// Live generator state. 0 is the absorbing state and is excluded by
/// construction: `from_seed` and `advance_seed` never produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LfsrState(pub u32);

impl LfsrState {
    /// Build a live state from a raw seed word, skipping 0.
    #[inline]
    pub fn from_seed(raw: u32) -> LfsrState {
        let mut s = raw;
        while s == 0 {
            s = s.wrapping_add(1);
        }
        LfsrState(s)
    }
}

/// Advance the state by one shift. The emitted bit is bit 0 of the
/// pre-shift state; the polynomial is folded in whenever that bit is 1.
#[inline]
pub fn step(s: LfsrState) -> (LfsrState, u8) {
    let bit = (s.0 & 1) as u8;
    let mut next = s.0 >> 1;
    if bit == 1 {
        next ^= POLY;
    }
    (LfsrState(next), bit)
}

/// Draw `bits` (<= 8) successive bits, accumulated most-significant-first.
pub fn draw(s: LfsrState, bits: u8) -> (LfsrState, u8) {
    debug_assert!(bits <= 8);
    let mut s = s;
    let mut x: u8 = 0;
    for _ in 0..bits {
        let (next, bit) = step(s);
        s = next;
        x = (x << 1) | bit;
    }
    (s, x)
}

/// Boot-time advance-and-save value for the persisted seed word.
/// Increments at least once so every boot starts a fresh sequence, and
/// skips 0 on 32-bit wrap-around.
#[inline]
pub fn advance_seed(stored: u32) -> u32 {
    let mut s = stored.wrapping_add(1);
    while s == 0 {
        s = s.wrapping_add(1);
    }
    s
}
