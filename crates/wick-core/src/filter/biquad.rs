// crates/wick-core/src/filter/biquad.rs

/// Two retained delay terms of the direct-form-II biquad. Zero at boot,
/// then carried across every call for the life of the engine.
///
/// The binary exponent of each term is fixed by the coefficient family
/// (see the per-tap shift schedule in `BiquadParams`); the two taps do
/// not share an exponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BiquadState {
    pub d1: i16,
    pub d2: i16,
}

/// One coefficient family of the second-order fixed-point low-pass.
///
/// Coefficient mantissas are annotated `bits:exp` — significant bits and
/// (negated) base-2 exponent, exactly the bookkeeping the shift schedule
/// encodes. The schedule aligns every product with the accumulator it
/// feeds; mixing exponents across taps breaks the stability margin, so
/// the shifts travel with the coefficients as one unit.
///
/// Selecting a family is a configuration-time choice (a profile field);
/// the update path itself is branch-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiquadParams {
    /// Update rate this family was designed for.
    pub update_rate_hz: u16,
    /// Expected output amplitude mantissa; feeds the intensity scale.
    pub normalization: i16,

    pub a1: i16,
    pub a2: i16,
    pub b0: i16,
    pub b1: i16,
    pub b2: i16,

    /// Right shift on b0*x feeding the output accumulator.
    pub bx_shift_y: u8,
    /// Right shift on b1*x feeding d1.
    pub bx_shift_d1: u8,
    /// Right shift on b2*x feeding d2.
    pub bx_shift_d2: u8,
    /// Output prescale before the a1 product.
    pub y_shift_a1: u8,
    /// Left realignment of the a1 product into d1.
    pub a1_shift_up: u8,
    /// Output prescale before the a2 product.
    pub y_shift_a2: u8,
    /// Left realignment of the a2 product into d2.
    pub a2_shift_up: u8,
    /// Right shift on the old d2 feeding d1.
    pub d2_shift_d1: u8,
}

/// 60 Hz update rate, 4 Hz cutoff Butterworth. Output mean 0, std about
/// 0.53 full scale (roughly 4342 in mantissa at 15:13).
///
/// All three b mantissas coincide at these exponents; that collapse is a
/// general feature of digital Butterworth filters and the shift schedule
/// leans on it.
pub const BUTTER_60HZ: BiquadParams = BiquadParams {
    update_rate_hz: 60,
    normalization: 4313,

    a1: -7,  // 3:3   round((-0.87727063) * (1 << 3))
    a2: 10,  // 4:5   round(  0.31106039  * (1 << 5))
    b0: 111, // 7:10  round(  0.10844744  * (1 << 10))
    b1: 111, // 7:9   round(  0.21689488  * (1 << 9))
    b2: 111, // 7:10  round(  0.10844744  * (1 << 10))

    bx_shift_y: 2,
    bx_shift_d1: 1,
    bx_shift_d2: 1,
    y_shift_a1: 3,
    a1_shift_up: 0,
    y_shift_a2: 4,
    a2_shift_up: 0,
    d2_shift_d1: 1,
};

/// 100 Hz update rate with a lower cutoff; visually equivalent flame,
/// numerically distinct response. The higher rate puts Nyquist at 50 Hz,
/// which matters little to the eye but needed the cutoff pulled down
/// below the designer's advertised corner to land in the right place.
pub const BUTTER_100HZ: BiquadParams = BiquadParams {
    update_rate_hz: 100,
    normalization: 10000,

    a1: -117, // 7:6   round((-1.82269493) * (1 << 6))
    a2: 107,  // 7:7   round(  0.83718165  * (1 << 7))
    b0: 119,  // 7:15  round(  0.00362168  * (1 << 15))
    b1: 119,  // 7:14  round(  0.00724336  * (1 << 14))
    b2: 119,  // 7:15  round(  0.00362168  * (1 << 15))

    bx_shift_y: 6,
    bx_shift_d1: 5,
    bx_shift_d2: 6,
    y_shift_a1: 8,
    a1_shift_up: 2,
    y_shift_a2: 8,
    a2_shift_up: 1,
    d2_shift_d1: 0,
};

/// One filter update: output from the scaled input plus the first delay
/// term, then d1 from the input term, the a1 feedback term and the old
/// d2, then d2 from the input term and the a2 feedback term. The order
/// is load-bearing: d1 must read the pre-update d2.
///
/// All right shifts are arithmetic (floor, sign-preserving); output and
/// both delay terms wrap to 16 bits at the same points the arithmetic is
/// designed around, so intermediates run in i32 and truncate on store.
pub fn filter(s: BiquadState, p: &BiquadParams, x: i8) -> (BiquadState, i16) {
    let x = x as i32;

    let y = (((p.b0 as i32 * x) >> p.bx_shift_y) + s.d1 as i32) as i16;

    let a1_term = (p.a1 as i32 * (y as i32 >> p.y_shift_a1)) << p.a1_shift_up;
    let d1 = ((p.b1 as i32 * x >> p.bx_shift_d1) - a1_term + (s.d2 as i32 >> p.d2_shift_d1)) as i16;

    let a2_term = (p.a2 as i32 * (y as i32 >> p.y_shift_a2)) << p.a2_shift_up;
    let d2 = ((p.b2 as i32 * x >> p.bx_shift_d2) - a2_term) as i16;

    (BiquadState { d1, d2 }, y)
}
