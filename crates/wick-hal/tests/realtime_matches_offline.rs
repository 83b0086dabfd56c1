use wick_core::filter::biquad::{BiquadParams, BUTTER_100HZ};
use wick_core::profile::defaults::default_profile;
use wick_core::{Engine, Profile};
use wick_hal::pwm::{LatchPwm, PwmRegister};
use wick_hal::runtime::run_flicker;

/// Same coefficients, sped up so the test finishes quickly: 1 kHz
/// update off a 100 kHz overflow source (reload 100, ~1 ms ticks).
fn fast_profile() -> Profile {
    Profile {
        overflow_rate_mhz: 100_000_000,
        filter: BiquadParams {
            update_rate_hz: 1000,
            ..BUTTER_100HZ
        },
        ..default_profile()
    }
}

#[test]
fn realtime_stream_is_byte_identical_to_offline() {
    let p = fast_profile();

    let mut offline = Engine::new(p).unwrap();
    let want = offline.run_frames(40);

    let mut engine = Engine::new(p).unwrap();
    let mut pwm = LatchPwm::default();
    let report = run_flicker(&mut engine, &mut pwm, Some(40)).unwrap();

    // The scheduler only sets the cadence; the values must not move.
    assert_eq!(report.frames, 40);
    assert_eq!(pwm.history, want);
    assert_eq!(pwm.last, *want.last().unwrap());
}

#[test]
fn one_write_per_tick() {
    let mut engine = Engine::new(fast_profile()).unwrap();
    let mut pwm = LatchPwm::default();

    let report = run_flicker(&mut engine, &mut pwm, Some(10)).unwrap();
    assert_eq!(report.frames, 10);
    assert_eq!(pwm.history.len(), 10);
    assert_eq!(engine.stats.frames, 10);
}

#[test]
fn latch_keeps_last_write() {
    let mut pwm = LatchPwm::default();
    pwm.set_duty(10);
    pwm.set_duty(200);
    assert_eq!(pwm.last, 200);
    assert_eq!(pwm.history, vec![10, 200]);
}
