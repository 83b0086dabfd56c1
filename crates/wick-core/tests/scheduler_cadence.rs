use wick_core::profile::defaults::{default_profile, profile_60hz};
use wick_core::sched::tick::{TickCounter, TickFlag};

#[test]
fn one_fire_per_reload_plus_one_overflows() {
    let mut c = TickCounter::new(3);
    let mut fired = Vec::new();
    for overflow in 0..100u32 {
        if c.on_overflow() {
            fired.push(overflow);
        }
    }
    assert_eq!(fired.len(), 25);
    assert_eq!(&fired[..4], &[0, 4, 8, 12]);
    assert!(fired.windows(2).all(|w| w[1] - w[0] == 4));
}

#[test]
fn flag_coalesces_and_clears() {
    let flag = TickFlag::new();
    assert!(!flag.take());

    flag.raise();
    flag.raise();
    assert!(flag.is_raised());

    // Two raises, one observation: ticks are never queued.
    assert!(flag.take());
    assert!(!flag.take());
    assert!(!flag.is_raised());
}

#[test]
fn reload_values_for_reference_timer() {
    // 2343.75 Hz overflow: floor to 23 at 100 Hz, 39 at 60 Hz.
    assert_eq!(default_profile().tick_reload().unwrap(), 23);
    assert_eq!(profile_60hz().tick_reload().unwrap(), 39);
}

#[test]
fn bad_reload_is_a_config_error() {
    // Update rate above the overflow rate floors to zero.
    let mut p = default_profile();
    p.overflow_rate_mhz = 50_000;
    assert!(p.tick_reload().is_err());

    // A reload past 255 does not fit the down-counter.
    let mut p = default_profile();
    p.overflow_rate_mhz = 30_000_000;
    assert!(p.tick_reload().is_err());

    let mut p = default_profile();
    p.filter.update_rate_hz = 0;
    assert!(p.tick_reload().is_err());
}
