// crates/wick-hal/src/runtime.rs

use std::sync::Arc;
use std::thread;

use crate::error::Result;
use crate::pwm::PwmRegister;
use crate::timer::OverflowTimer;
use wick_core::sched::tick::TickFlag;
use wick_core::Engine;

#[derive(Clone, Copy, Debug, Default)]
pub struct RunReport {
    pub frames: u64,
}

/// The two-state control loop: park until a tick is observed, clear the
/// flag, run exactly one compute-and-output cycle, go back to waiting.
///
/// Parking is the low-power wait analog; the timer thread unparks on
/// every fired tick, and spurious wakeups just re-check the flag. If a
/// compute cycle overruns a tick period the coalesced flag yields one
/// cycle, not a burst.
///
/// `frames` of None runs until the process is killed, matching a
/// control loop with no terminal state.
pub fn run_flicker(
    engine: &mut Engine,
    sink: &mut dyn PwmRegister,
    frames: Option<u64>,
) -> Result<RunReport> {
    if frames == Some(0) {
        return Ok(RunReport::default());
    }

    let reload = engine.profile.tick_reload()?;
    let flag = Arc::new(TickFlag::new());

    let timer = OverflowTimer::spawn(
        engine.profile.overflow_rate_mhz,
        reload,
        flag.clone(),
        thread::current(),
    );

    let mut report = RunReport::default();
    loop {
        while !flag.take() {
            thread::park();
        }

        sink.set_duty(engine.next_frame());
        report.frames += 1;

        if let Some(n) = frames {
            if report.frames >= n {
                break;
            }
        }
    }

    drop(timer);
    Ok(report)
}
