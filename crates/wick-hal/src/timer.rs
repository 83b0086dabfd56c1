// crates/wick-hal/src/timer.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle, Thread};
use std::time::Duration;

use wick_core::sched::tick::{TickCounter, TickFlag};

/// Free-running overflow source: a thread that stands in for the
/// hardware timer interrupt. It owns the down-counter outright; the
/// shared tick flag is the only state it publishes, and it never calls
/// into the pipeline.
pub struct OverflowTimer {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl OverflowTimer {
    /// Spawn the overflow thread. `wake` is unparked on every fired
    /// tick so the main loop can sleep between ticks.
    pub fn spawn(
        overflow_rate_mhz: u32,
        reload: u8,
        flag: Arc<TickFlag>,
        wake: Thread,
    ) -> OverflowTimer {
        debug_assert!(overflow_rate_mhz > 0);
        // mHz -> ns: 1e12 / rate.
        let period = Duration::from_nanos(1_000_000_000_000 / overflow_rate_mhz.max(1) as u64);

        let stop = Arc::new(AtomicBool::new(false));
        let stopped = stop.clone();

        let handle = thread::spawn(move || {
            let mut counter = TickCounter::new(reload);
            while !stopped.load(Ordering::Relaxed) {
                thread::sleep(period);
                if counter.on_overflow() {
                    flag.raise();
                    wake.unpark();
                }
            }
        });

        OverflowTimer {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for OverflowTimer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
