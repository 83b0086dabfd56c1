// crates/wick-core/src/sched/tick.rs

use std::sync::atomic::{AtomicBool, Ordering};

/// The one value shared between the timer context and the main loop.
///
/// Single byte, single flag, no queue: a raise while a tick is already
/// pending coalesces, so a slow compute cycle skips ticks instead of
/// bursting catch-up updates.
#[derive(Debug, Default)]
pub struct TickFlag {
    pending: AtomicBool,
}

impl TickFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Timer context: mark a tick pending.
    #[inline]
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Main loop: observe-and-clear. Clearing before the compute cycle
    /// starts is what keeps the next tick from being swallowed.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Overflow down-counter owned by the timer context.
///
/// Fires when the counter hits zero and reloads it, so one tick lands
/// every `reload + 1` overflows, the first one immediately. Nothing
/// here touches the pipeline; the timer context stays minimal.
#[derive(Clone, Copy, Debug)]
pub struct TickCounter {
    reload: u8,
    cycles: u8,
}

impl TickCounter {
    pub fn new(reload: u8) -> Self {
        Self { reload, cycles: 0 }
    }

    /// Called once per hardware overflow. Returns true when a tick
    /// should be raised.
    #[inline]
    pub fn on_overflow(&mut self) -> bool {
        if self.cycles == 0 {
            self.cycles = self.reload;
            true
        } else {
            self.cycles -= 1;
            false
        }
    }
}
