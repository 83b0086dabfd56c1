// crates/wick-hal/src/pwm.rs

/// Write-only duty-cycle register. One write per scheduler tick, no
/// read-back; a hardware register write cannot fail, so neither can
/// this.
pub trait PwmRegister {
    fn set_duty(&mut self, duty: u8);
}

/// Register stand-in that latches the last write and keeps the full
/// history so tests and offline tools can inspect the stream.
#[derive(Debug, Default)]
pub struct LatchPwm {
    pub last: u8,
    pub history: Vec<u8>,
}

impl PwmRegister for LatchPwm {
    fn set_duty(&mut self, duty: u8) {
        self.last = duty;
        self.history.push(duty);
    }
}

/// Discards writes; useful when only the cadence is under test.
#[derive(Debug, Default)]
pub struct NullPwm;

impl PwmRegister for NullPwm {
    fn set_duty(&mut self, _duty: u8) {}
}
