// crates/wick-cli/src/cmd/run.rs

use std::io::Write;

use clap::Args;
use wick_core::profile::format;
use wick_core::Engine;
use wick_hal::nvm::{boot_seed, FileSeedStore};
use wick_hal::pwm::PwmRegister;
use wick_hal::runtime::run_flicker;

use crate::cmd::sim::{builtin_profile, hex16, RateFamily};
use crate::io::profile_file;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Profile path (.wkp). If omitted, uses a built-in default.
    #[arg(long)]
    pub profile: Option<String>,

    /// Coefficient family when no profile file is given.
    #[arg(long, value_enum, default_value_t = RateFamily::R100)]
    pub rate: RateFamily,

    /// Persistent seed word, advanced once at startup.
    #[arg(long, default_value = "wick.seed")]
    pub seed_file: String,

    /// Frames to produce; 0 runs until interrupted.
    #[arg(long, default_value_t = 0)]
    pub frames: u64,
}

/// Streams each duty write as a JSON line the moment the tick lands.
/// A register write cannot fail, so a broken pipe is swallowed here and
/// surfaces as the process going quiet.
struct JsonlPwm<W: Write> {
    w: W,
}

impl<W: Write> PwmRegister for JsonlPwm<W> {
    fn set_duty(&mut self, duty: u8) {
        let _ = writeln!(self.w, "{{\"duty\":{duty}}}");
        let _ = self.w.flush();
    }
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut profile = match &args.profile {
        Some(path) => profile_file::load_wkp(path)?,
        None => builtin_profile(args.rate),
    };

    let mut store = FileSeedStore::new(&args.seed_file);
    profile.seed = boot_seed(&mut store)?;

    let reload = profile.tick_reload()?;
    eprintln!("--- run ---");
    eprintln!("profile_id      = {}", hex16(&format::profile_id_16(&profile)));
    eprintln!("seed            = {:#010x}", profile.seed);
    eprintln!("update_rate_hz  = {}", profile.filter.update_rate_hz);
    eprintln!("tick_reload     = {}", reload);

    let mut engine = Engine::new(profile)?;
    let mut sink = JsonlPwm {
        w: std::io::stdout().lock(),
    };

    let budget = if args.frames == 0 {
        None
    } else {
        Some(args.frames)
    };
    let report = run_flicker(&mut engine, &mut sink, budget)?;

    eprintln!("frames          = {}", report.frames);
    Ok(())
}
