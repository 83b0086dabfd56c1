// crates/wick-cli/src/cmd/sim.rs

use clap::{Args, ValueEnum};
use wick_core::profile::defaults::{default_profile, profile_60hz};
use wick_core::profile::format;
use wick_core::{Engine, Profile};

use crate::io::{bin, jsonl, profile_file};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RateFamily {
    /// 100 Hz update family (default)
    R100,
    /// 60 Hz update family
    R60,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SimOutFmt {
    /// JSON lines: {"duty":N}
    Jsonl,
    /// Raw bytes, one per frame
    Bin,
}

#[derive(Args, Debug)]
pub struct SimArgs {
    /// Profile path (.wkp). If omitted, uses a built-in default.
    #[arg(long)]
    pub profile: Option<String>,

    /// Save the effective profile (after overrides) to this .wkp path.
    #[arg(long)]
    pub save_profile: Option<String>,

    /// Coefficient family when no profile file is given.
    #[arg(long, value_enum, default_value_t = RateFamily::R100)]
    pub rate: RateFamily,

    /// Override the profile seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Override the wind constant.
    #[arg(long)]
    pub wind: Option<u8>,

    /// Frames to produce.
    #[arg(long, default_value_t = 256)]
    pub frames: u64,

    /// Output file; stdout if omitted.
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = SimOutFmt::Jsonl)]
    pub fmt: SimOutFmt,
}

pub fn builtin_profile(rate: RateFamily) -> Profile {
    match rate {
        RateFamily::R100 => default_profile(),
        RateFamily::R60 => profile_60hz(),
    }
}

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let mut profile = match &args.profile {
        Some(path) => profile_file::load_wkp(path)?,
        None => builtin_profile(args.rate),
    };

    if let Some(seed) = args.seed {
        profile.seed = seed;
    }
    if let Some(wind) = args.wind {
        profile.wind = wind;
    }

    if let Some(path) = &args.save_profile {
        profile_file::save_wkp(path, &profile)?;
    }

    let mut engine = Engine::new(profile)?;
    let frames = engine.run_frames(args.frames);

    match (&args.out, args.fmt) {
        (Some(path), SimOutFmt::Jsonl) => jsonl::write_frames_file(path, &frames)?,
        (Some(path), SimOutFmt::Bin) => bin::write_frames_file(path, &frames)?,
        (None, SimOutFmt::Jsonl) => jsonl::write_frames_stdout(&frames)?,
        (None, SimOutFmt::Bin) => anyhow::bail!("refusing to write raw bytes to stdout; use --out"),
    }

    let id = format::profile_id_16(&profile);
    let min = frames.iter().min().copied().unwrap_or(0);
    let max = frames.iter().max().copied().unwrap_or(0);

    eprintln!("--- sim ---");
    eprintln!("profile_id      = {}", hex16(&id));
    eprintln!("frames          = {}", engine.stats.frames);
    eprintln!("bits_drawn      = {}", engine.stats.bits);
    eprintln!("duty_min        = {}", min);
    eprintln!("duty_max        = {}", max);

    Ok(())
}

pub fn hex16(id: &[u8; 16]) -> String {
    let mut s = String::with_capacity(32);
    for b in id {
        s.push_str(&format!("{b:02x}"));
    }
    s
}
