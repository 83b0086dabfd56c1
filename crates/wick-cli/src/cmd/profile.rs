// crates/wick-cli/src/cmd/profile.rs

use clap::Args;
use wick_core::profile::format;
use wick_core::validate::validate_profile;

use crate::cmd::sim::{builtin_profile, hex16, RateFamily};
use crate::io::profile_file;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile path (.wkp) to inspect; built-in default if omitted.
    #[arg(long)]
    pub r#in: Option<String>,

    /// Coefficient family when no file is given.
    #[arg(long, value_enum, default_value_t = RateFamily::R100)]
    pub rate: RateFamily,

    /// Save the profile to this .wkp path.
    #[arg(long)]
    pub save: Option<String>,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    let profile = match &args.r#in {
        Some(path) => profile_file::load_wkp(path)?,
        None => builtin_profile(args.rate),
    };

    validate_profile(&profile)?;

    eprintln!("--- profile ---");
    eprintln!("profile_id      = {}", hex16(&format::profile_id_16(&profile)));
    eprintln!("version         = {}", profile.version);
    eprintln!("seed            = {:#010x}", profile.seed);
    eprintln!("wind            = {}", profile.wind);
    eprintln!("baseline        = {}", profile.baseline());
    eprintln!("intensity_scale = {}", profile.intensity_scale());
    eprintln!("overflow_mhz    = {}", profile.overflow_rate_mhz);
    eprintln!("update_rate_hz  = {}", profile.filter.update_rate_hz);
    eprintln!("normalization   = {}", profile.filter.normalization);
    eprintln!("tick_reload     = {}", profile.tick_reload()?);
    eprintln!(
        "a               = [{}, {}]",
        profile.filter.a1, profile.filter.a2
    );
    eprintln!(
        "b               = [{}, {}, {}]",
        profile.filter.b0, profile.filter.b1, profile.filter.b2
    );

    if let Some(path) = &args.save {
        profile_file::save_wkp(path, &profile)?;
        eprintln!("saved           = {path}");
    }

    Ok(())
}
