// crates/wick-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use wick_core::profile::format as profile_format;
use wick_core::Profile;

/// Load a .wkp profile file and decode it into a Profile struct.
pub fn load_wkp(path: &str) -> Result<Profile> {
    let bytes = std::fs::read(path).with_context(|| format!("read profile {path}"))?;
    let profile =
        profile_format::decode(&bytes).with_context(|| format!("decode profile {path}"))?;
    Ok(profile)
}

/// Save a Profile as a .wkp file.
pub fn save_wkp(path: &str, profile: &Profile) -> Result<()> {
    let bytes = profile_format::encode(profile);
    std::fs::write(path, bytes).with_context(|| format!("write profile {path}"))?;
    Ok(())
}
