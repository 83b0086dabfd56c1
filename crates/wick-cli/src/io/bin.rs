// crates/wick-cli/src/io/bin.rs

use anyhow::Context;

/// Write a frame stream as raw bytes, one per frame.
pub fn write_frames_file(path: &str, frames: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, frames).with_context(|| format!("write frames bin: {path}"))?;
    Ok(())
}
