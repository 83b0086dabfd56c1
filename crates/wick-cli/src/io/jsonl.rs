// crates/wick-cli/src/io/jsonl.rs

use anyhow::Context;

/// Write a frame stream as JSONL to a file.
/// Format: {"duty":N}
pub fn write_frames_file(path: &str, frames: &[u8]) -> anyhow::Result<()> {
    let mut s = String::new();
    for f in frames {
        s.push_str(&format!("{{\"duty\":{f}}}\n"));
    }
    std::fs::write(path, s).with_context(|| format!("write frames jsonl: {path}"))?;
    Ok(())
}

/// Write a frame stream as JSONL to stdout.
/// Format: {"duty":N}
pub fn write_frames_stdout(frames: &[u8]) -> anyhow::Result<()> {
    for f in frames {
        println!("{{\"duty\":{f}}}");
    }
    Ok(())
}
