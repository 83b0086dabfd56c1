// crates/wick-cli/src/cmd/analyze.rs

use clap::Args;
use wick_core::noise::normal::normal;
use wick_core::rng::lfsr::LfsrState;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Shaper samples to draw.
    #[arg(long, default_value_t = 100_000)]
    pub samples: u64,

    /// Generator seed.
    #[arg(long, default_value_t = 1)]
    pub seed: u32,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.samples > 0, "need at least one sample");

    let mut s = LfsrState::from_seed(args.seed);
    let mut bins = [0u64; 16];
    let mut sum = 0i64;
    let mut sum_sq = 0i64;
    let mut lo = i8::MAX;
    let mut hi = i8::MIN;

    for _ in 0..args.samples {
        let (next, v) = normal(s);
        s = next;
        bins[((v as i16 + 128) / 16) as usize] += 1;
        sum += v as i64;
        sum_sq += (v as i64) * (v as i64);
        lo = lo.min(v);
        hi = hi.max(v);
    }

    let n = args.samples as f64;
    let mean = sum as f64 / n;
    let std = (sum_sq as f64 / n - mean * mean).sqrt();

    eprintln!("--- analyze ---");
    eprintln!("samples         = {}", args.samples);
    eprintln!("seed            = {:#010x}", args.seed);
    eprintln!("mean            = {:.4}", mean);
    eprintln!("std             = {:.4}", std);
    eprintln!("min/max         = {}/{}", lo, hi);
    eprintln!("--- bins (width 16, from -128) ---");
    for (k, count) in bins.iter().enumerate() {
        let mass = *count as f64 / n;
        eprintln!(
            "[{:>4}..{:>4}]  {:>8}  {:.4}",
            -128 + 16 * k as i32,
            -113 + 16 * k as i32,
            count,
            mass
        );
    }

    Ok(())
}
