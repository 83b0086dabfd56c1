// crates/wick-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "wick")]
#[command(about = "Candle-flicker LED signal toolbox", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate flicker frames offline (no timer, as fast as possible)
    Sim(cmd::sim::SimArgs),

    /// Drive the flicker loop in real time against a seed file
    Run(cmd::run::RunArgs),

    /// Sample the shaper and audit its distribution
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Seed store tools (show / init / advance)
    Seed(cmd::seed::SeedArgs),

    /// Profile tools (.wkp)
    Profile(cmd::profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Run(args) => cmd::run::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Seed(args) => cmd::seed::run(args),
        Commands::Profile(args) => cmd::profile::run(args),
    }
}
