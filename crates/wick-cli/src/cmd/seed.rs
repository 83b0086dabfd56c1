// crates/wick-cli/src/cmd/seed.rs

use clap::{Args, ValueEnum};
use wick_hal::nvm::{boot_seed, FileSeedStore, SeedStore, FACTORY_SEED};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SeedOp {
    /// Print the stored word without touching it.
    Show,
    /// Write a fresh record (factory value unless --value is given).
    Init,
    /// Perform one boot advance-and-save and print the fresh word.
    Advance,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Seed store path.
    #[arg(long, default_value = "wick.seed")]
    pub file: String,

    #[arg(long, value_enum, default_value_t = SeedOp::Show)]
    pub op: SeedOp,

    /// Word to write with --op init.
    #[arg(long)]
    pub value: Option<u32>,
}

pub fn run(args: SeedArgs) -> anyhow::Result<()> {
    let mut store = FileSeedStore::new(&args.file);

    match args.op {
        SeedOp::Show => match store.load()? {
            Some(word) => println!("{word:#010x}"),
            None => println!("uninitialized"),
        },
        SeedOp::Init => {
            let word = args.value.unwrap_or(FACTORY_SEED);
            store.store(word)?;
            println!("{word:#010x}");
        }
        SeedOp::Advance => {
            let fresh = boot_seed(&mut store)?;
            println!("{fresh:#010x}");
        }
    }

    Ok(())
}
