// crates/wick-hal/src/nvm.rs

use std::path::PathBuf;

use crate::error::{HalError, Result};
use wick_core::rng::lfsr::advance_seed;

/// Value a store reads as before anything was ever written, matching a
/// factory-programmed seed word.
pub const FACTORY_SEED: u32 = 1;

/// Persistent 32-bit seed word with read-modify-write-once semantics:
/// `boot_seed` is the only intended access pattern, once per process.
pub trait SeedStore {
    /// Current word, or None if the store was never written.
    fn load(&mut self) -> Result<Option<u32>>;
    fn store(&mut self, seed: u32) -> Result<()>;
}

/// Read the stored word, advance it past the previous boot's value
/// (skipping 0 on wrap), write it back, and hand the fresh word to the
/// caller as the live seed. The store is not touched again at runtime.
pub fn boot_seed(store: &mut dyn SeedStore) -> Result<u32> {
    let current = store.load()?.unwrap_or(FACTORY_SEED);
    let fresh = advance_seed(current);
    store.store(fresh)?;
    Ok(fresh)
}

/// EEPROM stand-in: an 8-byte record on disk, seed u32 LE followed by
/// its crc32 LE. A short or mismatched record is surfaced as an error
/// rather than silently re-seeded.
pub struct FileSeedStore {
    path: PathBuf,
}

impl FileSeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedStore for FileSeedStore {
    fn load(&mut self) -> Result<Option<u32>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if bytes.len() != 8 {
            return Err(HalError::SeedFormat(format!(
                "expected 8-byte record, got {}",
                bytes.len()
            )));
        }

        let mut w = [0u8; 4];
        w.copy_from_slice(&bytes[0..4]);
        let seed = u32::from_le_bytes(w);
        w.copy_from_slice(&bytes[4..8]);
        let want = u32::from_le_bytes(w);

        if crc32(&seed.to_le_bytes()) != want {
            return Err(HalError::SeedFormat("crc mismatch".into()));
        }

        Ok(Some(seed))
    }

    fn store(&mut self, seed: u32) -> Result<()> {
        let mut record = [0u8; 8];
        record[0..4].copy_from_slice(&seed.to_le_bytes());
        record[4..8].copy_from_slice(&crc32(&seed.to_le_bytes()).to_le_bytes());
        std::fs::write(&self.path, record)?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemSeedStore {
    word: Option<u32>,
}

impl SeedStore for MemSeedStore {
    fn load(&mut self) -> Result<Option<u32>> {
        Ok(self.word)
    }

    fn store(&mut self, seed: u32) -> Result<()> {
        self.word = Some(seed);
        Ok(())
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
