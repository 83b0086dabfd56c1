use wick_hal::nvm::{boot_seed, FileSeedStore, MemSeedStore, SeedStore};
use wick_hal::HalError;

#[test]
fn first_boot_advances_factory_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wick.seed");

    let mut store = FileSeedStore::new(&path);
    assert_eq!(store.load().unwrap(), None);

    // Factory word is 1; the first boot hands out 2 and persists it.
    let live = boot_seed(&mut store).unwrap();
    assert_eq!(live, 2);
    assert_eq!(store.load().unwrap(), Some(2));
}

#[test]
fn each_boot_gets_a_fresh_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wick.seed");

    let mut store = FileSeedStore::new(&path);
    let a = boot_seed(&mut store).unwrap();

    // Fresh handle, as a new process would have.
    let mut store = FileSeedStore::new(&path);
    let b = boot_seed(&mut store).unwrap();

    assert_ne!(a, b);
    assert_eq!(b, a + 1);
}

#[test]
fn wraparound_skips_zero() {
    let mut store = MemSeedStore::default();
    store.store(u32::MAX).unwrap();
    let live = boot_seed(&mut store).unwrap();
    assert_eq!(live, 1);
    assert_ne!(live, 0);
}

#[test]
fn corrupt_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wick.seed");

    let mut store = FileSeedStore::new(&path);
    store.store(0xDEAD_BEEF).unwrap();

    // Flip a payload byte under the crc.
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[1] ^= 0xFF;
    std::fs::write(&path, &bytes).unwrap();

    match store.load() {
        Err(HalError::SeedFormat(msg)) => assert!(msg.contains("crc"), "{msg}"),
        other => panic!("expected seed format error, got {other:?}"),
    }
}

#[test]
fn short_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wick.seed");
    std::fs::write(&path, [1, 2, 3]).unwrap();

    let mut store = FileSeedStore::new(&path);
    assert!(matches!(store.load(), Err(HalError::SeedFormat(_))));
}

#[test]
fn mem_store_boots_like_the_file_store() {
    let mut store = MemSeedStore::default();
    assert_eq!(boot_seed(&mut store).unwrap(), 2);
    assert_eq!(boot_seed(&mut store).unwrap(), 3);
}
