use wick_core::error::WickError;
use wick_core::profile::defaults::{default_profile, profile_60hz};
use wick_core::profile::format;

#[test]
fn encode_decode_roundtrip() {
    for p in [default_profile(), profile_60hz()] {
        let bytes = format::encode(&p);
        let back = format::decode(&bytes).unwrap();
        assert_eq!(back, p);
    }
}

#[test]
fn bad_magic_rejected() {
    let mut bytes = format::encode(&default_profile());
    bytes[0] = b'X';
    match format::decode(&bytes) {
        Err(WickError::ProfileFormat(msg)) => assert!(msg.contains("magic"), "{msg}"),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn corruption_is_detected() {
    let clean = format::encode(&default_profile());

    // Flip one body byte: both trailers disagree, hash checked first.
    let mut bytes = clean.clone();
    bytes[10] ^= 0x40;
    assert!(format::decode(&bytes).is_err());

    // Flip a crc byte: body hash over it breaks too.
    let mut bytes = clean.clone();
    let crc_at = clean.len() - 20;
    bytes[crc_at] ^= 0x01;
    assert!(format::decode(&bytes).is_err());

    // Truncation.
    assert!(format::decode(&clean[..clean.len() - 3]).is_err());
    assert!(format::decode(&clean[..10]).is_err());
    assert!(format::decode(&[]).is_err());
}

#[test]
fn decoded_profile_drives_the_engine() {
    let p = default_profile();
    let bytes = format::encode(&p);
    let back = format::decode(&bytes).unwrap();

    let mut a = wick_core::Engine::new(p).unwrap();
    let mut b = wick_core::Engine::new(back).unwrap();
    assert_eq!(a.run_frames(64), b.run_frames(64));
}
