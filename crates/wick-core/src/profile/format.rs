// crates/wick-core/src/profile/format.rs

use crate::error::{Result, WickError};
use crate::filter::biquad::BiquadParams;
use crate::profile::checksum::{blake3_16, crc32};
use crate::profile::profile::Profile;

const MAGIC: &[u8; 4] = b"WKP1";

/// Newest layout version this build reads and writes.
pub const FORMAT_VERSION: u16 = 1;

/// Minimal binary-stable format (owned).
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// seed:u32
/// wind:u8
/// overflow_rate_mhz:u32
/// filter: update_rate_hz:u16 normalization:i16
///         a1:i16 a2:i16 b0:i16 b1:i16 b2:i16
///         shifts[8]:u8   (bx_y bx_d1 bx_d2 y_a1 a1_up y_a2 a2_up d2_d1)
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(p: &Profile) -> Vec<u8> {
    let mut b = Vec::with_capacity(64);
    b.extend_from_slice(MAGIC);

    b.extend_from_slice(&p.version.to_le_bytes());
    b.extend_from_slice(&p.seed.to_le_bytes());
    b.push(p.wind);
    b.extend_from_slice(&p.overflow_rate_mhz.to_le_bytes());

    b.extend_from_slice(&p.filter.update_rate_hz.to_le_bytes());
    b.extend_from_slice(&p.filter.normalization.to_le_bytes());
    b.extend_from_slice(&p.filter.a1.to_le_bytes());
    b.extend_from_slice(&p.filter.a2.to_le_bytes());
    b.extend_from_slice(&p.filter.b0.to_le_bytes());
    b.extend_from_slice(&p.filter.b1.to_le_bytes());
    b.extend_from_slice(&p.filter.b2.to_le_bytes());
    b.extend_from_slice(&[
        p.filter.bx_shift_y,
        p.filter.bx_shift_d1,
        p.filter.bx_shift_d2,
        p.filter.y_shift_a1,
        p.filter.a1_shift_up,
        p.filter.y_shift_a2,
        p.filter.a2_shift_up,
        p.filter.d2_shift_d1,
    ]);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<Profile> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(WickError::ProfileFormat("bad magic".into()));
    }
    if bytes.len() < 20 {
        return Err(WickError::ProfileFormat("truncated profile".into()));
    }

    // Verify trailers before reading fields: blake over everything
    // before it, crc over everything before that.
    let hash_at = bytes.len() - 16;
    let mut want_hash = [0u8; 16];
    want_hash.copy_from_slice(&bytes[hash_at..]);
    if blake3_16(&bytes[..hash_at]) != want_hash {
        return Err(WickError::ProfileFormat("hash mismatch".into()));
    }

    let crc_at = hash_at - 4;
    let want_crc = {
        let mut w = [0u8; 4];
        w.copy_from_slice(&bytes[crc_at..hash_at]);
        u32::from_le_bytes(w)
    };
    if crc32(&bytes[..crc_at]) != want_crc {
        return Err(WickError::ProfileFormat("crc mismatch".into()));
    }

    let body = &bytes[..crc_at];
    let mut i = 4usize;

    let version = read_u16(body, &mut i)?;
    if version > FORMAT_VERSION {
        return Err(WickError::ProfileFormat(format!(
            "unsupported version {version}"
        )));
    }

    let seed = read_u32(body, &mut i)?;
    let wind = read_u8(body, &mut i)?;
    let overflow_rate_mhz = read_u32(body, &mut i)?;

    let update_rate_hz = read_u16(body, &mut i)?;
    let normalization = read_i16(body, &mut i)?;
    let a1 = read_i16(body, &mut i)?;
    let a2 = read_i16(body, &mut i)?;
    let b0 = read_i16(body, &mut i)?;
    let b1 = read_i16(body, &mut i)?;
    let b2 = read_i16(body, &mut i)?;

    let bx_shift_y = read_u8(body, &mut i)?;
    let bx_shift_d1 = read_u8(body, &mut i)?;
    let bx_shift_d2 = read_u8(body, &mut i)?;
    let y_shift_a1 = read_u8(body, &mut i)?;
    let a1_shift_up = read_u8(body, &mut i)?;
    let y_shift_a2 = read_u8(body, &mut i)?;
    let a2_shift_up = read_u8(body, &mut i)?;
    let d2_shift_d1 = read_u8(body, &mut i)?;

    if i != body.len() {
        return Err(WickError::ProfileFormat("trailing bytes in body".into()));
    }

    Ok(Profile {
        version,
        seed,
        wind,
        overflow_rate_mhz,
        filter: BiquadParams {
            update_rate_hz,
            normalization,
            a1,
            a2,
            b0,
            b1,
            b2,
            bx_shift_y,
            bx_shift_d1,
            bx_shift_d2,
            y_shift_a1,
            a1_shift_up,
            y_shift_a2,
            a2_shift_up,
            d2_shift_d1,
        },
    })
}

/// Stable 16-byte identifier of a profile's exact contents.
pub fn profile_id_16(p: &Profile) -> [u8; 16] {
    blake3_16(&encode(p))
}

fn read_u8(b: &[u8], i: &mut usize) -> Result<u8> {
    if b.len() < *i + 1 {
        return Err(WickError::ProfileFormat("unexpected eof".into()));
    }
    let v = b[*i];
    *i += 1;
    Ok(v)
}

fn read_u16(b: &[u8], i: &mut usize) -> Result<u16> {
    if b.len() < *i + 2 {
        return Err(WickError::ProfileFormat("unexpected eof".into()));
    }
    let mut w = [0u8; 2];
    w.copy_from_slice(&b[*i..*i + 2]);
    *i += 2;
    Ok(u16::from_le_bytes(w))
}

fn read_i16(b: &[u8], i: &mut usize) -> Result<i16> {
    Ok(read_u16(b, i)? as i16)
}

fn read_u32(b: &[u8], i: &mut usize) -> Result<u32> {
    if b.len() < *i + 4 {
        return Err(WickError::ProfileFormat("unexpected eof".into()));
    }
    let mut w = [0u8; 4];
    w.copy_from_slice(&b[*i..*i + 4]);
    *i += 4;
    Ok(u32::from_le_bytes(w))
}
