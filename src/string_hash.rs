use crate::error::{KeyError, Result};

pub(crate) const SEED: u64 = 104_395_301;
// prime, roughly u64::MAX / 700
const MULTIPLIER: u64 = 26_544_357_894_361_247;
const FAST_MULTIPLIER: u64 = 37;

/// Hashes a non-empty byte string into a 64-bit key, tuned for a low collision
/// rate on short text.
///
/// No two lowercase ASCII words of five letters share a key. The constants
/// are part of the key format: keys persisted by one version stay valid in the
/// next.
pub fn hash_str<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<u64> {
    let bytes = input.as_ref();
    if bytes.is_empty() {
        return Err(KeyError::invalid("hash_str", "input is empty"));
    }
    Ok(finalize(bytes.iter().fold(SEED, |h, &b| mix(h, b))))
}

/// Kernighan and Pike's multiply-by-37 string hash.
///
/// Faster than [`hash_str`] with noticeably more collisions; reduce it modulo
/// a prime bucket count before use.
pub fn hash_str_fast<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<u64> {
    let bytes = input.as_ref();
    if bytes.is_empty() {
        return Err(KeyError::invalid("hash_str_fast", "input is empty"));
    }
    Ok(bytes.iter().fold(0u64, |h, &b| {
        h.wrapping_mul(FAST_MULTIPLIER).wrapping_add(u64::from(b))
    }))
}

#[inline]
pub(crate) fn mix(h: u64, b: u8) -> u64 {
    h.wrapping_add(u64::from(b).wrapping_mul(MULTIPLIER) ^ (h >> 7))
}

#[inline]
pub(crate) fn finalize(h: u64) -> u64 {
    h ^ (h << 37)
}
