//! Gray code conversion.
//!
//! Successive integers map to gray codes that differ in exactly one bit.

/// Converts a binary integer to its gray code.
#[inline]
pub fn gray_encode(val: u32) -> u32 {
    val ^ (val >> 1)
}

/// Converts a gray code back to the binary integer it encodes.
#[inline]
pub fn gray_decode(mut val: u32) -> u32 {
    let mut shift = 1;
    while shift < u32::BITS {
        val ^= val >> shift;
        shift <<= 1;
    }
    val
}
