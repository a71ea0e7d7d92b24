const X_COEFF: f64 = 2_173_249_142.384_9;
const Y_COEFF: f64 = 3_763_193_258.622_7;
const POS_COEFF: f64 = 847_019.667_01;
const NEG_COEFF: f64 = -217_324.916_13;

/// Hashes a 2-D point into a 64-bit key.
///
/// Collision free for every point with `0 <= x, y <= 20000`. Coordinates
/// outside that range still hash, without the guarantee. A negative weighted
/// sum wraps around as a two's complement integer.
#[inline]
pub fn hash_point(x: i32, y: i32) -> u64 {
    let sum = X_COEFF * f64::from(x) + Y_COEFF * f64::from(y);
    if sum >= 0.0 {
        sum as u64
    } else {
        // sums below i64::MIN (both coordinates near i32::MIN) saturate there
        sum as i64 as u64
    }
}

/// Hashes a 64-bit float into a key for bucket reduction.
///
/// Non-negative and negative values are scaled by different constants so
/// `v` and `-v` land apart. NaN maps to 0 and infinities to `u64::MAX`.
#[inline]
pub fn hash_float(val: f64) -> u64 {
    let scaled = if val >= 0.0 {
        POS_COEFF * val
    } else {
        NEG_COEFF * val
    };
    scaled as u64
}
