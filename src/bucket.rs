use crate::error::Result;
use crate::prime::next_prime;
use crate::string_hash::hash_str;
use crate::value_hash::{hash_float, hash_point};

/// Prime bucket count for a hash table, and the reduction of keys into it.
///
/// Storage, resizing and collision chains stay with the caller; this only
/// picks the count and maps keys to indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buckets {
    count: u32,
}

impl Buckets {
    /// Chooses the smallest prime bucket count greater than `min_capacity`.
    pub fn with_min_capacity(min_capacity: u32) -> Result<Self> {
        let count = next_prime(min_capacity)?;
        log::debug!("sized {} buckets for capacity {}", count, min_capacity);
        Ok(Self { count })
    }

    /// Number of buckets
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Reduces a key to a bucket index
    #[inline]
    pub fn index(&self, key: u64) -> usize {
        (key % u64::from(self.count)) as usize
    }

    /// Bucket count for a table grown to hold at least `factor` times as many
    /// buckets as this one.
    pub fn grow(&self, factor: u32) -> Result<Self> {
        Self::with_min_capacity(self.count.saturating_mul(factor))
    }

    #[inline]
    pub fn index_str<B: AsRef<[u8]> + ?Sized>(&self, input: &B) -> Result<usize> {
        Ok(self.index(hash_str(input)?))
    }

    #[inline]
    pub fn index_point(&self, x: i32, y: i32) -> usize {
        self.index(hash_point(x, y))
    }

    #[inline]
    pub fn index_float(&self, val: f64) -> usize {
        self.index(hash_float(val))
    }
}
