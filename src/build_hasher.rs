use std::hash::{BuildHasher, Hasher};

use crate::string_hash::{finalize, mix, SEED};

/// Streaming [`Hasher`] over the quality string hash.
///
/// Writing the bytes of a string in one or several calls and then calling
/// `finish` gives the same key as [`hash_str`](crate::hash_str). Keys hashed
/// through `Hash` impls differ, since std appends a terminator or length
/// prefix to `str` and slices.
#[derive(Debug, Clone, Copy)]
pub struct StrKeyHasher {
    state: u64,
}

impl Default for StrKeyHasher {
    fn default() -> Self {
        Self { state: SEED }
    }
}

impl Hasher for StrKeyHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = bytes.iter().fold(self.state, |h, &b| mix(h, b));
    }

    #[inline]
    fn finish(&self) -> u64 {
        finalize(self.state)
    }
}

/// [`BuildHasher`] handing out [`StrKeyHasher`]s, for deterministic
/// `HashMap`/`HashSet` layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildStrKeyHasher;

impl BuildHasher for BuildStrKeyHasher {
    type Hasher = StrKeyHasher;

    #[inline]
    fn build_hasher(&self) -> StrKeyHasher {
        StrKeyHasher::default()
    }
}
