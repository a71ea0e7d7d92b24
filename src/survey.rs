//! Collision surveys over streams of keys.

use ahash::AHashSet;

/// Counts keys that repeat an earlier key in the stream.
pub fn count_collisions<I: IntoIterator<Item = u64>>(keys: I) -> usize {
    let keys = keys.into_iter();
    let mut seen = AHashSet::with_capacity(keys.size_hint().0);
    keys.filter(|&key| !seen.insert(key)).count()
}

/// Every word of `len` lowercase ASCII letters, in lexicographic order.
///
/// Yields nothing for `len == 0`.
pub fn lowercase_words(len: usize) -> LowercaseWords {
    LowercaseWords {
        next: (len > 0).then(|| vec![b'a'; len]),
    }
}

pub struct LowercaseWords {
    next: Option<Vec<u8>>,
}

impl Iterator for LowercaseWords {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let word = self.next.take()?;
        let mut succ = word.clone();
        // odometer increment from the last letter
        for pos in (0..succ.len()).rev() {
            if succ[pos] < b'z' {
                succ[pos] += 1;
                self.next = Some(succ);
                break;
            }
            succ[pos] = b'a';
        }
        Some(word)
    }
}
