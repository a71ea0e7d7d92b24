//! Deterministic 64-bit hash keys for hash tables
//!
//! Maps byte strings, 2-D integer points and 64-bit floats to `u64` keys,
//! picks prime bucket counts to reduce them into, and converts integers to and
//! from gray codes. Every function is pure: the same input always yields the
//! same key, with no seed and no shared state, so keys may be persisted.
//!
//! The hashes are not cryptographic. They are tuned for a low collision rate
//! on short text and on coordinates in `0..=20000`.
//!
//! ```
//! use hashkey::{hash_str, Buckets};
//!
//! let buckets = Buckets::with_min_capacity(1000)?;
//! assert_eq!(buckets.count(), 1009);
//! let idx = buckets.index(hash_str("ballynamoney")?);
//! assert!(idx < 1009);
//! # Ok::<(), hashkey::KeyError>(())
//! ```

mod error;
pub use error::{KeyError, Result};

mod prime;
pub use prime::{is_prime, is_prime_legacy, next_prime, Primality, LARGEST_U32_PRIME};

mod string_hash;
pub use string_hash::{hash_str, hash_str_fast};

mod value_hash;
pub use value_hash::{hash_float, hash_point};

mod gray;
pub use gray::{gray_decode, gray_encode};

mod bucket;
pub use bucket::Buckets;

mod build_hasher;
pub use build_hasher::{BuildStrKeyHasher, StrKeyHasher};

mod report;
pub use report::{ErrorReporter, Keyer, LogReporter};

pub mod survey;
