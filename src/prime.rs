use crate::error::{KeyError, Result};

/// Largest prime representable in 32 bits.
pub const LARGEST_U32_PRIME: u32 = 4_294_967_291;

/// Outcome of a primality test.
///
/// `factor` is the smallest divisor found for a composite number, and `None`
/// when the number is prime or has no factor greater than 1 (the number 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Primality {
    pub is_prime: bool,
    pub factor: Option<u32>,
}

impl Primality {
    const PRIME: Primality = Primality {
        is_prime: true,
        factor: None,
    };

    fn composite(factor: u32) -> Self {
        Primality {
            is_prime: false,
            factor: Some(factor),
        }
    }
}

/// Tests `n` for primality by trial division.
///
/// Even numbers other than 2 report factor 2. Odd numbers are divided by odd
/// candidates up to and including `floor(sqrt(n))`, so the first divisor found
/// is the smallest prime factor. 1 is not prime and has no factor.
pub fn is_prime(n: u64) -> Result<Primality> {
    if n == 0 {
        return Err(KeyError::invalid("is_prime", "n must be > 0"));
    }
    if n == 1 {
        return Ok(Primality::default());
    }
    if n == 2 {
        return Ok(Primality::PRIME);
    }
    if n % 2 == 0 {
        return Ok(Primality::composite(2));
    }

    // `d <= n / d` keeps the bound exact without overflowing `d * d` near 2^64
    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            // d <= sqrt(u64::MAX) < 2^32
            return Ok(Primality::composite(d as u32));
        }
        d += 2;
    }
    Ok(Primality::PRIME)
}

/// Trial-division test reproducing the historical classification.
///
/// Every even number, 2 included, is reported composite with factor 2. Odd
/// numbers are only divided by odd candidates strictly below the truncated
/// floating point square root, which misclassifies 1 and composites whose
/// smallest factor sits at that bound (9, 15, 25, ...) as prime.
///
/// Use [`is_prime`] unless bucket counts chosen by the old rule have to be
/// reproduced.
pub fn is_prime_legacy(n: u64) -> Result<Primality> {
    if n == 0 {
        return Err(KeyError::invalid("is_prime", "n must be > 0"));
    }
    if n % 2 == 0 {
        return Ok(Primality::composite(2));
    }

    let limit = (n as f64).sqrt() as u64;
    let mut d = 3u64;
    while d < limit {
        if n % d == 0 {
            return Ok(Primality::composite(d as u32));
        }
        d += 2;
    }
    Ok(Primality::PRIME)
}

/// Returns the smallest prime strictly greater than `start`.
///
/// Fails when `start` is 0, or when no prime above `start` fits in 32 bits.
pub fn next_prime(start: u32) -> Result<u32> {
    if start == 0 {
        return Err(KeyError::invalid("next_prime", "start must be > 0"));
    }
    if start >= LARGEST_U32_PRIME {
        return Err(KeyError::invalid(
            "next_prime",
            "no prime above start fits in 32 bits",
        ));
    }

    let mut candidate = start + 1;
    loop {
        if is_prime(u64::from(candidate))?.is_prime {
            log::trace!("next_prime({start}) = {candidate}");
            return Ok(candidate);
        }
        candidate += 1;
    }
}
