use crate::error::{KeyError, Result};
use crate::prime::{self, Primality};
use crate::{gray, string_hash, value_hash};

/// Receives a human-readable report for every rejected input.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter {
    fn report(&self, err: &KeyError);
}

/// Reports through the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, err: &KeyError) {
        log::error!("Error in {}", err);
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &R {
    fn report(&self, err: &KeyError) {
        (**self).report(err)
    }
}

/// The keying operations bound to an error reporter.
///
/// Each method behaves like the free function of the same name, and hands any
/// failure to the reporter before returning it.
#[derive(Debug, Clone, Default)]
pub struct Keyer<R = LogReporter> {
    reporter: R,
}

impl<R: ErrorReporter> Keyer<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    fn checked<T>(&self, res: Result<T>) -> Result<T> {
        if let Err(err) = &res {
            self.reporter.report(err);
        }
        res
    }

    pub fn hash_str<B: AsRef<[u8]> + ?Sized>(&self, input: &B) -> Result<u64> {
        self.checked(string_hash::hash_str(input))
    }

    pub fn hash_str_fast<B: AsRef<[u8]> + ?Sized>(&self, input: &B) -> Result<u64> {
        self.checked(string_hash::hash_str_fast(input))
    }

    pub fn hash_point(&self, x: i32, y: i32) -> u64 {
        value_hash::hash_point(x, y)
    }

    pub fn hash_float(&self, val: f64) -> u64 {
        value_hash::hash_float(val)
    }

    pub fn is_prime(&self, n: u64) -> Result<Primality> {
        self.checked(prime::is_prime(n))
    }

    pub fn is_prime_legacy(&self, n: u64) -> Result<Primality> {
        self.checked(prime::is_prime_legacy(n))
    }

    pub fn next_prime(&self, start: u32) -> Result<u32> {
        self.checked(prime::next_prime(start))
    }

    pub fn gray_encode(&self, val: u32) -> u32 {
        gray::gray_encode(val)
    }

    pub fn gray_decode(&self, val: u32) -> u32 {
        gray::gray_decode(val)
    }
}
