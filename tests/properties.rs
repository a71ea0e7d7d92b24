use hashkey::survey::{count_collisions, lowercase_words};
use hashkey::{
    gray_decode, gray_encode, hash_float, hash_point, hash_str, hash_str_fast, is_prime,
    is_prime_legacy, next_prime, Buckets, KeyError,
};
use rand::prelude::*;

#[test]
fn deterministic_keys() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let len = rng.random_range(1..64);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        assert_eq!(hash_str(&bytes), hash_str(&bytes));
        assert_eq!(hash_str_fast(&bytes), hash_str_fast(&bytes));

        let (x, y): (i32, i32) = (rng.random(), rng.random());
        assert_eq!(hash_point(x, y), hash_point(x, y));

        let v: f64 = rng.random_range(-1e12..1e12);
        assert_eq!(hash_float(v), hash_float(v));
    }
}

#[test]
fn known_string_keys() {
    // frozen: these values must not change between releases
    assert_eq!(hash_str_fast("hello").unwrap(), 200_180_656);
    assert_eq!(hash_str("hello").unwrap(), 15_089_036_256_785_093_757);
    assert_eq!(hash_str("aJ").unwrap(), 12_895_523_442_591_382_678);
}

#[test]
fn no_collisions_four_letter_words() {
    let keys = lowercase_words(4).map(|w| hash_str(&w).unwrap());
    assert_eq!(count_collisions(keys), 0);
}

#[test]
#[ignore = "hashes 26^5 words; run with --ignored"]
fn no_collisions_five_letter_words() {
    let keys = lowercase_words(5).map(|w| hash_str(&w).unwrap());
    assert_eq!(count_collisions(keys), 0);
}

#[test]
fn fast_hash_collides_more() {
    // 'a' * 37 + 'J' == 'b' * 37 + '%'
    assert_eq!(hash_str_fast("aJ").unwrap(), hash_str_fast("b%").unwrap());
    assert_ne!(hash_str("aJ").unwrap(), hash_str("b%").unwrap());
}

#[test]
fn primality() {
    let two = is_prime_legacy(2).unwrap();
    assert!(!two.is_prime);
    assert_eq!(two.factor, Some(2));
    assert!(is_prime(2).unwrap().is_prime);

    let p = is_prime(97).unwrap();
    assert!(p.is_prime);
    assert_eq!(p.factor, None);

    let c = is_prime(91).unwrap();
    assert!(!c.is_prime);
    assert_eq!(c.factor, Some(7));
    assert_eq!(is_prime_legacy(91).unwrap(), c);
}

#[test]
fn next_prime_values() {
    assert_eq!(next_prime(10).unwrap(), 11);
    assert_eq!(next_prime(7).unwrap(), 11);
    for start in 1..5000u32 {
        let p = next_prime(start).unwrap();
        assert!(p > start);
        assert!(is_prime(u64::from(p)).unwrap().is_prime);
        for between in start + 1..p {
            assert!(!is_prime(u64::from(between)).unwrap().is_prime);
        }
    }
}

#[test]
fn invalid_arguments() {
    for err in [
        is_prime(0).unwrap_err(),
        is_prime_legacy(0).unwrap_err(),
        hash_str("").unwrap_err(),
        hash_str_fast("").unwrap_err(),
        next_prime(0).unwrap_err(),
    ] {
        assert!(matches!(err, KeyError::InvalidArgument { .. }));
    }
    assert!(Buckets::with_min_capacity(0).is_err());
}

#[test]
fn value_hashes_accept_any_magnitude() {
    for (x, y) in [(i32::MIN, i32::MAX), (i32::MAX, i32::MIN), (-1, -1), (20000, 20000)] {
        let _ = hash_point(x, y);
    }
    for v in [f64::MIN, f64::MAX, f64::MIN_POSITIVE, -0.0, f64::NAN, f64::INFINITY] {
        let _ = hash_float(v);
    }
}

#[test]
fn gray_round_trip_and_adjacency() {
    let mut rng = rand::rng();
    let mut samples: Vec<u32> = (0..50_000).map(|_| rng.random()).collect();
    samples.extend([0, 1, u32::MAX - 1, u32::MAX]);
    for v in samples {
        assert_eq!(gray_decode(gray_encode(v)), v);
        if v < u32::MAX {
            assert_eq!((gray_encode(v) ^ gray_encode(v + 1)).count_ones(), 1);
        }
    }
}

#[test]
fn bucket_table_flow() {
    let buckets = Buckets::with_min_capacity(500).unwrap();
    assert_eq!(buckets.count(), 503);
    let mut table: Vec<Vec<(i32, i32)>> = vec![Vec::new(); buckets.count() as usize];
    for x in 0..100 {
        for y in 0..100 {
            table[buckets.index_point(x, y)].push((x, y));
        }
    }
    assert_eq!(table.iter().map(Vec::len).sum::<usize>(), 10_000);
    assert!(table[buckets.index_point(42, 17)].contains(&(42, 17)));
}
