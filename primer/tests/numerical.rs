//! Integration tests for factorial, fibonacci and primality.

use primer::numerical::{
    factorial, fibonacci, is_prime, FibonacciMemo, MAX_FACTORIAL_INPUT, MAX_FIBONACCI_INPUT,
};
use primer::MathError;

#[test]
fn factorial_matches_table() {
    let expected = [1u128, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(factorial(n as u32), Ok(*want), "factorial({n})");
    }
}

#[test]
fn factorial_reports_overflow() {
    let err = factorial(MAX_FACTORIAL_INPUT + 1).unwrap_err();
    assert_eq!(
        err,
        MathError::Overflow { function: "factorial", n: 35, max: 34 }
    );
    assert!(err.to_string().contains("largest supported input is 34"));
}

#[test]
fn fibonacci_matches_sequence() {
    let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(fibonacci(n as u32), Ok(*want), "fibonacci({n})");
    }
}

#[test]
fn memo_agrees_with_iterative() {
    let mut memo = FibonacciMemo::new();
    // descending first, then ascending, to hit both cold and warm paths
    for n in (0..=MAX_FIBONACCI_INPUT).rev().chain(0..=MAX_FIBONACCI_INPUT) {
        assert_eq!(memo.get(n), fibonacci(n));
    }
}

#[test]
fn largest_fibonacci_input_is_supported() {
    let expected = 332_825_110_087_067_562_321_196_029_789_634_457_848u128;
    assert_eq!(fibonacci(MAX_FIBONACCI_INPUT), Ok(expected));
    assert_eq!(FibonacciMemo::new().get(MAX_FIBONACCI_INPUT), Ok(expected));
}

#[test]
fn fibonacci_overflow_past_186() {
    assert!(matches!(
        fibonacci(187),
        Err(MathError::Overflow { function: "fibonacci", n: 187, max: 186 })
    ));
}

#[test]
fn primality_small_values() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(29));
    let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
    assert_eq!(
        primes,
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
}

#[test]
fn primality_does_not_overflow_at_u64_max() {
    // u64::MAX = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
    assert!(!is_prime(u64::MAX));
}
