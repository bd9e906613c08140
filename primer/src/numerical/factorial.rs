//! Factorial over `u128` with checked multiplication.
//!
//! Equations:
//!   0! = 1! = 1
//!   n! = n * (n-1)!
//!
//! 34! is the largest factorial that fits in a `u128`.

use crate::error::MathError;

pub const MAX_FACTORIAL_INPUT: u32 = 34;

pub fn factorial(n: u32) -> Result<u128, MathError> {
    (2..=u128::from(n))
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(MathError::Overflow {
            function: "factorial",
            n,
            max: MAX_FACTORIAL_INPUT,
        })
}
