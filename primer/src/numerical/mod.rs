//! Pure integer functions: factorial, fibonacci, primality.

pub mod factorial;
pub mod fibonacci;
pub mod primality;

pub use factorial::{factorial, MAX_FACTORIAL_INPUT};
pub use fibonacci::{fibonacci, FibonacciMemo, MAX_FIBONACCI_INPUT};
pub use primality::is_prime;
