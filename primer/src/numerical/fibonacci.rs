//! Fibonacci numbers over `u128`.
//!
//! Variables:
//!   F(n) : u128 — the n-th Fibonacci number
//!
//! Equations:
//!   F(0) = 0, F(1) = 1
//!   F(n) = F(n-1) + F(n-2)
//!
//! F(186) is the largest Fibonacci number that fits in a `u128`.

use crate::error::MathError;

pub const MAX_FIBONACCI_INPUT: u32 = 186;

fn overflow(n: u32) -> MathError {
    MathError::Overflow {
        function: "fibonacci",
        n,
        max: MAX_FIBONACCI_INPUT,
    }
}

/// Iterative fibonacci, O(n) time and O(1) space.
pub fn fibonacci(n: u32) -> Result<u128, MathError> {
    if n > MAX_FIBONACCI_INPUT {
        return Err(overflow(n));
    }
    if n == 0 {
        return Ok(0);
    }
    // (prev, curr) = (F(k-1), F(k)); stop at k = n so F(n+1) is never formed
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev.checked_add(curr).ok_or_else(|| overflow(n))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Memo table that keeps every value computed so far.
///
/// The table only ever grows; a query for `n` extends it up to `n` and every
/// later query at or below the high-water mark is a plain index.
#[derive(Debug, Clone)]
pub struct FibonacciMemo {
    table: Vec<u128>,
}

impl Default for FibonacciMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciMemo {
    pub fn new() -> Self {
        Self { table: vec![0, 1] }
    }

    pub fn get(&mut self, n: u32) -> Result<u128, MathError> {
        if n > MAX_FIBONACCI_INPUT {
            return Err(overflow(n));
        }
        let n = n as usize;
        while self.table.len() <= n {
            let len = self.table.len();
            let next = self.table[len - 1]
                .checked_add(self.table[len - 2])
                .ok_or_else(|| overflow(n as u32))?;
            self.table.push(next);
        }
        Ok(self.table[n])
    }

    /// Number of cached entries, always at least 2.
    pub fn cached(&self) -> usize {
        self.table.len()
    }
}
