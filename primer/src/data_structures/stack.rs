//! Stack — LIFO structure backed by Vec.
//!
//! Variables:
//!   data : Vec<T>  — backing storage, bottom at index 0
//!   N    : usize   — current number of elements = data.len()
//!
//! Equations:
//!   push(x): data[N] = x,  N' = N + 1       O(1) amortised
//!   pop():   N' = N - 1,   returns data[N-1] O(1), None when N = 0
//!   peek():  returns &data[N-1]              O(1), None when N = 0

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { data: Vec::new() } }
    pub fn push(&mut self, val: T)      { self.data.push(val); }
    pub fn pop(&mut self)  -> Option<T> { self.data.pop() }
    pub fn peek(&self) -> Option<&T>    { self.data.last() }
    pub fn is_empty(&self) -> bool      { self.data.is_empty() }
    pub fn len(&self) -> usize          { self.data.len() }

    /// Elements from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.data.iter() }
    pub fn as_slice(&self) -> &[T]                { &self.data }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack({:?})", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_on_empty_is_none() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = Stack::new();
        s.push("x");
        assert_eq!(s.peek(), Some(&"x"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn collects_bottom_to_top() {
        let mut s: Stack<_> = (1..=3).collect();
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.as_slice(), &[1, 2]);
    }
}
