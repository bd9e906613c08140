//! Queue — unbounded FIFO backed by a growable ring buffer.
//!
//! Variables:
//!   buf : VecDeque<T>  — front of the queue at buf[0]
//!
//! Equations:
//!   enqueue(x): buf' = buf ++ [x]          O(1) amortised
//!   dequeue():  x = buf[0],  buf' = buf[1..] O(1), None when empty

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    buf: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { buf: VecDeque::new() }
    }

    pub fn enqueue(&mut self, val: T) {
        self.buf.push_back(val);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.buf.front()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Elements from front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.buf.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { buf: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Queue(")?;
        f.debug_list().entries(self.buf.iter()).finish()?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_on_empty_is_none() {
        let mut q: Queue<u8> = Queue::new();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn interleaved_operations_keep_fifo_order() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        q.enqueue(4);
        let drained: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(drained, vec![2, 3, 4]);
        assert!(q.is_empty());
    }

    #[test]
    fn display_lists_front_to_back() {
        let q: Queue<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(q.to_string(), r#"Queue(["a", "b"])"#);
    }
}
