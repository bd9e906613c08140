//! Call logging as an explicit higher-order wrapper.
//!
//! `logged` returns a closure that emits a `calling` event with the
//! arguments, runs the wrapped function, emits a `returned` event with the
//! result, and hands the result back untouched. Multi-argument functions are
//! wrapped by taking their arguments as a tuple.

use std::fmt::Debug;

use tracing::info;

pub fn logged<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Debug,
    R: Debug,
    F: Fn(A) -> R,
{
    move |args: A| {
        info!(function = name, args = ?args, "calling");
        let result = f(args);
        info!(function = name, result = ?result, "returned");
        result
    }
}

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
