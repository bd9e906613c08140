//! # Primer
//!
//! Classic algorithms and containers, organized by category.
//!
//! ## Modules
//!
//! - `numerical` – Factorial, fibonacci (iterative and memoized), primality
//! - `data_structures` – LIFO stack and FIFO queue
//! - `shapes` – `Shape` capability with rectangle and circle variants
//! - `sorting` – Bubble sort
//! - `searching` – Binary search
//! - `text` – Random ASCII-letter strings
//! - `instrument` – Call-logging wrapper
//! - `persist` – JSON save/load
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use primer::sorting::bubble_sort;
//! use primer::searching::binary_search;
//!
//! let mut v = vec![5, 2, 9, 1, 5, 6];
//! bubble_sort(&mut v);
//! assert_eq!(v, vec![1, 2, 5, 5, 6, 9]);
//! assert_eq!(binary_search(&v, &9), Some(5));
//! ```

pub mod data_structures;
pub mod error;
pub mod instrument;
pub mod numerical;
pub mod persist;
pub mod searching;
pub mod shapes;
pub mod sorting;
pub mod text;

pub use error::{MathError, PersistError, ShapeError};
