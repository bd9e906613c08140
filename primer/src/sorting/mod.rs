pub mod bubble_sort;

pub use bubble_sort::bubble_sort;
