pub mod binary_search;

pub use binary_search::binary_search;
