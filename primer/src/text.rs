//! Random ASCII-letter strings.

use rand::Rng;

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws `length` letters uniformly from `a-zA-Z` using `rng`.
pub fn random_string_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ASCII_LETTERS[rng.random_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

pub fn random_string(length: usize) -> String {
    random_string_with(&mut rand::rng(), length)
}
