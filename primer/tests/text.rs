use primer::text::{random_string, random_string_with};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn has_requested_length_and_only_letters() {
    for len in [1, 8, 64] {
        let s = random_string(len);
        assert_eq!(s.len(), len);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()), "{s}");
    }
}

#[test]
fn seeded_rng_is_reproducible_and_varies_by_seed() {
    let a = random_string_with(&mut StdRng::seed_from_u64(7), 32);
    let b = random_string_with(&mut StdRng::seed_from_u64(7), 32);
    let c = random_string_with(&mut StdRng::seed_from_u64(8), 32);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
