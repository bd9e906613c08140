/// Binary search over a slice sorted ascending.
///
/// Probes `mid = (low + high) / 2` over the inclusive window `[low, high]`
/// and returns the first probed index whose element equals `target`. With
/// duplicates this is not necessarily the leftmost or rightmost match.
/// The window is kept half-open internally as `[lo, hi)` with `hi = high + 1`
/// so it never underflows.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let m = lo + (hi - lo - 1) / 2;
        match arr[m].cmp(target) {
            std::cmp::Ordering::Equal => return Some(m),
            std::cmp::Ordering::Less => lo = m + 1,
            std::cmp::Ordering::Greater => hi = m,
        }
    }
    None
}
