//! Bubble sort — repeated adjacent swaps, O(n²) comparisons worst case.
//!
//! Pass i bubbles the largest of arr[..n-i] into position n-i-1, so the
//! suffix arr[n-i..] is sorted and final after pass i. Only strictly
//! greater neighbours are swapped, which keeps the sort stable. A pass with
//! no swap means the prefix is already ordered and the sort stops.

pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
