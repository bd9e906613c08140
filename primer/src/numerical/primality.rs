/// Trial division by every `i` in `[2, floor(sqrt(n))]`.
///
/// The loop bound is `i <= n / i`, which cannot overflow for any `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
