/// Random number generator (xorshift32)
///
/// Deterministic for a given seed so spawned scenes replay identically.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Integer in `[min, max]`, both ends inclusive
pub fn random_int(state: &mut u32, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    let span = (max as i64 - min as i64 + 1) as u64;
    let roll = xorshift32(state) as u64 % span;
    (min as i64 + roll as i64) as i32
}
