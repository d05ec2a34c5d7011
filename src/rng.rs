/// Mulberry32 pseudo-random generator.
///
/// 32-bit state, advanced once per draw. All arithmetic wraps at 32 bits;
/// this is load-bearing for reproducibility, not an optimization. The same
/// seed always yields the same sequence of floats in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^= t >> 14;
        f64::from(t) / 4_294_967_296.0
    }

    /// Uniform draw in [min, max).
    pub fn rand_between(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}
