//! Benchmark utilities for the ParaScan engine
pub mod utils {
    use rand::Rng;

    /// Uniform random values in a small band so running totals stay far from
    /// i64 overflow at every benchmarked size.
    pub fn generate_random_values(count: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| rng.gen_range(-1_000..=1_000)).collect()
    }
}
