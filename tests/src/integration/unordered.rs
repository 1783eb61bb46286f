//! # Unordered Mode Contract Tests
//!
//! Unordered execution emits an inclusive scan of a chunk-level permutation
//! of the input. For the `+` combiner that contract is fully checkable from
//! the outside:
//!
//! - the output has the input's length;
//! - consecutive differences recover exactly the input multiset (each
//!   difference is one input element, in the permuted order);
//! - the final element is the total sum;
//! - for non-negative inputs the output is non-decreasing.

#[cfg(test)]
mod tests {
    use parascan::telemetry::init_test_tracing;
    use parascan::IntStream;
    use rand::Rng;

    fn random_values(count: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| rng.gen_range(-1_000..=1_000)).collect()
    }

    /// Consecutive differences of an inclusive sum scan, with an implicit
    /// leading zero: recovers the scanned sequence.
    fn deltas(scan: &[i64]) -> Vec<i64> {
        let mut prev = 0;
        scan.iter()
            .map(|&v| {
                let d = v - prev;
                prev = v;
                d
            })
            .collect()
    }

    #[test]
    fn test_unordered_preserves_length() {
        init_test_tracing();
        for n in [0i64, 1, 1_000, 100_000] {
            let out = IntStream::range(0, n)
                .unordered()
                .parallel()
                .prefix_sum()
                .to_vec()
                .unwrap();
            assert_eq!(out.len(), n as usize);
        }
    }

    #[test]
    fn test_unordered_final_element_is_total_sum() {
        init_test_tracing();
        let values = random_values(100_000);
        let total: i64 = values.iter().sum();

        let out = IntStream::from_vec(values)
            .unordered()
            .parallel()
            .prefix_sum()
            .to_vec()
            .unwrap();
        assert_eq!(*out.last().unwrap(), total);
    }

    #[test]
    fn test_unordered_deltas_recover_input_multiset() {
        init_test_tracing();
        let values = random_values(50_000);

        let out = IntStream::from_vec(values.clone())
            .unordered()
            .parallel()
            .prefix_sum()
            .to_vec()
            .unwrap();

        let mut recovered = deltas(&out);
        recovered.sort_unstable();
        let mut expected = values;
        expected.sort_unstable();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn test_unordered_nondecreasing_for_nonnegative_input() {
        init_test_tracing();
        let out = IntStream::range(0, 100_000)
            .unordered()
            .parallel()
            .prefix_sum()
            .to_vec()
            .unwrap();
        for pair in out.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(*out.last().unwrap(), 99_999i64 * 100_000 / 2);
    }

    #[test]
    fn test_unordered_sequential_backend_matches_ordered() {
        init_test_tracing();
        let values = random_values(10_000);
        let ordered = IntStream::from_vec(values.clone())
            .prefix_sum()
            .to_vec()
            .unwrap();
        let unordered = IntStream::from_vec(values)
            .unordered()
            .prefix_sum()
            .to_vec()
            .unwrap();
        assert_eq!(ordered, unordered);
    }
}
