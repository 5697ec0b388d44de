use rand::Rng;

/// Source of the random draws behind stripe heights, shifts and mirrors.
///
/// Every `rand::Rng` is a `RandomSource`, so `rand::rng()` works for normal
/// use and a seeded `StdRng` gives repeatable output.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive. Callers make
    /// sure `min <= max`.
    fn int_in(&mut self, min: u32, max: u32) -> u32;

    fn boolean(&mut self) -> bool {
        self.int_in(0, 1) == 1
    }
}

impl<R: Rng> RandomSource for R {
    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.random_range(min..=max)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::VecDeque;

    /// Replays a fixed list of draws, clamped into the requested range.
    /// Falls back to `min` once the script runs out.
    pub(crate) struct Scripted(pub VecDeque<u32>);

    impl Scripted {
        pub(crate) fn new(values: &[u32]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn int_in(&mut self, min: u32, max: u32) -> u32 {
            self.0.pop_front().unwrap_or(min).clamp(min, max)
        }
    }

    #[test]
    fn test_int_in_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.int_in(10, 30);
            assert!((10..=30).contains(&v));
        }
    }

    #[test]
    fn test_int_in_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.int_in(5, 5), 5);
    }

    #[test]
    fn test_boolean_hits_both_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<bool> = (0..200).map(|_| rng.boolean()).collect();
        assert!(draws.iter().any(|b| *b));
        assert!(draws.iter().any(|b| !*b));
    }

    #[test]
    fn test_scripted_boolean() {
        let mut rng = Scripted::new(&[1, 0, 7]);
        assert!(rng.boolean());
        assert!(!rng.boolean());
        // clamped into [0, 1]
        assert!(rng.boolean());
        assert!(!rng.boolean());
    }
}
