// src/generator.rs
use crate::errors::{PracticeError, Result};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Closed integer range `[min, max]` with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if !Self::can_start(min, max) {
            return Err(PracticeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Whether a problem may be generated from these bounds.
    pub fn can_start(min: i64, max: i64) -> bool {
        min < max
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[min, max]`, inclusive on both ends.
    fn random_range(&self, min: i64, max: i64) -> i64;
}

/// Production source backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_range(&self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Replays a fixed sequence, cycling, clamped into the requested range.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<i64>,
    index: AtomicUsize,
}

impl FixedRandom {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for FixedRandom {
    fn random_range(&self, min: i64, max: i64) -> i64 {
        if self.values.is_empty() {
            return min;
        }
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(min, max)
    }
}

/// Builds the unsorted list posed as the challenge input.
///
/// Each of the `count` elements is drawn independently from `range`. The
/// output carries no ordering guarantee.
pub fn generate_unsorted_list(
    range: Range,
    count: usize,
    rng: &dyn RandomSource,
) -> Result<Vec<i64>> {
    if count == 0 {
        return Err(PracticeError::EmptyList);
    }
    Ok((0..count)
        .map(|_| rng.random_range(range.min(), range.max()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_requires_min_below_max() {
        assert!(Range::new(1, 2).is_ok());
        assert!(matches!(
            Range::new(5, 5),
            Err(PracticeError::InvalidRange { min: 5, max: 5 })
        ));
        assert!(Range::new(10, -10).is_err());
        assert!(!Range::can_start(3, 3));
    }

    #[test]
    fn test_generated_list_has_requested_length_and_bounds() {
        let cases = [(-100, 100, 10), (0, 1, 50), (-5, -1, 1), (1, 1000, 100)];
        for (min, max, count) in cases {
            let range = Range::new(min, max).unwrap();
            let list = generate_unsorted_list(range, count, &ThreadRandom).unwrap();
            assert_eq!(list.len(), count);
            assert!(list.iter().all(|v| range.contains(*v)), "{:?}", list);
        }
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let range = Range::new(i64::MIN, i64::MAX).unwrap();
        let list = generate_unsorted_list(range, 20, &ThreadRandom).unwrap();
        assert_eq!(list.len(), 20);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let range = Range::new(0, 10).unwrap();
        let err = generate_unsorted_list(range, 0, &ThreadRandom).unwrap_err();
        assert!(matches!(err, PracticeError::EmptyList));
        assert_eq!(err.to_string(), "List length must be at least 1");
    }

    #[test]
    fn test_fixed_random_cycles_and_clamps() {
        let rng = FixedRandom::new(vec![3, 50, -50]);
        let range = Range::new(-10, 10).unwrap();
        let list = generate_unsorted_list(range, 4, &rng).unwrap();
        assert_eq!(list, vec![3, 10, -10, 3]);
    }
}
