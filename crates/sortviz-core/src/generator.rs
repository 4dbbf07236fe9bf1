//! Random input data and the frozen copy runs are reset from.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::error::SortvizError;

/// Length of the demo sequence unless configured otherwise.
pub const DEFAULT_LEN: usize = 100;
/// Smallest generated value unless configured otherwise.
pub const DEFAULT_LOW: i32 = 1;
/// Largest generated value unless configured otherwise.
pub const DEFAULT_HIGH: i32 = 99;

/// Produces fixed-length sequences of values drawn uniformly from an
/// inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator<T> {
    len: usize,
    low: T,
    high: T,
}

impl Default for SequenceGenerator<i32> {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

impl<T> SequenceGenerator<T>
where
    T: SampleUniform + PartialOrd + Copy + fmt::Display,
{
    /// Create a generator. Fails when `low > high`.
    pub fn new(len: usize, low: T, high: T) -> Result<Self, SortvizError> {
        if low > high {
            return Err(SortvizError::invalid_range(low, high));
        }
        Ok(Self { len, low, high })
    }

    /// Number of elements per sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether sequences come out empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inclusive bounds.
    #[must_use]
    pub const fn bounds(&self) -> (T, T) {
        (self.low, self.high)
    }

    /// Draw a fresh sequence.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T> {
        (0..self.len)
            .map(|_| rng.gen_range(self.low..=self.high))
            .collect()
    }
}

/// Immutable snapshot of a generated sequence.
///
/// Cloning is cheap and shares the same storage. There is no way to mutate
/// the contents; [`Frozen::thaw`] hands out an owned working copy instead.
#[derive(Debug, PartialEq, Eq)]
pub struct Frozen<T>(Arc<[T]>);

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Clone> Frozen<T> {
    /// Freeze a copy of `values`.
    #[must_use]
    pub fn new(values: &[T]) -> Self {
        Self(Arc::from(values))
    }

    /// Fresh working copy.
    #[must_use]
    pub fn thaw(&self) -> Vec<T> {
        self.0.to_vec()
    }

    /// Overwrite `working` with the frozen contents, reusing its allocation.
    pub fn restore(&self, working: &mut Vec<T>) {
        working.clear();
        working.extend_from_slice(&self.0);
    }
}

impl<T> From<Vec<T>> for Frozen<T> {
    fn from(values: Vec<T>) -> Self {
        Self(Arc::from(values))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}
