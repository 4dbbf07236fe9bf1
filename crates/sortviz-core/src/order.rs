//! Sort direction.

use std::fmt;

/// Direction a sequence is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Order {
    /// Both orders, in menu order.
    pub const ALL: [Self; 2] = [Self::Ascending, Self::Descending];

    /// True when `x` belongs strictly before `y`. Equal elements never
    /// precede each other, so ties are never swapped.
    #[inline]
    pub fn precedes<T: PartialOrd>(self, x: &T, y: &T) -> bool {
        match self {
            Self::Ascending => x < y,
            Self::Descending => x > y,
        }
    }

    /// Whether `seq` is sorted in this order.
    pub fn is_sorted<T: PartialOrd>(self, seq: &[T]) -> bool {
        seq.windows(2).all(|w| !self.precedes(&w[1], &w[0]))
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
