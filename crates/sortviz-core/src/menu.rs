//! The numbered algorithm menu.
//!
//! ```text
//!  1-5   bubble, selection, insertion, quick, merge (ascending)
//!  6-10  the same five, descending
//!  0     quit
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::SortvizError;
use crate::order::Order;
use crate::sort::Algorithm;

/// A demo run: which algorithm, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunSpec {
    pub algorithm: Algorithm,
    pub order: Order,
}

impl RunSpec {
    #[must_use]
    pub const fn new(algorithm: Algorithm, order: Order) -> Self {
        Self { algorithm, order }
    }
}

impl fmt::Display for RunSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.algorithm, self.order)
    }
}

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Quit,
    Run(RunSpec),
}

impl Selection {
    /// Highest option number.
    pub const MAX_OPTION: u8 = 10;

    /// Every entry, in display order (runs first, quit last).
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::MAX_OPTION)
            .chain(std::iter::once(0))
            .filter_map(Self::from_option)
    }

    /// Look up a menu number.
    #[must_use]
    pub fn from_option(option: u8) -> Option<Self> {
        if option == 0 {
            return Some(Self::Quit);
        }
        let index = usize::from(option - 1);
        let order = Order::ALL.get(index / Algorithm::ALL.len())?;
        let algorithm = Algorithm::ALL[index % Algorithm::ALL.len()];
        Some(Self::Run(RunSpec::new(algorithm, *order)))
    }

    /// The number this entry is chosen by.
    #[must_use]
    pub fn option(self) -> u8 {
        match self {
            Self::Quit => 0,
            Self::Run(spec) => {
                let algorithm = Algorithm::ALL
                    .iter()
                    .position(|a| *a == spec.algorithm)
                    .unwrap_or(0);
                let order = Order::ALL
                    .iter()
                    .position(|o| *o == spec.order)
                    .unwrap_or(0);
                (order * Algorithm::ALL.len() + algorithm + 1) as u8
            }
        }
    }

    /// Menu line text without the number.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Quit => "Quit".to_string(),
            Self::Run(spec) => spec.to_string(),
        }
    }
}

impl FromStr for Selection {
    type Err = SortvizError;

    /// Parse typed menu input. Surrounding whitespace is ignored; anything
    /// that is not one of the listed numbers is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_option)
            .ok_or_else(|| SortvizError::InvalidOption(s.to_string()))
    }
}
