//! Seeding for reproducible demo data.
//!
//! # Environment Variables
//!
//! - `RANDOM_SEED`: seed used when none is configured explicitly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Environment variable consulted for a fallback seed.
pub const SEED_ENV: &str = "RANDOM_SEED";

/// Read [`SEED_ENV`], ignoring values that don't parse as `u64`.
pub fn seed_from_env() -> Option<u64> {
    parse_seed(std::env::var(SEED_ENV).ok().as_deref())
}

/// Testable core of [`seed_from_env`].
#[must_use]
pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    value.and_then(|s| s.trim().parse().ok())
}

/// An explicit seed wins over the environment.
pub fn resolve_seed(explicit: Option<u64>) -> Option<u64> {
    explicit.or_else(seed_from_env)
}

/// Deterministic RNG for `Some(seed)`, entropy-seeded otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
