//! Integer seeds identifying one deterministic generation run.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BlossomError;

/// Upper bound (exclusive) for randomly chosen seeds.
const RANDOM_SEED_RANGE: f64 = 1e9;

/// Seed for a flower. Same seed and size always give the same image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    /// Pick a fresh seed in `[0, 1e9)` from the thread RNG.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let r: f64 = rng.random();
        Self((r * RANDOM_SEED_RANGE).floor() as i64)
    }

    /// The seed as a real, for composite sub-seeds like `seed + i * independence`.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = BlossomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: &str| BlossomError::InvalidSeed {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("seed is empty"));
        }

        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected an integer"));
        }

        trimmed
            .parse::<i64>()
            .map(Seed)
            .map_err(|e| invalid(&e.to_string()))
    }
}
