use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Score clamped to [0.0, 1.0]. Used for both `confidence` and `orionScore`.
///
/// NaN collapses to 0.0 so a malformed upstream similarity can never
/// escape the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);
    pub const ONE: Score = Score(1.0);

    /// Create a new Score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Arithmetic mean of a set of scores. Empty input yields zero.
    pub fn mean<I: IntoIterator<Item = Score>>(scores: I) -> Score {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.0, n + 1));
        if count == 0 {
            return Self::ZERO;
        }
        Self::new(sum / count as f64)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Score::new)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}
