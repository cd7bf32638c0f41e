//! Compatibility metrics between tracks.
//!
//! A metric returns `Some(distance)` for a compatible pair and `None` when
//! the pair must never be mixed directly. The default [`HarmonicMetric`]
//! combines the Camelot wheel distance with the tempo difference:
//!
//! ```text
//! distance(a, b) = key(a, b)² + ((bpm(a) - bpm(b)) / tempo_scale)²
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MixError, Result};
use crate::track::{Track, WEDGES};

/// Pairwise distance between two tracks.
///
/// Implementations should be symmetric and return non-negative values.
/// `Sync` is required so the distance matrix can be evaluated in parallel.
pub trait Metric: Sync {
    fn distance(&self, a: &Track, b: &Track) -> Option<f64>;
}

impl<F> Metric for F
where
    F: Fn(&Track, &Track) -> Option<f64> + Sync,
{
    fn distance(&self, a: &Track, b: &Track) -> Option<f64> {
        self(a, b)
    }
}

/// Steps around the Camelot wheel between two keys.
///
/// Same ring: cyclic wedge distance (0..=6). Same wedge on the other ring:
/// 1. Anything else is incompatible.
#[must_use]
pub fn camelot_distance(a: &Track, b: &Track) -> Option<u8> {
    let (w1, w2) = (a.key.wedge % WEDGES, b.key.wedge % WEDGES);
    if a.key.ring == b.key.ring {
        let forward = (w1 + WEDGES - w2) % WEDGES;
        let backward = (w2 + WEDGES - w1) % WEDGES;
        return Some(forward.min(backward));
    }
    (w1 == w2).then_some(1)
}

/// Default harmonic mixing metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonicMetric {
    /// BPM difference counted as one key step
    pub tempo_scale: f64,
    /// Key distance for a relative major/minor switch
    pub ring_change_penalty: f64,
}

impl Default for HarmonicMetric {
    fn default() -> Self {
        Self {
            tempo_scale: 6.0,
            ring_change_penalty: 1.0,
        }
    }
}

impl HarmonicMetric {
    /// Check the tunables before any distance is computed.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::InvalidConfig`] if `tempo_scale` is not a positive
    /// finite number or `ring_change_penalty` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.tempo_scale.is_finite() && self.tempo_scale > 0.0) {
            return Err(MixError::InvalidConfig(format!(
                "tempo_scale must be a positive number, got {}",
                self.tempo_scale
            )));
        }
        if !(self.ring_change_penalty.is_finite() && self.ring_change_penalty >= 0.0) {
            return Err(MixError::InvalidConfig(format!(
                "ring_change_penalty must be a non-negative number, got {}",
                self.ring_change_penalty
            )));
        }
        Ok(())
    }
}

impl Metric for HarmonicMetric {
    fn distance(&self, a: &Track, b: &Track) -> Option<f64> {
        let steps = camelot_distance(a, b)?;
        let key = if a.key.ring == b.key.ring {
            f64::from(steps)
        } else {
            self.ring_change_penalty
        };
        let tempo = (a.bpm - b.bpm) / self.tempo_scale;
        Some(key * key + tempo * tempo)
    }
}
