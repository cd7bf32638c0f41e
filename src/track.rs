//! Track records and Camelot key notation.
//!
//! A [`Track`] is built once from input and never changes afterwards. Graph
//! stages refer to tracks by their position in the input slice ([`NodeId`]),
//! so two records with identical fields are still two distinct nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MixError, Result};

/// Position of a track in the input collection.
pub type NodeId = usize;

/// Number of wedges on the Camelot wheel.
pub const WEDGES: u8 = 12;

/// Inner or outer ring of the Camelot wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    /// `A` ring
    Minor,
    /// `B` ring
    Major,
}

impl Ring {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Ring::Minor => 'A',
            Ring::Major => 'B',
        }
    }

    /// Case-insensitive ring letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Ring::Minor),
            'B' => Some(Ring::Major),
            _ => None,
        }
    }
}

/// A key in Camelot notation, e.g. `8A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CamelotKey {
    pub wedge: u8,
    pub ring: Ring,
}

impl CamelotKey {
    /// # Errors
    ///
    /// Returns [`MixError::InvalidTrack`] if `wedge` is outside `1..=12`.
    pub fn new(wedge: u8, ring: Ring) -> Result<Self> {
        if !(1..=WEDGES).contains(&wedge) {
            return Err(MixError::InvalidTrack(format!(
                "Camelot wedge {wedge} is outside 1..={WEDGES}"
            )));
        }
        Ok(Self { wedge, ring })
    }
}

impl FromStr for CamelotKey {
    type Err = MixError;

    /// Parses a key token: wedge digits followed by a single ring letter.
    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let letter = chars
            .next_back()
            .ok_or_else(|| MixError::InvalidTrack("empty key token".to_string()))?;
        let ring = Ring::from_letter(letter).ok_or_else(|| {
            MixError::InvalidTrack(format!("unknown Camelot ring `{letter}` in `{token}`"))
        })?;
        let wedge = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| MixError::InvalidTrack(format!("bad Camelot wedge in `{token}`")))?;
        Self::new(wedge, ring)
    }
}

impl fmt::Display for CamelotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.wedge, self.ring.letter())
    }
}

/// One entry of a track collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub filename: String,
    pub key: CamelotKey,
    pub bpm: f64,
}

impl Track {
    /// # Errors
    ///
    /// Returns [`MixError::InvalidTrack`] if `bpm` is negative or not finite.
    pub fn new(filename: impl Into<String>, key: CamelotKey, bpm: f64) -> Result<Self> {
        if !bpm.is_finite() || bpm < 0.0 {
            return Err(MixError::InvalidTrack(format!(
                "tempo {bpm} must be a finite, non-negative BPM"
            )));
        }
        Ok(Self {
            filename: filename.into(),
            key,
            bpm,
        })
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} {}", self.key, self.bpm, self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        let key: CamelotKey = "8A".parse().unwrap();
        assert_eq!(key, CamelotKey { wedge: 8, ring: Ring::Minor });

        let key: CamelotKey = "12b".parse().unwrap();
        assert_eq!(key, CamelotKey { wedge: 12, ring: Ring::Major });
        assert_eq!(key.to_string(), "12B");
    }

    #[test]
    fn test_key_rejects_bad_tokens() {
        assert!("".parse::<CamelotKey>().is_err());
        assert!("A".parse::<CamelotKey>().is_err());
        assert!("13A".parse::<CamelotKey>().is_err());
        assert!("0B".parse::<CamelotKey>().is_err());
        assert!("5C".parse::<CamelotKey>().is_err());
        assert!("xB".parse::<CamelotKey>().is_err());
    }

    #[test]
    fn test_track_rejects_bad_tempo() {
        let key = CamelotKey::new(1, Ring::Minor).unwrap();
        assert!(Track::new("a", key, -1.0).is_err());
        assert!(Track::new("a", key, f64::NAN).is_err());
        assert!(Track::new("a", key, 0.0).is_ok());
    }

    #[test]
    fn test_track_display() {
        let track = Track::new("Some Artist - Tune.flac", "3B".parse().unwrap(), 124.0).unwrap();
        assert_eq!(track.to_string(), "3B 124.00 Some Artist - Tune.flac");
    }
}
