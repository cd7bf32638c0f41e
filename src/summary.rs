//! Reader for track summary files.
//!
//! One track per line: `<wedge><ring> <bpm> <filename...>`, e.g.
//!
//! ```text
//! 8A 124.0 Artist - Title.flac
//! 9A 126.5 Another Artist - Another Title.mp3
//! ```
//!
//! The filename is everything after the tempo, re-joined with single spaces.
//! Blank lines and lines starting with `#` are ignored.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::error::MixError;
use crate::track::{CamelotKey, Track};

/// Parse a single summary line. `line_no` is 1-based and only used in errors.
///
/// # Errors
///
/// Returns [`MixError::Parse`] if a field is missing or malformed.
pub fn parse_line(line: &str, line_no: usize) -> crate::error::Result<Track> {
    let parse_err = |reason: String| MixError::Parse {
        line: line_no,
        reason,
    };

    let mut words = line.split_whitespace();
    let key_token = words
        .next()
        .ok_or_else(|| parse_err("missing Camelot key".to_string()))?;
    let bpm_token = words
        .next()
        .ok_or_else(|| parse_err("missing tempo".to_string()))?;
    let filename = words.collect::<Vec<_>>().join(" ");
    if filename.is_empty() {
        return Err(parse_err("missing filename".to_string()));
    }

    let key: CamelotKey = key_token
        .parse()
        .map_err(|e: MixError| parse_err(e.to_string()))?;
    let bpm: f64 = bpm_token
        .parse()
        .map_err(|_| parse_err(format!("bad tempo `{bpm_token}`")))?;

    Track::new(filename, key, bpm).map_err(|e| parse_err(e.to_string()))
}

/// Parse a whole summary document.
///
/// # Errors
///
/// Fails on the first malformed line.
pub fn parse_summary(text: &str) -> crate::error::Result<Vec<Track>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Read and parse a summary file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed line.
pub fn read_summary(path: &Path) -> Result<Vec<Track>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read track summary {}", path.display()))?;
    let tracks = parse_summary(&text)
        .with_context(|| format!("Invalid track summary {}", path.display()))?;
    debug!("Read {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}
