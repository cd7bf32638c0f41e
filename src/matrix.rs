//! Distance matrix over a track collection.
//!
//! Every ordered pair (self-pairs included) is evaluated once. Absent
//! entries mean "no edge" and stay absent through every later stage.

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{MixError, Result};
use crate::metric::Metric;
use crate::track::{NodeId, Track};

/// Dense `n × n` table of optional distances, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<Option<f64>>>,
}

impl DistanceMatrix {
    /// Evaluate `metric` over all ordered pairs of `tracks`.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::InvalidDistance`] if the metric yields a negative
    /// or NaN value.
    pub fn build<M: Metric + ?Sized>(tracks: &[Track], metric: &M) -> Result<Self> {
        let rows = tracks
            .iter()
            .enumerate()
            .map(|(from, a)| evaluate_row(tracks, metric, from, a))
            .collect::<Result<Vec<_>>>()?;
        debug!("Built {n}x{n} distance matrix", n = rows.len());
        Ok(Self { rows })
    }

    /// Same as [`DistanceMatrix::build`] with rows evaluated on the rayon pool.
    ///
    /// # Errors
    ///
    /// See [`DistanceMatrix::build`]. When several entries are invalid the
    /// reported one is not necessarily the first in input order.
    pub fn build_parallel<M: Metric + ?Sized>(tracks: &[Track], metric: &M) -> Result<Self> {
        let rows = tracks
            .par_iter()
            .enumerate()
            .map(|(from, a)| evaluate_row(tracks, metric, from, a))
            .collect::<Result<Vec<_>>>()?;
        debug!("Built {n}x{n} distance matrix in parallel", n = rows.len());
        Ok(Self { rows })
    }

    /// Build directly from precomputed rows. Rows must form a square table.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::InvalidDistance`] for a negative or NaN entry and
    /// [`MixError::InvalidMatrix`] if the table is not square.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let n = rows.len();
        for (from, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(MixError::InvalidMatrix(format!(
                    "distance row {from} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (to, entry) in row.iter().enumerate() {
                if let Some(value) = *entry {
                    check_distance(from, to, value)?;
                }
            }
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from `a` to `b`, `None` when there is no edge or either id
    /// is out of range.
    #[must_use]
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.rows.get(a).and_then(|row| row.get(b)).copied().flatten()
    }

    /// Present edges leaving `node`, in input order. Self-pairs are skipped.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.rows
            .get(node)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(move |(to, entry)| match *entry {
                Some(weight) if to != node => Some((to, weight)),
                _ => None,
            })
    }
}

fn evaluate_row<M: Metric + ?Sized>(
    tracks: &[Track],
    metric: &M,
    from: NodeId,
    a: &Track,
) -> Result<Vec<Option<f64>>> {
    tracks
        .iter()
        .enumerate()
        .map(|(to, b)| match metric.distance(a, b) {
            Some(value) => check_distance(from, to, value).map(Some),
            None => {
                trace!("No edge between #{from} and #{to}");
                Ok(None)
            }
        })
        .collect()
}

fn check_distance(from: NodeId, to: NodeId, value: f64) -> Result<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(MixError::InvalidDistance { from, to, value });
    }
    Ok(value)
}
