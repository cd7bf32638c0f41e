//! Diameter of the spanning tree: the two nodes farthest apart and the path
//! between them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::PathTable;
use crate::track::NodeId;

/// Endpoints of the longest path found in a [`PathTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterPair {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

/// Scan all ordered pairs of `order` for the largest tabulated distance.
///
/// Self-pairs and nodes missing from the table are skipped. A pair only
/// replaces the current best on a strictly larger distance, so the first
/// maximal pair in `order × order` wins. Returns `None` when no pair of
/// distinct connected nodes exists.
#[must_use]
pub fn farthest_pair(table: &PathTable, order: impl IntoIterator<Item = NodeId> + Clone) -> Option<DiameterPair> {
    let mut best: Option<DiameterPair> = None;
    for from in order.clone() {
        if !table.contains(from) {
            continue;
        }
        for to in order.clone() {
            if from == to {
                continue;
            }
            let Some(distance) = table.distance(from, to) else { continue };
            if best.map_or(true, |current| distance > current.distance) {
                best = Some(DiameterPair { from, to, distance });
            }
        }
    }
    best
}

/// Find the farthest pair and rebuild the path between its endpoints.
///
/// # Errors
///
/// Returns [`crate::error::MixError::Unreachable`] if the next-hop table
/// cannot lead from one endpoint to the other.
pub fn diameter_path(
    table: &PathTable,
    order: impl IntoIterator<Item = NodeId> + Clone,
) -> Result<Option<(DiameterPair, Vec<NodeId>)>> {
    let Some(pair) = farthest_pair(table, order) else {
        return Ok(None);
    };
    let path = table.path(pair.from, pair.to)?;
    debug!(
        "Diameter #{} -> #{} at distance {} ({} tracks)",
        pair.from,
        pair.to,
        pair.distance,
        path.len()
    );
    Ok(Some((pair, path)))
}
