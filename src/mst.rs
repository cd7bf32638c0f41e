//! Minimum spanning tree over a distance matrix (Prim's algorithm).
//!
//! The tree is grown from node 0. Tracks the root cannot reach are left out
//! of the tree and reported in [`SpanningTree::excluded`].
//!
//! ## Tie-breaking
//!
//! Among equal-weight frontier edges the winner is the one a plain scan
//! finds first when it walks tree nodes in the order they joined the tree
//! and candidates in input order: lowest weight, then the earliest-joined
//! tree endpoint, then the lowest candidate id.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{MixError, Result};
use crate::matrix::DistanceMatrix;
use crate::track::NodeId;

/// An undirected tree edge with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    /// Endpoint already in the tree when the edge was chosen
    pub from: NodeId,
    /// Endpoint added by this edge
    pub to: NodeId,
    pub weight: f64,
}

/// Result of [`minimum_spanning_tree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub root: NodeId,
    /// Edges in the order they were added
    pub edges: Vec<TreeEdge>,
    /// Tree nodes in the order they joined, starting with `root`
    pub nodes: Vec<NodeId>,
    /// Nodes with no path to `root`, in input order
    pub excluded: Vec<NodeId>,
}

impl SpanningTree {
    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Copy of the tree where every edge costs 1.
    #[must_use]
    pub fn unit_weighted(&self) -> Self {
        Self {
            edges: self
                .edges
                .iter()
                .map(|edge| TreeEdge { weight: 1.0, ..*edge })
                .collect(),
            ..self.clone()
        }
    }
}

/// Best known link from the tree to a node outside it.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    weight: f64,
    /// Position of the tree endpoint in `SpanningTree::nodes`
    rank: usize,
}

/// Build a minimum spanning tree rooted at the first track.
///
/// # Errors
///
/// Returns [`MixError::EmptyGraph`] when the matrix has no nodes.
pub fn minimum_spanning_tree(matrix: &DistanceMatrix) -> Result<SpanningTree> {
    if matrix.is_empty() {
        return Err(MixError::EmptyGraph);
    }

    let n = matrix.len();
    let root: NodeId = 0;
    let mut in_tree = vec![false; n];
    let mut frontier: Vec<Option<Frontier>> = vec![None; n];
    let mut nodes = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    let mut newest = root;
    loop {
        in_tree[newest] = true;
        let rank = nodes.len();
        nodes.push(newest);

        // Later tree nodes only take over a frontier entry on a strictly
        // smaller weight, so the earliest-joined endpoint wins ties.
        for (candidate, weight) in matrix.neighbours(newest) {
            if in_tree[candidate] {
                continue;
            }
            let better = match frontier[candidate] {
                Some(best) => weight < best.weight,
                None => true,
            };
            if better {
                frontier[candidate] = Some(Frontier { weight, rank });
            }
        }

        let next = frontier
            .iter()
            .enumerate()
            .filter(|(candidate, _)| !in_tree[*candidate])
            .filter_map(|(candidate, best)| best.map(|best| (candidate, best)))
            .fold(None::<(NodeId, Frontier)>, |chosen, (candidate, best)| match chosen {
                Some((_, current))
                    if (current.weight, current.rank) <= (best.weight, best.rank) =>
                {
                    chosen
                }
                _ => Some((candidate, best)),
            });

        let Some((to, best)) = next else { break };
        let edge = TreeEdge {
            from: nodes[best.rank],
            to,
            weight: best.weight,
        };
        trace!("Tree edge #{} -> #{} ({:.3})", edge.from, edge.to, edge.weight);
        edges.push(edge);
        newest = to;
    }

    let excluded: Vec<NodeId> = (0..n).filter(|&node| !in_tree[node]).collect();
    if !excluded.is_empty() {
        warn!(
            "{} track(s) have no compatible path to the rest of the collection",
            excluded.len()
        );
    }
    debug!(
        "Spanning tree: {} nodes, {} edges, {} excluded",
        nodes.len(),
        edges.len(),
        excluded.len()
    );

    Ok(SpanningTree {
        root,
        edges,
        nodes,
        excluded,
    })
}
