//! All-pairs shortest paths over an edge list (Floyd–Warshall).
//!
//! Besides the distance table this keeps a next-hop ("link") table:
//! `next_hop(v, w)` is the first node after `v` on a shortest path to `w`,
//! so any path can be rebuilt by following hops until `w` is reached.

use std::collections::HashMap;

use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{MixError, Result};
use crate::mst::TreeEdge;
use crate::track::NodeId;

/// How the next-hop table is updated when a shorter route is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkUpdate {
    /// Relax on strict improvement and update both directions at once.
    #[default]
    Symmetric,
    /// Relax on `<=` and only update `link[i][j]`, and only when
    /// `link[i][k]` is already known. The reverse direction is filled in
    /// when the loop later visits `(j, i)`.
    ///
    /// Only sound when every edge weight is positive. A zero-weight edge
    /// lets an equal-cost detour overwrite a hop with one off the tree
    /// path, and [`PathTable::path`] then fails with
    /// [`MixError::Unreachable`].
    Reference,
}

/// Pairwise distances and next hops between the nodes of an edge list.
#[derive(Debug, Clone)]
pub struct PathTable {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    distance: Vec<Vec<Option<f64>>>,
    link: Vec<Vec<Option<usize>>>,
}

impl PathTable {
    /// Run Floyd–Warshall over `edges`.
    ///
    /// Nodes are the edge endpoints, in order of first appearance. An empty
    /// edge list gives an empty table.
    #[must_use]
    pub fn from_edges(edges: &[TreeEdge], update: LinkUpdate) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for edge in edges {
            for node in [edge.from, edge.to] {
                index.entry(node).or_insert_with(|| {
                    nodes.push(node);
                    nodes.len() - 1
                });
            }
        }

        let m = nodes.len();
        let mut distance = vec![vec![None; m]; m];
        let mut link = vec![vec![None; m]; m];
        for (i, row) in distance.iter_mut().enumerate() {
            row[i] = Some(0.0);
        }
        for edge in edges {
            let (v, w) = (index[&edge.from], index[&edge.to]);
            distance[v][w] = Some(edge.weight);
            distance[w][v] = Some(edge.weight);
            link[v][w] = Some(w);
            link[w][v] = Some(v);
        }

        for k in 0..m {
            for i in 0..m {
                let Some(to_k) = distance[i][k] else { continue };
                for j in 0..m {
                    let Some(from_k) = distance[k][j] else { continue };
                    let through = to_k + from_k;
                    let relax = match (distance[i][j], update) {
                        (None, _) => true,
                        (Some(current), LinkUpdate::Symmetric) => through < current,
                        (Some(current), LinkUpdate::Reference) => through <= current,
                    };
                    if !relax {
                        continue;
                    }

                    distance[i][j] = Some(through);
                    distance[j][i] = Some(through);
                    if let Some(hop) = link[i][k] {
                        link[i][j] = Some(hop);
                    }
                    if update == LinkUpdate::Symmetric {
                        if let Some(hop) = link[j][k] {
                            link[j][i] = Some(hop);
                        }
                    }
                }
            }
            trace!("Relaxed paths through #{}", nodes[k]);
        }

        debug!("Path table over {m} tree nodes ({update:?} links)");
        Self {
            nodes,
            index,
            distance,
            link,
        }
    }

    /// Tree nodes in table order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Shortest distance between two nodes, `None` if either is missing or
    /// they are not connected.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let (i, j) = self.local(from, to)?;
        self.distance[i][j]
    }

    /// First node after `from` on the way to `to`.
    #[must_use]
    pub fn next_hop(&self, from: NodeId, to: NodeId) -> Option<NodeId> {
        let (i, j) = self.local(from, to)?;
        self.link[i][j].map(|hop| self.nodes[hop])
    }

    /// Rebuild the path from `from` to `to`, both endpoints included.
    ///
    /// # Errors
    ///
    /// Returns [`MixError::Unreachable`] when either node is missing, a hop
    /// is unknown, or the walk does not arrive within one step per node.
    pub fn path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        let unreachable = MixError::Unreachable { from, to };
        let (mut current, target) = self.local(from, to).ok_or_else(|| unreachable.clone())?;
        if self.distance[current][target].is_none() {
            return Err(unreachable);
        }

        let mut path = vec![from];
        while current != target {
            current = self.link[current][target].ok_or_else(|| unreachable.clone())?;
            path.push(self.nodes[current]);
            if path.len() > self.nodes.len() {
                return Err(unreachable);
            }
        }
        Ok(path)
    }

    fn local(&self, from: NodeId, to: NodeId) -> Option<(usize, usize)> {
        Some((*self.index.get(&from)?, *self.index.get(&to)?))
    }
}
