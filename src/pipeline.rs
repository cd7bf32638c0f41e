//! # Mix Planning Pipeline
//!
//! Composes the stages into one call:
//!
//! ```text
//! tracks ─▶ DistanceMatrix ─▶ SpanningTree ─▶ PathTable ─▶ diameter path
//! ```
//!
//! Each stage takes the previous result by reference and returns a new
//! value. With [`DiameterMode::Hops`] the tree is re-weighted to unit edges
//! before path finding, so the reported diameter counts transitions rather
//! than metric distance.

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{DiameterMode, MixConfig};
use crate::diameter::{self, DiameterPair};
use crate::error::{MixError, Result};
use crate::matrix::DistanceMatrix;
use crate::metric::Metric;
use crate::mst::{self, SpanningTree};
use crate::paths::{LinkUpdate, PathTable};
use crate::track::{NodeId, Track};

/// Outcome of [`plan_mix`].
#[derive(Debug, Clone, PartialEq)]
pub struct MixPlan {
    /// Tracks to play, in order. Empty when no pair of connected tracks exists.
    pub path: Vec<NodeId>,
    pub diameter: Option<DiameterPair>,
    /// Spanning tree with its metric weights
    pub tree: SpanningTree,
    pub mode: DiameterMode,
}

impl MixPlan {
    /// Tracks with no compatible path to the tree root.
    #[must_use]
    pub fn excluded(&self) -> &[NodeId] {
        &self.tree.excluded
    }

    /// Resolve the path against the collection it was planned from.
    #[must_use]
    pub fn tracks<'a>(&self, tracks: &'a [Track]) -> Vec<&'a Track> {
        self.path.iter().filter_map(|&node| tracks.get(node)).collect()
    }

    /// Serialisable view for JSON output.
    #[must_use]
    pub fn report<'a>(&self, tracks: &'a [Track]) -> MixReport<'a> {
        MixReport {
            mode: self.mode,
            diameter: self.diameter.map(|pair| pair.distance),
            tree_weight: self.tree.total_weight(),
            path: self.tracks(tracks),
            excluded: self
                .excluded()
                .iter()
                .filter_map(|&node| tracks.get(node))
                .collect(),
        }
    }
}

/// JSON shape of a plan.
#[derive(Debug, Serialize)]
pub struct MixReport<'a> {
    pub mode: DiameterMode,
    pub diameter: Option<f64>,
    pub tree_weight: f64,
    pub path: Vec<&'a Track>,
    pub excluded: Vec<&'a Track>,
}

/// Build the distance matrix the way `config` asks for.
///
/// # Errors
///
/// See [`DistanceMatrix::build`].
pub fn distance_matrix<M: Metric + ?Sized>(
    tracks: &[Track],
    metric: &M,
    config: &MixConfig,
) -> Result<DistanceMatrix> {
    if config.parallel {
        DistanceMatrix::build_parallel(tracks, metric)
    } else {
        DistanceMatrix::build(tracks, metric)
    }
}

/// Plan a mix path over `tracks`.
///
/// # Errors
///
/// - [`MixError::EmptyGraph`] for an empty collection
/// - [`MixError::InvalidDistance`] for a bad metric value
/// - [`MixError::InvalidConfig`] for [`LinkUpdate::Reference`] links over a
///   weighted tree with a zero-weight edge
/// - [`MixError::Unreachable`] if the path cannot be rebuilt
///
/// A single track, or a root with no compatible partner, is not an error:
/// the plan then has an empty path and no diameter.
pub fn plan_mix<M: Metric + ?Sized>(tracks: &[Track], metric: &M, config: &MixConfig) -> Result<MixPlan> {
    info!("Planning mix over {} tracks ({:?} diameter)", tracks.len(), config.diameter);

    let matrix = distance_matrix(tracks, metric, config)?;
    let tree = mst::minimum_spanning_tree(&matrix)?;
    let edges = match config.diameter {
        DiameterMode::Hops => tree.unit_weighted().edges,
        DiameterMode::Weighted => tree.edges.clone(),
    };
    if config.link_update == LinkUpdate::Reference && edges.iter().any(|edge| edge.weight <= 0.0) {
        return Err(MixError::InvalidConfig(
            "reference link updates cannot route through zero-weight tree edges \
             (identical key and tempo); use symmetric links or hop diameter"
                .to_string(),
        ));
    }
    let table = PathTable::from_edges(&edges, config.link_update);

    let (diameter, path) = match diameter::diameter_path(&table, 0..tracks.len())? {
        Some((pair, path)) => (Some(pair), path),
        None => {
            warn!("No two connected tracks; the mix path is empty");
            (None, Vec::new())
        }
    };
    debug!("Mix path: {path:?}");

    Ok(MixPlan {
        path,
        diameter,
        tree,
        mode: config.diameter,
    })
}

/// [`plan_mix`] with the metric taken from `config`.
///
/// # Errors
///
/// [`MixError::InvalidConfig`] for out-of-range metric settings, otherwise
/// see [`plan_mix`].
pub fn plan_harmonic_mix(tracks: &[Track], config: &MixConfig) -> Result<MixPlan> {
    config.validate()?;
    plan_mix(tracks, &config.metric, config)
}
