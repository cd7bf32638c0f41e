//! Harmonic mix paths over Camelot-keyed track collections.
//!
//! Core modules, in pipeline order:
//! - [`metric`] - Key/tempo compatibility between two tracks
//! - [`matrix`] - Distance matrix over every pair of tracks
//! - [`mst`] - Minimum spanning tree (Prim)
//! - [`paths`] - All-pairs paths over the tree (Floyd–Warshall)
//! - [`diameter`] - Farthest pair and the path between it
//! - [`pipeline`] - All of the above as one call
//!
//! ### Supporting Modules
//!
//! - [`track`] - Track records and Camelot keys
//! - [`summary`] - Track summary file reader
//! - [`config`] - Configuration model and loading
//! - [`error`] - Error taxonomy
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use automix::config::MixConfig;
//! use automix::pipeline::plan_harmonic_mix;
//! use automix::summary::parse_summary;
//!
//! let tracks = parse_summary("1A 120 a.flac\n1A 126 b.flac\n7A 120 c.flac\n")?;
//! let plan = plan_harmonic_mix(&tracks, &MixConfig::default())?;
//!
//! let names: Vec<&str> = plan.tracks(&tracks).iter().map(|t| t.filename.as_str()).collect();
//! assert_eq!(names, ["b.flac", "a.flac", "c.flac"]);
//! # Ok::<(), automix::error::MixError>(())
//! ```
//!
//! ## Algorithm Details
//!
//! 1. Every ordered pair of tracks is scored by a [`metric::Metric`]. The
//!    default [`metric::HarmonicMetric`] is `key² + (Δbpm / 6)²`, where
//!    `key` is the number of steps around the Camelot wheel (or 1 for a
//!    relative major/minor switch). Keys that are not compatible get no
//!    edge at all.
//! 2. Prim's algorithm grows a spanning tree from the first track. Tracks
//!    the tree cannot reach are reported as excluded.
//! 3. Floyd–Warshall computes distances and next hops between tree nodes.
//!    By default every tree edge counts as one step
//!    ([`config::DiameterMode::Hops`]).
//! 4. The farthest pair of tracks is the start and end of the mix; the tree
//!    path between them is the play order.
//!
//! Ties are broken by input order everywhere, so the same input always
//! produces the same mix.

pub mod cli;
pub mod completion;
pub mod config;
pub mod diameter;
pub mod error;
pub mod matrix;
pub mod metric;
pub mod mst;
pub mod paths;
pub mod pipeline;
pub mod summary;
pub mod track;
