//! # Automix
//!
//! Orders a track collection into a harmonic mix path: a minimum spanning
//! tree over key/tempo distances, walked end to end along its diameter.
//!
//! ## Usage
//!
//! ```bash
//! # Print the mix path, one track per line
//! automix mix tracks.txt
//!
//! # Weighted diameter, JSON output
//! automix mix tracks.txt --mode weighted --json
//!
//! # Inspect the spanning tree
//! automix tree tracks.txt
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use std::io::{self, Write};

use automix::{cli, completion, config, mst, pipeline, summary, track};

/// Load configuration and read the summary.
fn prepare(source: &cli::SourceOptions) -> Result<(config::MixConfig, Vec<track::Track>)> {
    let config = config::load(source.config.as_deref())?;
    let tracks = summary::read_summary(&source.summary)?;
    Ok((config, tracks))
}

/// Main entry point for Automix.
///
/// Logging is controlled through `RUST_LOG`:
/// - `RUST_LOG=debug automix mix tracks.txt` - stage sizes and choices
/// - `RUST_LOG=automix::mst=trace automix tree tracks.txt` - every tree edge
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        cli::Command::Mix { options, json } => {
            info!("Planning mix from: {}", options.source.summary.display());
            let (config, tracks) = prepare(&options.source)?;
            let config = options.apply(config);
            let plan = pipeline::plan_harmonic_mix(&tracks, &config)
                .context("Failed to plan mix path")?;

            if json {
                serde_json::to_writer_pretty(&mut out, &plan.report(&tracks))?;
                writeln!(out)?;
            } else {
                for track in plan.tracks(&tracks) {
                    writeln!(out, "{track}")?;
                }
                if plan.path.is_empty() {
                    eprintln!("No two compatible tracks to mix between");
                }
                for &node in plan.excluded() {
                    eprintln!("excluded: {}", tracks[node]);
                }
            }
        }
        cli::Command::Tree { options } => {
            info!("Building spanning tree from: {}", options.summary.display());
            let (config, tracks) = prepare(&options)?;
            let config = options.apply(config);
            let matrix = pipeline::distance_matrix(&tracks, &config.metric, &config)?;
            let tree = mst::minimum_spanning_tree(&matrix).context("Failed to build spanning tree")?;

            for edge in &tree.edges {
                writeln!(
                    out,
                    "{:>8.3}  {}  ->  {}",
                    edge.weight, tracks[edge.from], tracks[edge.to]
                )?;
            }
            writeln!(out, "total weight: {:.3}", tree.total_weight())?;
            for &node in &tree.excluded {
                writeln!(out, "excluded: {}", tracks[node])?;
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd, &mut out);
        }
    }

    Ok(())
}
