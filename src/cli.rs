//! # Command-Line Interface Module
//!
//! Defines the command line for Automix using Clap derive macros.
//!
//! ## Commands
//!
//! - `mix`: Plan a mix path over a track summary file
//! - `tree`: Show the spanning tree behind a mix path
//! - `completion`: Generate shell completions
//!
//! ## Examples
//!
//! ```bash
//! automix mix tracks.txt
//! automix mix tracks.txt --mode weighted --json
//! automix tree tracks.txt
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{DiameterMode, MixConfig};
use crate::paths::LinkUpdate;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "automix")]
#[command(about = "Automix: harmonic mix paths over Camelot-keyed track collections")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Where the tracks and settings come from.
#[derive(ClapArgs, Debug, Clone)]
pub struct SourceOptions {
    /// Track summary file
    ///
    /// One track per line: `<wedge><ring> <bpm> <filename...>`, for
    /// example `8A 124.0 Artist - Title.flac`.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub summary: PathBuf,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "AUTOMIX_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Evaluate the distance matrix on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl SourceOptions {
    /// Apply command-line overrides on top of a loaded configuration.
    #[must_use]
    pub fn apply(&self, mut config: MixConfig) -> MixConfig {
        if self.sequential {
            config.parallel = false;
        }
        config
    }
}

/// Options for planning a mix path.
#[derive(ClapArgs, Debug, Clone)]
pub struct PlanOptions {
    #[command(flatten)]
    pub source: SourceOptions,

    /// Diameter measure: tree hops or metric weight
    #[arg(long, value_enum)]
    pub mode: Option<DiameterMode>,

    /// Next-hop table update rule
    #[arg(long, value_enum)]
    pub link: Option<LinkUpdate>,
}

impl PlanOptions {
    /// Apply command-line overrides on top of a loaded configuration.
    #[must_use]
    pub fn apply(&self, config: MixConfig) -> MixConfig {
        let mut config = self.source.apply(config);
        if let Some(mode) = self.mode {
            config.diameter = mode;
        }
        if let Some(link) = self.link {
            config.link_update = link;
        }
        config
    }
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a mix path
    ///
    /// Builds a minimum spanning tree over harmonic/tempo distances and
    /// prints the path between the two tracks farthest apart in it.
    Mix {
        #[command(flatten)]
        options: PlanOptions,

        /// Print a JSON report instead of one track per line
        #[arg(long)]
        json: bool,
    },

    /// Show the spanning tree
    ///
    /// Prints every tree edge with its metric weight, followed by tracks
    /// that have no compatible partner.
    Tree {
        #[command(flatten)]
        options: SourceOptions,
    },

    /// Generate shell completions
    ///
    /// Usage: automix completion bash > ~/.local/share/bash-completion/completions/automix
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_flags() {
        let args = Args::parse_from(["automix", "mix", "set.txt", "--mode", "weighted", "--json"]);
        match args.command {
            Command::Mix { options, json } => {
                assert!(json);
                assert_eq!(options.source.summary, PathBuf::from("set.txt"));
                assert_eq!(options.mode, Some(DiameterMode::Weighted));
                assert_eq!(options.link, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let args = Args::parse_from(["automix", "mix", "set.txt", "--link", "reference", "--sequential"]);
        let Command::Mix { options, .. } = args.command else {
            panic!("expected mix command");
        };
        let config = options.apply(MixConfig::default());
        assert_eq!(config.link_update, LinkUpdate::Reference);
        assert_eq!(config.diameter, DiameterMode::Hops);
        assert!(!config.parallel);
    }

    #[test]
    fn test_tree_takes_only_source_options() {
        let args = Args::parse_from(["automix", "tree", "set.txt", "--sequential"]);
        let Command::Tree { options } = args.command else {
            panic!("expected tree command");
        };
        assert!(!options.apply(MixConfig::default()).parallel);

        for flag in [["--mode", "weighted"], ["--link", "reference"]] {
            let mut argv = vec!["automix", "tree", "set.txt"];
            argv.extend(flag);
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
