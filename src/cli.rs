use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
pub struct Cli {
    /// Path to config file (default: `$XDG_CONFIG_HOME/scatter/config.kdl`).
    ///
    /// This can also be set with the `SCATTER_CONFIG` environment variable. If both are set, the
    /// command line argument takes precedence. Without either, and without a file at the default
    /// location, the built-in config is used.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Seed for the placement jitter, overriding `placement.seed` from the config.
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub subcommand: Sub,
}

#[derive(Subcommand)]
pub enum Sub {
    /// Print the initial item layout as JSON.
    Layout,
    /// Apply a stream of pointer events to the initial layout.
    ///
    /// Events are read as JSON lines, for example `{"down":{"x":500,"y":300}}`,
    /// `{"motion":{"x":520,"y":310}}`, `"up"` or `"cancel"`. A pointer-down without a `target`
    /// is hit tested against the current items.
    Replay {
        /// File to read events from (default: stdin).
        file: Option<PathBuf>,
        /// Print the items after every event instead of only at the end.
        #[arg(long)]
        each: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_replay() {
        let cli = Cli::try_parse_from(["scatter", "replay", "events.jsonl", "--each", "-s", "4"])
            .unwrap();
        assert_eq!(cli.seed, Some(4));
        match cli.subcommand {
            Sub::Replay { file, each } => {
                assert_eq!(file, Some(PathBuf::from("events.jsonl")));
                assert!(each);
            }
            _ => panic!("expected replay"),
        }
    }
}
