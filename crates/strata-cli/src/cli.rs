//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata CLI - Rank points into layered Pareto frontiers.
#[derive(Debug, Parser)]
#[command(name = "strata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STRATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (source indices only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Partition points into frontier layers
    Partition(PartitionArgs),

    /// Show the dominance relation between two points
    Compare(CompareArgs),

    /// Print input rows with exact duplicates removed
    Dedup(DedupArgs),
}

/// Arguments for the partition command.
#[derive(Debug, Parser)]
pub struct PartitionArgs {
    /// Input file (JSON array of arrays, or one comma/space separated row per line); "-" for stdin
    pub input: String,

    /// Zero-based feature indices where smaller is better (e.g. 1,2)
    #[arg(short, long, value_delimiter = ',')]
    pub minimize: Vec<usize>,

    /// Round every value to this many decimal places before deduplication
    #[arg(short, long)]
    pub round: Option<u32>,

    /// Keep exact duplicate rows (they share a layer)
    #[arg(long)]
    pub no_dedup: bool,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// First point, comma separated (e.g. 0.9,0.2,0.4)
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second point, comma separated
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Zero-based feature indices where smaller is better
    #[arg(short, long, value_delimiter = ',')]
    pub minimize: Vec<usize>,
}

/// Arguments for the dedup command.
#[derive(Debug, Parser)]
pub struct DedupArgs {
    /// Input file; "-" for stdin
    pub input: String,

    /// Round every value to this many decimal places first
    #[arg(short, long)]
    pub round: Option<u32>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_command() {
        let cli = Cli::parse_from(["strata", "partition", "points.csv", "--minimize", "1,2"]);
        match cli.command {
            Command::Partition(args) => {
                assert_eq!(args.input, "points.csv");
                assert_eq!(args.minimize, vec![1, 2]);
                assert!(!args.no_dedup);
            }
            _ => panic!("Expected Partition command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["strata", "dedup", "-", "--format", "json", "-vv"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_compare_accepts_negative_values() {
        let cli = Cli::parse_from(["strata", "compare", "-1,2", "0,-3"]);
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.a, "-1,2");
                assert_eq!(args.b, "0,-3");
            }
            _ => panic!("Expected Compare command"),
        }
    }
}
