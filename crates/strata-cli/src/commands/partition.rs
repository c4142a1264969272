//! Partition command implementation.

use crate::cli::PartitionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{parse_rows, read_source, round_rows};
use crate::output::Formatter;
use strata_core::{FrontierResult, PartitionError, Partitioner};
use tracing::info;

/// Execute the partition command, returning the rendered layers.
pub fn execute_partition(args: PartitionArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let text = read_source(&args.input)?;
    let result = partition_text(&text, &args, config)?;
    formatter.format_layers(&result)
}

/// Parse, preprocess and partition input text.
pub fn partition_text(text: &str, args: &PartitionArgs, config: &Config) -> Result<FrontierResult> {
    let mut rows = parse_rows(text)?;
    if rows.is_empty() {
        return Err(PartitionError::EmptyInput.into());
    }

    if let Some(decimals) = args.round.or(config.input.round_decimals) {
        round_rows(&mut rows, decimals);
    }

    let dimension = rows[0].len();
    let partition_config = config.partition_config(dimension, &args.minimize, args.no_dedup)?;
    info!(rows = rows.len(), dimension, "Partitioning input");

    Ok(Partitioner::new(partition_config).partition_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args() -> PartitionArgs {
        PartitionArgs {
            input: "-".to_string(),
            minimize: Vec::new(),
            round: None,
            no_dedup: false,
        }
    }

    #[test]
    fn test_partition_text() {
        let result = partition_text("1,3\n3,1\n0,0\n", &args(), &Config::default()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.groups()[0].source_indices(), vec![0, 1]);
    }

    #[test]
    fn test_empty_text() {
        let err = partition_text("# nothing here\n", &args(), &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Partition(PartitionError::EmptyInput)));
    }

    #[test]
    fn test_rounding_merges_near_duplicates() {
        let mut args = args();
        args.round = Some(1);
        let result = partition_text("0.51,0.5\n0.49,0.5\n", &args, &Config::default()).unwrap();
        assert_eq!(result.total_points(), 1);
        assert_eq!(result.duplicates().len(), 1);
    }

    #[test]
    fn test_config_rounding_used_without_flag() {
        let mut config = Config::default();
        config.input.round_decimals = Some(0);
        let result = partition_text("1.2\n0.8\n", &args(), &config).unwrap();
        assert_eq!(result.total_points(), 1);
    }

    #[test]
    fn test_rounding_never_invents_non_finite_values() {
        let mut args = args();
        args.round = Some(400);
        let result = partition_text("0.5,0.25\n0.1,0.9\n", &args, &Config::default()).unwrap();
        assert_eq!(result.len(), 1);

        args.round = Some(10);
        let result = partition_text("1e300,1\n2e300,0\n", &args, &Config::default()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.total_points(), 2);
    }
}
