//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::parse_point;
use crate::output::Formatter;
use strata_core::{Partitioner, Point};

/// Execute the compare command, returning the rendered relation.
pub fn execute_compare(args: CompareArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let a = Point::new(parse_point(&args.a)?)?;
    let b = Point::new(parse_point(&args.b)?)?;

    let partition_config = config.partition_config(a.dimension(), &args.minimize, false)?;
    let relation = Partitioner::new(partition_config).compare(&a, &b)?;

    formatter.format_dominance(&a, &b, relation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use strata_core::PartitionError;

    fn compare(a: &str, b: &str, minimize: Vec<usize>) -> Result<String> {
        let args = CompareArgs {
            a: a.to_string(),
            b: b.to_string(),
            minimize,
        };
        execute_compare(args, &Config::default(), &Formatter::new(OutputFormat::Quiet, false))
    }

    #[test]
    fn test_compare_relations() {
        assert_eq!(compare("0.98,0.81,0.91", "0.95,0.80,0.42", vec![]).unwrap(), "dominates");
        assert_eq!(compare("0.94,0.90,0.21", "0.98,0.81,0.91", vec![]).unwrap(), "incomparable");
        assert_eq!(compare("1,5", "2,1", vec![1]).unwrap(), "dominated by");
    }

    #[test]
    fn test_compare_dimension_mismatch() {
        let err = compare("1,2", "1,2,3", vec![]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Partition(PartitionError::InvalidDimension { .. })
        ));
    }
}
