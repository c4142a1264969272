//! Reading raw numeric rows from files, stdin and arguments.

use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read the whole input source; `-` means stdin.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}

/// Parse rows from text.
///
/// Text starting with `[` is read as a JSON array of number arrays. Anything
/// else is delimited: one row per line, values separated by commas,
/// semicolons or whitespace. Blank lines and `#` comments are skipped, and a
/// leading header line with no numeric fields is ignored.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    let mut rows = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_fields(line);
        if rows.is_empty() && fields.iter().all(|f| f.parse::<f64>().is_err()) {
            tracing::debug!(line = i + 1, "Skipping header row");
            continue;
        }

        let row = fields
            .iter()
            .map(|f| {
                f.parse::<f64>().map_err(|_| CliError::Parse {
                    line: i + 1,
                    message: format!("'{}' is not a number", f),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a single comma separated point from a command-line argument.
pub fn parse_point(arg: &str) -> Result<Vec<f64>> {
    let fields = split_fields(arg);
    if fields.is_empty() {
        return Err(CliError::InvalidInput("Point has no values".to_string()));
    }
    fields
        .iter()
        .map(|f| {
            f.parse::<f64>()
                .map_err(|_| CliError::InvalidInput(format!("'{}' is not a number", f)))
        })
        .collect()
}

/// Decimal places beyond which an `f64` carries no extra precision.
const MAX_ROUND_DECIMALS: u32 = 17;

/// Round every value to `decimals` decimal places.
///
/// Values too large to scale are already exact at that precision and are
/// left unchanged, as is everything when `decimals` exceeds `f64` precision.
pub fn round_rows(rows: &mut [Vec<f64>], decimals: u32) {
    if decimals >= MAX_ROUND_DECIMALS {
        return;
    }
    let Ok(exponent) = i32::try_from(decimals) else {
        return;
    };

    let scale = 10f64.powi(exponent);
    for value in rows.iter_mut().flat_map(|r| r.iter_mut()) {
        let scaled = *value * scale;
        if scaled.is_finite() {
            *value = scaled.round() / scale;
        }
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_rows() {
        let rows = parse_rows("[[0.95, 0.8], [0.5, 0.75]]").unwrap();
        assert_eq!(rows, vec![vec![0.95, 0.8], vec![0.5, 0.75]]);
    }

    #[test]
    fn test_parse_delimited_rows() {
        let text = "\
# scores
quality,recall,cost
0.95, 0.80, 0.42

0.94;0.90;0.21   # trailing comment
0.50 0.75 0.99
";
        let rows = parse_rows(text).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![0.95, 0.80, 0.42],
                vec![0.94, 0.90, 0.21],
                vec![0.50, 0.75, 0.99],
            ]
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_rows("1,2\n3,x\n").unwrap_err();
        match err {
            CliError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("'x'"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_rows_are_passed_through() {
        // Dimension checks belong to the partitioner
        let rows = parse_rows("1,2,3\n4,5\n").unwrap();
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("-1, 2.5,3").unwrap(), vec![-1.0, 2.5, 3.0]);
        assert!(parse_point("").is_err());
        assert!(parse_point("1,a").is_err());
    }

    #[test]
    fn test_round_rows() {
        let mut rows = vec![vec![0.123456, 1.98765]];
        round_rows(&mut rows, 2);
        assert_eq!(rows, vec![vec![0.12, 1.99]]);
    }

    #[test]
    fn test_round_rows_beyond_precision_is_noop() {
        let mut rows = vec![vec![0.5, 0.25], vec![0.1, 0.9]];
        round_rows(&mut rows, 400);
        assert_eq!(rows, vec![vec![0.5, 0.25], vec![0.1, 0.9]]);

        round_rows(&mut rows, u32::MAX);
        assert_eq!(rows, vec![vec![0.5, 0.25], vec![0.1, 0.9]]);
    }

    #[test]
    fn test_round_rows_keeps_huge_values_finite() {
        let mut rows = vec![vec![1e300, 1.04], vec![-2e300, 0.0]];
        round_rows(&mut rows, 10);
        assert_eq!(rows, vec![vec![1e300, 1.04], vec![-2e300, 0.0]]);
        assert!(rows.iter().flatten().all(|v| v.is_finite()));
    }
}
