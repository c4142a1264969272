//! Dedup command implementation.

use crate::cli::DedupArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{parse_rows, read_source, round_rows};
use crate::output::Formatter;
use strata_core::{Point, PointSet};
use tracing::info;

/// Execute the dedup command, returning the rendered unique rows.
pub fn execute_dedup(args: DedupArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let text = read_source(&args.input)?;
    let points = dedup_text(&text, args.round.or(config.input.round_decimals))?;
    formatter.format_points(&points)
}

/// Parse input text and drop exact duplicate rows, keeping first-seen order.
pub fn dedup_text(text: &str, round: Option<u32>) -> Result<Vec<Point>> {
    let mut rows = parse_rows(text)?;
    if let Some(decimals) = round {
        round_rows(&mut rows, decimals);
    }

    let set = PointSet::from_rows(rows)?;
    if !set.duplicates().is_empty() {
        info!(kept = set.len(), dropped = set.duplicates().len(), "Dropped duplicate rows");
    }

    Ok(set.iter().map(|p| p.point.clone()).collect())
}
