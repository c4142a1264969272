//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use strata_core::{Dominance, FrontierResult, Point};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format frontier layers.
    pub fn format_layers(&self, result: &FrontierResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_layers_json(result),
            OutputFormat::Table => Ok(self.format_layers_table(result)),
            OutputFormat::Quiet => Ok(self.format_layers_quiet(result)),
        }
    }

    /// Format layers as JSON.
    fn format_layers_json(&self, result: &FrontierResult) -> Result<String> {
        let layers: Vec<serde_json::Value> = result
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let points: Vec<serde_json::Value> = group
                    .members()
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "index": m.source_index,
                            "features": m.point.features(),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "rank": i + 1,
                    "points": points,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&layers)?)
    }

    /// Format layers as a table, one row per point.
    fn format_layers_table(&self, result: &FrontierResult) -> String {
        let dimension = result
            .groups()
            .first()
            .and_then(|g| g.points().next())
            .map_or(0, Point::dimension);

        let mut builder = Builder::default();
        let mut header = vec!["Rank".to_string(), "Index".to_string()];
        header.extend((0..dimension).map(|i| format!("f{}", i)));
        builder.push_record(header);

        for (i, group) in result.iter().enumerate() {
            for member in group.members() {
                let mut record = vec![(i + 1).to_string(), member.source_index.to_string()];
                record.extend(member.point.features().iter().map(|v| v.to_string()));
                builder.push_record(record);
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut summary = format!(
            "{} layer(s), {} point(s)",
            result.len(),
            result.total_points()
        );
        if !result.duplicates().is_empty() {
            summary.push_str(&format!(", {} duplicate(s) removed", result.duplicates().len()));
        }

        format!("{}\n{}", table, self.info(&summary))
    }

    /// Format layers in quiet mode (source indices, one layer per line).
    fn format_layers_quiet(&self, result: &FrontierResult) -> String {
        result
            .iter()
            .map(|g| {
                g.source_indices()
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the dominance relation between two points.
    pub fn format_dominance(&self, a: &Point, b: &Point, relation: Dominance) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "a": a,
                "b": b,
                "relation": relation,
            }))?),
            OutputFormat::Quiet => Ok(relation.as_str().to_string()),
            OutputFormat::Table => {
                let color = match relation {
                    Dominance::Dominates => "green",
                    Dominance::DominatedBy => "red",
                    Dominance::Incomparable => "yellow",
                };
                Ok(format!("{} {} {}", a, self.colorize(relation.as_str(), color), b))
            }
        }
    }

    /// Format plain rows (deduplicated input).
    pub fn format_points(&self, points: &[Point]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(points
                .iter()
                .map(|p| {
                    p.features()
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
