//! Duplicate elimination ahead of partitioning
//!
//! Equality is exact across every feature. Callers that want tolerance-based
//! matching must round their values first.

use crate::point::{IndexedPoint, Point};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// An input row dropped because an earlier row had identical features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    /// Input index of the dropped row
    pub source_index: usize,
    /// Input index of the first row with the same features
    pub kept_index: usize,
}

/// Remove value-equal points, keeping the first occurrence of each
///
/// # Examples
///
/// ```
/// use strata_core::{dedup, Point};
///
/// let points = vec![
///     Point::new(vec![1.0, 2.0]).unwrap(),
///     Point::new(vec![1.0, 2.0]).unwrap(),
///     Point::new(vec![2.0, 1.0]).unwrap(),
/// ];
/// assert_eq!(dedup(points).len(), 2);
/// ```
pub fn dedup<I>(points: I) -> Vec<Point>
where
    I: IntoIterator<Item = Point>,
{
    let indexed = points
        .into_iter()
        .enumerate()
        .map(|(source_index, point)| IndexedPoint {
            source_index,
            point,
        })
        .collect();
    let (kept, _) = dedup_indexed(indexed);
    kept.into_iter().map(|p| p.point).collect()
}

pub(crate) fn dedup_indexed(points: Vec<IndexedPoint>) -> (Vec<IndexedPoint>, Vec<Duplicate>) {
    let mut seen: HashMap<Vec<u64>, usize> = HashMap::with_capacity(points.len());
    let mut kept = Vec::with_capacity(points.len());
    let mut dropped = Vec::new();

    for entry in points {
        match seen.entry(entry.point.key()) {
            Entry::Occupied(first) => dropped.push(Duplicate {
                source_index: entry.source_index,
                kept_index: *first.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(entry.source_index);
                kept.push(entry);
            }
        }
    }

    if !dropped.is_empty() {
        debug!(
            kept = kept.len(),
            dropped = dropped.len(),
            "Removed duplicate points"
        );
    }

    (kept, dropped)
}
