//! Frontier extraction and layered partitioning

use crate::config::{Objective, PartitionConfig};
use crate::dedup::{dedup_indexed, Duplicate};
use crate::dominance::{compare_with, relation, Dominance};
use crate::error::{PartitionError, Result};
use crate::point::{validate_rows, IndexedPoint, Point, PointSet};
use serde::Serialize;
use tracing::{debug, info, trace};

/// One frontier layer: points sharing a dominance rank
///
/// Members are mutually non-dominated. Their order is the order in which they
/// were accepted into the layer, which is stable for a given input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    members: Vec<IndexedPoint>,
}

impl Group {
    /// Number of points in the layer
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the layer is empty (never true for partitioner output)
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members with their input indices, in acceptance order
    pub fn members(&self) -> &[IndexedPoint] {
        &self.members
    }

    /// Points in acceptance order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.members.iter().map(|m| &m.point)
    }

    /// Input indices of the members, in acceptance order
    pub fn source_indices(&self) -> Vec<usize> {
        self.members.iter().map(|m| m.source_index).collect()
    }

    /// Whether a value-equal point is in this layer
    pub fn contains(&self, point: &Point) -> bool {
        self.members.iter().any(|m| &m.point == point)
    }
}

/// Ordered frontier layers, best layer first
///
/// Covers every point of the partitioned input exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierResult {
    groups: Vec<Group>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    duplicates: Vec<Duplicate>,
}

impl FrontierResult {
    /// Layers in rank order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Consume the result, keeping only the layers
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no layers (never true for partitioner output)
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over layers in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Layer with 1-based rank `rank`
    pub fn group(&self, rank: usize) -> Option<&Group> {
        rank.checked_sub(1).and_then(|i| self.groups.get(i))
    }

    /// Total number of partitioned points (duplicates excluded)
    pub fn total_points(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Rows dropped as duplicates before partitioning
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    /// 1-based rank of the input row at `source_index`
    ///
    /// Rows removed as duplicates report the rank of the row they duplicate.
    pub fn rank_of(&self, source_index: usize) -> Option<usize> {
        let target = self
            .duplicates
            .iter()
            .find(|d| d.source_index == source_index)
            .map_or(source_index, |d| d.kept_index);

        self.groups
            .iter()
            .position(|g| g.members.iter().any(|m| m.source_index == target))
            .map(|i| i + 1)
    }

    /// `(source_index, rank)` for every input row, sorted by input index
    pub fn ranks(&self) -> Vec<(usize, usize)> {
        let mut ranks: Vec<(usize, usize)> = self
            .groups
            .iter()
            .enumerate()
            .flat_map(|(i, g)| g.members.iter().map(move |m| (m.source_index, i + 1)))
            .collect();

        let kept = ranks.clone();
        for duplicate in &self.duplicates {
            if let Some(&(_, rank)) = kept.iter().find(|(index, _)| *index == duplicate.kept_index) {
                ranks.push((duplicate.source_index, rank));
            }
        }

        ranks.sort_unstable();
        ranks
    }
}

impl<'a> IntoIterator for &'a FrontierResult {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Split off the top frontier layer of `points`
///
/// Returns `(layer, remainder)`: the layer in acceptance order and the
/// remainder in input order. `points` must be non-empty.
///
/// The first point seeds the layer. Each later point is rejected if any
/// member dominates it; otherwise it joins and evicts every member it
/// dominates. Exact duplicates neither reject nor evict each other, so
/// identical points always share a layer.
pub(crate) fn split_frontier(
    points: Vec<IndexedPoint>,
    objectives: &[Objective],
) -> (Vec<IndexedPoint>, Vec<IndexedPoint>) {
    let mut layer: Vec<usize> = vec![0];

    for (candidate, entry) in points.iter().enumerate().skip(1) {
        let p = &entry.point;
        let mut rejected = false;
        let mut evicted: Vec<usize> = Vec::new();

        for (slot, &member) in layer.iter().enumerate() {
            let m = &points[member].point;
            if p == m {
                continue;
            }
            match relation(p.features(), m.features(), objectives) {
                Dominance::DominatedBy => {
                    rejected = true;
                    break;
                }
                Dominance::Dominates => evicted.push(slot),
                Dominance::Incomparable => {}
            }
        }

        if rejected {
            continue;
        }

        layer.push(candidate);
        if !evicted.is_empty() {
            trace!(
                candidate = entry.source_index,
                evicted = evicted.len(),
                "Candidate superseded layer members"
            );
            layer = layer
                .into_iter()
                .enumerate()
                .filter(|(slot, _)| !evicted.contains(slot))
                .map(|(_, member)| member)
                .collect();
        }
    }

    let mut slots: Vec<Option<IndexedPoint>> = points.into_iter().map(Some).collect();
    let frontier: Vec<IndexedPoint> = layer.iter().filter_map(|&i| slots[i].take()).collect();
    let remainder: Vec<IndexedPoint> = slots.into_iter().flatten().collect();

    (frontier, remainder)
}

/// Partitions points into successive Pareto frontier layers
///
/// Stateless apart from its configuration; each call owns its input and
/// returns an owned result.
///
/// # Examples
///
/// ```
/// use strata_core::{Partitioner, PartitionConfig, PointSet};
///
/// let set = PointSet::from_rows(vec![
///     vec![1.0, 3.0],
///     vec![3.0, 1.0],
///     vec![0.5, 0.5],
/// ]).unwrap();
///
/// let partitioner = Partitioner::new(PartitionConfig::default());
/// let result = partitioner.partition(set).unwrap();
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.rank_of(2), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    /// Create a new Partitioner with the given configuration
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    /// Create a Partitioner with default configuration
    pub fn default_config() -> Self {
        Self::new(PartitionConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Compare two points under the configured objectives
    pub fn compare(&self, a: &Point, b: &Point) -> Result<Dominance> {
        compare_with(a, b, &self.config.objectives)
    }

    /// Extract the top frontier layer, returning it with the remaining points
    pub fn extract_frontier(&self, set: PointSet) -> Result<(Group, PointSet)> {
        let (points, dimension, duplicates) = set.into_parts();
        if points.is_empty() {
            return Err(PartitionError::EmptyInput);
        }
        self.check_objectives(dimension)?;

        let (frontier, remainder) = split_frontier(points, &self.config.objectives);
        Ok((
            Group { members: frontier },
            PointSet::from_parts(remainder, dimension, duplicates),
        ))
    }

    /// Partition a point set into frontier layers
    ///
    /// Fails with [`PartitionError::EmptyInput`] on an empty set.
    pub fn partition(&self, set: PointSet) -> Result<FrontierResult> {
        let (points, dimension, duplicates) = set.into_parts();
        self.run(points, dimension, duplicates)
    }

    /// Validate raw rows and partition them
    ///
    /// Rows are deduplicated first unless the configuration disables it.
    pub fn partition_rows<I>(&self, rows: I) -> Result<FrontierResult>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let (points, dimension) = validate_rows(rows)?;
        let (points, duplicates) = if self.config.dedup {
            dedup_indexed(points)
        } else {
            (points, Vec::new())
        };
        self.run(points, dimension, duplicates)
    }

    fn run(
        &self,
        points: Vec<IndexedPoint>,
        dimension: Option<usize>,
        duplicates: Vec<Duplicate>,
    ) -> Result<FrontierResult> {
        if points.is_empty() {
            return Err(PartitionError::EmptyInput);
        }
        self.check_objectives(dimension)?;

        let total = points.len();
        let mut remaining = points;
        let mut groups = Vec::new();

        while !remaining.is_empty() {
            let (frontier, rest) = split_frontier(remaining, &self.config.objectives);
            debug!(
                layer = groups.len() + 1,
                size = frontier.len(),
                remaining = rest.len(),
                "Extracted frontier layer"
            );
            groups.push(Group { members: frontier });
            remaining = rest;
        }

        info!(
            points = total,
            layers = groups.len(),
            duplicates = duplicates.len(),
            "Partitioned points into frontier layers"
        );

        Ok(FrontierResult { groups, duplicates })
    }

    fn check_objectives(&self, dimension: Option<usize>) -> Result<()> {
        let found = self.config.objectives.len();
        match dimension {
            Some(expected) if found != 0 && found != expected => {
                Err(PartitionError::ObjectiveMismatch { expected, found })
            }
            _ => Ok(()),
        }
    }
}

/// Partition a point set with every feature maximized
pub fn partition(set: PointSet) -> Result<FrontierResult> {
    Partitioner::default_config().partition(set)
}

/// Extract the top frontier layer with every feature maximized
pub fn extract_frontier(set: PointSet) -> Result<(Group, PointSet)> {
    Partitioner::default_config().extract_frontier(set)
}
