//! Property tests for layered frontier partitioning

use proptest::prelude::*;
use strata_core::{
    compare, Dominance, FrontierResult, Objective, PartitionConfig, Partitioner, Point, PointSet,
};

/// Rows drawn from a coarse grid so ties and duplicates are common
fn rows_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=4).prop_flat_map(|dimension| {
        prop::collection::vec(
            prop::collection::vec((0u8..6).prop_map(f64::from), dimension),
            1..40,
        )
    })
}

fn dominates(a: &Point, b: &Point) -> bool {
    a != b && compare(a, b).unwrap() == Dominance::Dominates
}

/// Reference layering straight from the definition: a layer is every
/// remaining point that no other remaining point dominates.
fn reference_layers(points: &[(usize, Point)]) -> Vec<Vec<usize>> {
    let mut remaining: Vec<&(usize, Point)> = points.iter().collect();
    let mut layers = Vec::new();

    while !remaining.is_empty() {
        let (layer, rest): (Vec<&(usize, Point)>, Vec<&(usize, Point)>) =
            remaining
                .iter()
                .copied()
                .partition(|(_, p)| !remaining.iter().any(|(_, q)| dominates(q, p)));
        let mut indices: Vec<usize> = layer.iter().map(|(i, _)| *i).collect();
        indices.sort_unstable();
        layers.push(indices);
        remaining = rest;
    }

    layers
}

fn sorted_layers(result: &FrontierResult) -> Vec<Vec<usize>> {
    result
        .iter()
        .map(|g| {
            let mut indices = g.source_indices();
            indices.sort_unstable();
            indices
        })
        .collect()
}

proptest! {
    /// Property: every input point lands in exactly one layer
    #[test]
    fn test_coverage(rows in rows_strategy()) {
        let set = PointSet::from_rows(rows).unwrap();
        let mut expected: Vec<usize> = set.iter().map(|p| p.source_index).collect();
        expected.sort_unstable();

        let result = Partitioner::default_config().partition(set).unwrap();
        let mut covered: Vec<usize> = result.iter().flat_map(|g| g.source_indices()).collect();
        covered.sort_unstable();

        prop_assert_eq!(covered, expected);
        prop_assert!(result.iter().all(|g| !g.is_empty()));
    }

    /// Property: no member of a layer dominates another member
    #[test]
    fn test_layers_are_non_dominated(rows in rows_strategy()) {
        let result = Partitioner::default_config().partition_rows(rows).unwrap();

        for group in &result {
            let points: Vec<&Point> = group.points().collect();
            for a in &points {
                for b in &points {
                    prop_assert!(!dominates(a, b), "{} dominates {} in one layer", a, b);
                }
            }
        }
    }

    /// Property: a later layer never dominates an earlier one, and every
    /// point after layer 1 is dominated by something in the layer before it
    #[test]
    fn test_layer_ordering(rows in rows_strategy()) {
        let result = Partitioner::default_config().partition_rows(rows).unwrap();
        let groups = result.groups();

        for (i, upper) in groups.iter().enumerate() {
            for lower in &groups[i + 1..] {
                for q in lower.points() {
                    for p in upper.points() {
                        prop_assert!(!dominates(q, p));
                    }
                }
            }
        }

        for pair in groups.windows(2) {
            for q in pair[1].points() {
                prop_assert!(pair[0].points().any(|p| dominates(p, q)));
            }
        }
    }

    /// Property: layers match the definition-based reference layering
    #[test]
    fn test_matches_reference(rows in rows_strategy()) {
        let set = PointSet::from_rows(rows).unwrap();
        let points: Vec<(usize, Point)> = set
            .iter()
            .map(|p| (p.source_index, p.point.clone()))
            .collect();

        let result = Partitioner::default_config().partition(set).unwrap();
        prop_assert_eq!(sorted_layers(&result), reference_layers(&points));
    }

    /// Property: identical input order gives identical output
    #[test]
    fn test_determinism(rows in rows_strategy()) {
        let partitioner = Partitioner::default_config();
        let first = partitioner.partition_rows(rows.clone()).unwrap();
        let second = partitioner.partition_rows(rows).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: minimizing every feature equals maximizing the negated rows
    #[test]
    fn test_minimize_matches_negation(rows in rows_strategy()) {
        let dimension = rows[0].len();
        let negated: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().map(|v| -v).collect())
            .collect();

        let minimizing = Partitioner::new(PartitionConfig::with_objectives(
            vec![Objective::Minimize; dimension],
        ));
        let lhs = minimizing.partition_rows(rows).unwrap();
        let rhs = Partitioner::default_config().partition_rows(negated).unwrap();

        prop_assert_eq!(sorted_layers(&lhs), sorted_layers(&rhs));
    }

    /// Property: layer count is bounded by the number of distinct points
    #[test]
    fn test_terminates_within_point_count(rows in rows_strategy()) {
        let result = Partitioner::default_config().partition_rows(rows).unwrap();
        prop_assert!(result.len() <= result.total_points());
    }
}
