//! Point module - the N-feature values being ranked

use crate::dedup::{dedup_indexed, Duplicate};
use crate::error::{PartitionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable, fixed-length sequence of real-valued features
///
/// Every feature is finite; NaN and infinities are rejected at construction
/// so dominance comparisons are always meaningful. Equality is exact
/// value-wise equality across all features (`-0.0 == 0.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Point {
    features: Vec<f64>,
}

impl Point {
    /// Create a point from raw feature values
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::Point;
    ///
    /// let point = Point::new(vec![0.5, 0.75]).unwrap();
    /// assert_eq!(point.dimension(), 2);
    /// assert!(Point::new(vec![f64::NAN]).is_err());
    /// ```
    pub fn new(features: Vec<f64>) -> Result<Self> {
        Self::at(0, features)
    }

    /// Create a point, reporting errors against input position `index`
    pub(crate) fn at(index: usize, features: Vec<f64>) -> Result<Self> {
        if features.is_empty() {
            return Err(PartitionError::InvalidDimension {
                index,
                expected: 1,
                found: 0,
            });
        }
        if let Some((feature, &value)) = features.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PartitionError::InvalidFeatureValue {
                index,
                feature,
                value,
            });
        }
        Ok(Self { features })
    }

    /// Feature values in order
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Number of features (N)
    pub fn dimension(&self) -> usize {
        self.features.len()
    }

    /// Exact-match key over all features, with `-0.0` folded into `0.0`
    pub(crate) fn key(&self) -> Vec<u64> {
        self.features
            .iter()
            .map(|v| if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
            .collect()
    }
}

// Non-finite values are rejected at construction, so equality is total.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = PartitionError;

    fn try_from(features: Vec<f64>) -> Result<Self> {
        Self::new(features)
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.features
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// A point tagged with its position in the caller's raw input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedPoint {
    /// Index of the row in the original input
    pub source_index: usize,
    /// The point itself
    pub point: Point,
}

/// Validate raw rows into indexed points of one shared dimensionality
///
/// Returns the points in input order together with their dimension. Fails
/// on the first row that is empty, non-finite or has a different length than
/// row 0.
pub(crate) fn validate_rows<I>(rows: I) -> Result<(Vec<IndexedPoint>, Option<usize>)>
where
    I: IntoIterator<Item = Vec<f64>>,
{
    let mut dimension: Option<usize> = None;
    let mut points = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        if let Some(expected) = dimension {
            if row.len() != expected {
                return Err(PartitionError::InvalidDimension {
                    index,
                    expected,
                    found: row.len(),
                });
            }
        }
        let point = Point::at(index, row)?;
        dimension.get_or_insert(point.dimension());
        points.push(IndexedPoint {
            source_index: index,
            point,
        });
    }

    Ok((points, dimension))
}

/// A duplicate-free collection of points sharing one dimensionality
///
/// Built once from caller data and consumed by a single partitioning call.
/// Members keep first-seen order; later value-equal rows are dropped and
/// recorded in [`PointSet::duplicates`].
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<IndexedPoint>,
    dimension: Option<usize>,
    duplicates: Vec<Duplicate>,
}

impl PointSet {
    /// Build a point set from raw rows, validating and deduplicating them
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::PointSet;
    ///
    /// let set = PointSet::from_rows(vec![
    ///     vec![1.0, 2.0],
    ///     vec![2.0, 1.0],
    ///     vec![1.0, 2.0],
    /// ]).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.duplicates().len(), 1);
    /// ```
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let (points, dimension) = validate_rows(rows)?;
        let (points, duplicates) = dedup_indexed(points);
        Ok(Self {
            points,
            dimension,
            duplicates,
        })
    }

    /// Build a point set from already-constructed points
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::from_rows(points.into_iter().map(Vec::from))
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shared feature count, or `None` for an empty set
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Iterate over members in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &IndexedPoint> {
        self.points.iter()
    }

    /// Input rows dropped as exact duplicates of an earlier row
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    pub(crate) fn into_parts(self) -> (Vec<IndexedPoint>, Option<usize>, Vec<Duplicate>) {
        (self.points, self.dimension, self.duplicates)
    }

    pub(crate) fn from_parts(
        points: Vec<IndexedPoint>,
        dimension: Option<usize>,
        duplicates: Vec<Duplicate>,
    ) -> Self {
        Self {
            points,
            dimension,
            duplicates,
        }
    }
}
