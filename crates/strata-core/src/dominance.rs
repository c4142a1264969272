//! Dominance comparison between two points

use crate::config::Objective;
use crate::error::{PartitionError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing point `a` against point `b`
///
/// Dominance is weak: `a` dominates `b` when it is at least as good on every
/// feature. Identical points satisfy both directions and are reported as
/// [`Dominance::Dominates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dominance {
    /// `a` is at least as good as `b` on every feature
    Dominates,

    /// `a` is no better than `b` on every feature, and worse on at least one
    DominatedBy,

    /// Some features favor `a`, others favor `b`
    Incomparable,
}

impl Dominance {
    /// The same relation seen from `b`'s side
    pub fn reverse(self) -> Self {
        match self {
            Dominance::Dominates => Dominance::DominatedBy,
            Dominance::DominatedBy => Dominance::Dominates,
            Dominance::Incomparable => Dominance::Incomparable,
        }
    }

    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Dominance::Dominates => "dominates",
            Dominance::DominatedBy => "dominated by",
            Dominance::Incomparable => "incomparable",
        }
    }
}

impl fmt::Display for Dominance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two points with every feature maximized
///
/// # Examples
///
/// ```
/// use strata_core::{compare, Dominance, Point};
///
/// let a = Point::new(vec![0.98, 0.81, 0.91]).unwrap();
/// let b = Point::new(vec![0.95, 0.80, 0.42]).unwrap();
/// assert_eq!(compare(&a, &b).unwrap(), Dominance::Dominates);
/// assert_eq!(compare(&b, &a).unwrap(), Dominance::DominatedBy);
/// ```
pub fn compare(a: &Point, b: &Point) -> Result<Dominance> {
    compare_with(a, b, &[])
}

/// Compare two points under per-feature objectives
///
/// An empty objective slice maximizes every feature; otherwise its length
/// must equal the points' dimensionality.
///
/// A dimensionality mismatch is reported as
/// [`PartitionError::InvalidDimension`] with `index` 1, naming operand `b`
/// as the offender against `a`'s dimensionality.
pub fn compare_with(a: &Point, b: &Point, objectives: &[Objective]) -> Result<Dominance> {
    if a.dimension() != b.dimension() {
        // Operand `b`
        return Err(PartitionError::InvalidDimension {
            index: 1,
            expected: a.dimension(),
            found: b.dimension(),
        });
    }
    if !objectives.is_empty() && objectives.len() != a.dimension() {
        return Err(PartitionError::ObjectiveMismatch {
            expected: a.dimension(),
            found: objectives.len(),
        });
    }
    Ok(relation(a.features(), b.features(), objectives))
}

/// Weak dominance over equal-length feature slices
///
/// Features beyond the end of `objectives` are maximized.
pub(crate) fn relation(a: &[f64], b: &[f64], objectives: &[Objective]) -> Dominance {
    let mut no_worse = true;
    let mut no_better = true;

    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        let (x, y) = match objectives.get(i).copied().unwrap_or_default() {
            Objective::Maximize => (x, y),
            Objective::Minimize => (y, x),
        };
        no_worse &= x >= y;
        no_better &= x <= y;
        if !no_worse && !no_better {
            return Dominance::Incomparable;
        }
    }

    if no_worse {
        Dominance::Dominates
    } else if no_better {
        Dominance::DominatedBy
    } else {
        Dominance::Incomparable
    }
}
