//! Nearest-point selection for hit-testing and snapping.
//!
//! An interactive editor uses this to pick the grip point nearest the
//! cursor out of a candidate list.

use crate::vector::Vector;
use std::fmt;

/// Error from closest-point selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapError {
    /// The candidate list was empty; there is no nearest point.
    EmptyInput,
}

impl fmt::Display for SnapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapError::EmptyInput => {
                write!(f, "closest-point selection on an empty point list")
            }
        }
    }
}

impl std::error::Error for SnapError {}

/// Index of the point in `points` nearest to `reference`.
///
/// Linear scan seeded with infinity and compared with strict `<`, so the
/// first candidate always replaces the seed and ties break to the earliest
/// index.
pub fn closest_index(points: &[Vector], reference: Vector) -> Result<usize, SnapError> {
    if points.is_empty() {
        return Err(SnapError::EmptyInput);
    }

    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, point) in points.iter().enumerate() {
        let distance = point.distance_to(reference);
        if distance < best_distance {
            best_index = index;
            best_distance = distance;
        }
    }

    Ok(best_index)
}

/// The point in `points` nearest to `reference`.
pub fn closest_vector(points: &[Vector], reference: Vector) -> Result<Vector, SnapError> {
    closest_index(points, reference).map(|index| points[index])
}
