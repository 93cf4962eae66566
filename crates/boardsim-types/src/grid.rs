//! Grid specification for snapping board coordinates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GRID_SIZE;

/// Errors raised when building a grid specification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Grid cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("Identifier counter exhausted")]
    IdsExhausted,
}

/// Square grid used to align component placement.
///
/// `cell_size` must be positive and finite. [`GridSpec::new`] checks this;
/// struct literals are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cell_size: f32,
}

impl GridSpec {
    /// Create a grid spec, rejecting non-positive or non-finite cell sizes
    pub fn new(cell_size: f32) -> Result<Self, LayoutError> {
        if cell_size.is_finite() && cell_size > 0.0 {
            Ok(Self { cell_size })
        } else {
            Err(LayoutError::InvalidCellSize(cell_size))
        }
    }

    /// Snap a single coordinate to the nearest multiple of the cell size.
    ///
    /// Ties round away from zero (`f32::round`).
    pub fn snap_value(&self, value: f32) -> f32 {
        debug_assert!(self.cell_size > 0.0, "grid cell size must be positive");
        // `+ 0.0` turns -0.0 into 0.0
        (value / self.cell_size).round() * self.cell_size + 0.0
    }

    /// Check whether a coordinate lies on a grid line, within float rounding
    pub fn is_aligned(&self, value: f32) -> bool {
        let cells = value / self.cell_size;
        let tolerance = (cells.abs() * 4.0 * f32::EPSILON).max(1e-4);
        (cells - cells.round()).abs() <= tolerance
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_size: GRID_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid() {
        assert!(GridSpec::new(10.0).is_ok());
        assert_eq!(GridSpec::new(0.0), Err(LayoutError::InvalidCellSize(0.0)));
        assert!(GridSpec::new(-5.0).is_err());
        assert!(GridSpec::new(f32::NAN).is_err());
        assert!(GridSpec::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_snap_value_rounds_half_away_from_zero() {
        let grid = GridSpec::new(10.0).unwrap();
        assert_eq!(grid.snap_value(5.0), 10.0);
        assert_eq!(grid.snap_value(-5.0), -10.0);
        assert_eq!(grid.snap_value(4.9), 0.0);
        assert_eq!(grid.snap_value(-14.0), -10.0);
    }

    #[test]
    fn test_snap_value_has_no_negative_zero() {
        let grid = GridSpec::new(10.0).unwrap();
        let snapped = grid.snap_value(-4.0);
        assert_eq!(snapped, 0.0);
        assert!(snapped.is_sign_positive());
        assert_eq!(serde_json::to_string(&snapped).unwrap(), "0.0");
    }

    #[test]
    fn test_is_aligned() {
        let grid = GridSpec::new(40.0).unwrap();
        assert!(grid.is_aligned(80.0));
        assert!(grid.is_aligned(-40.0));
        assert!(!grid.is_aligned(50.0));
    }
}
