//! Board settings.

use serde::{Deserialize, Serialize};

use crate::{GridSpec, LayoutError, GRID_SIZE};

/// Editor configuration stored alongside a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Grid cell size for snapping
    pub cell_size: f32,

    /// Snap drag previews and moves to the grid while the pointer moves
    pub snap_while_dragging: bool,

    /// Grid cells a valve click pushes the piston
    pub valve_nudge_cells: u32,

    /// Maximum pointer distance for hitting a connection point
    pub connection_snap_radius: f32,

    /// Maximum undo stack size
    pub max_undo: usize,
}

impl BoardSettings {
    /// Build the grid spec described by these settings
    pub fn grid(&self) -> Result<GridSpec, LayoutError> {
        GridSpec::new(self.cell_size)
    }

    /// Distance a valve click moves the piston
    pub fn nudge_distance(&self) -> f32 {
        self.valve_nudge_cells as f32 * self.cell_size
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            cell_size: GRID_SIZE,
            snap_while_dragging: true,
            valve_nudge_cells: 1,
            connection_snap_radius: 15.0,
            max_undo: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nudge_matches_grid() {
        let settings = BoardSettings::default();
        assert_eq!(settings.nudge_distance(), 10.0);
        assert!(settings.grid().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: BoardSettings = serde_json::from_str(r#"{"cell_size": 40.0}"#).unwrap();
        assert_eq!(settings.cell_size, 40.0);
        assert_eq!(settings.max_undo, 50);
        assert_eq!(settings.nudge_distance(), 40.0);
    }
}
