//! Grid layout engine.
//!
//! Converts free-form pointer coordinates into grid-aligned placement
//! coordinates and issues placed components with fresh identifiers.

use boardsim_types::{ComponentKind, GridSpec, LayoutError, PlacedComponent, Point};

/// Snap a point to the nearest grid intersection.
///
/// Each coordinate becomes the nearest integer multiple of `spec.cell_size`,
/// with ties rounding away from zero. Snapping is idempotent.
///
/// `spec.cell_size` must be positive; [`GridSpec::new`] enforces this.
pub fn snap(point: Point, spec: &GridSpec) -> Point {
    Point::new(spec.snap_value(point.x), spec.snap_value(point.y))
}

/// Issues grid-aligned components with identifiers unique for the engine's lifetime
#[derive(Debug, Clone, Default)]
pub struct GridLayoutEngine {
    /// ID counter for generating unique IDs
    id_counter: u64,
}

impl GridLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that never reissues any of `existing` ids.
    ///
    /// IDs of the form `{prefix}-{n}` advance the counter past `n`; other
    /// IDs cannot collide with generated ones and are ignored.
    pub fn resuming_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let id_counter = existing
            .into_iter()
            .filter_map(|id| id.rsplit_once('-'))
            .filter_map(|(_, n)| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { id_counter }
    }

    /// Generate a unique ID
    pub fn generate_id(&mut self, prefix: &str) -> Result<String, LayoutError> {
        self.id_counter = self
            .id_counter
            .checked_add(1)
            .ok_or(LayoutError::IdsExhausted)?;
        Ok(format!("{}-{}", prefix, self.id_counter))
    }

    /// Create a component of `kind` at `raw_point` snapped to the grid.
    ///
    /// The caller owns the board and is responsible for inserting the result.
    /// Fails only once the ID counter is exhausted.
    pub fn place(
        &mut self,
        kind: ComponentKind,
        raw_point: Point,
        spec: &GridSpec,
    ) -> Result<PlacedComponent, LayoutError> {
        let position = snap(raw_point, spec);
        let id = self.generate_id("component")?;
        log::info!("placed {} {} at ({}, {})", kind, id, position.x, position.y);
        Ok(PlacedComponent::new(id, kind, position))
    }
}
