//! Placed component instances.

use serde::{Deserialize, Serialize};

use crate::{Behavior, ComponentKind, Point};

/// A component instance dropped onto the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    /// Unique identifier for this component
    pub id: String,

    /// Component kind
    pub kind: ComponentKind,

    /// Top-left corner on the board, grid-aligned once placed
    pub position: Point,

    /// Click behavior resolved from the kind table when the instance is created
    /// or loaded. Not persisted.
    #[serde(skip)]
    pub behavior: Behavior,

    /// Simulation flag (lit light, energized relay)
    #[serde(default)]
    pub active: bool,
}

impl PlacedComponent {
    /// Create a component, resolving its behavior from the kind table
    pub fn new(id: String, kind: ComponentKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            behavior: kind.definition().behavior,
            active: false,
        }
    }

    /// Board position of the connection point at `index`
    pub fn connection_point(&self, index: usize) -> Option<Point> {
        self.kind
            .definition()
            .connection_points
            .get(index)
            .map(|offset| self.position + *offset)
    }

    /// Number of connection points on this component
    pub fn connection_point_count(&self) -> usize {
        self.kind.definition().connection_points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_behavior() {
        let light = PlacedComponent::new("component-1".into(), ComponentKind::Light, Point::zero());
        assert_eq!(light.behavior, Behavior::Toggle);
        assert!(!light.active);
    }

    #[test]
    fn test_connection_points_follow_position() {
        let relay = PlacedComponent::new(
            "component-1".into(),
            ComponentKind::Relay,
            Point::new(100.0, 40.0),
        );
        assert_eq!(relay.connection_point_count(), 2);
        assert_eq!(relay.connection_point(0), Some(Point::new(100.0, 60.0)));
        assert_eq!(relay.connection_point(1), Some(Point::new(160.0, 60.0)));
        assert_eq!(relay.connection_point(2), None);
    }
}
