//! Board types.

use serde::{Deserialize, Serialize};

use crate::{BoardSettings, Cable, ConnectionRef, PlacedComponent, Point};

/// A board holding placed components and the cables between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Placed components in insertion order (render z-order)
    pub components: Vec<PlacedComponent>,

    /// Cables between connection points
    #[serde(default)]
    pub cables: Vec<Cable>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component on top of the z-order
    pub fn add_component(&mut self, component: PlacedComponent) {
        self.components.push(component);
    }

    /// Get a component by ID
    pub fn get_component(&self, id: &str) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Get a mutable component by ID
    pub fn get_component_mut(&mut self, id: &str) -> Option<&mut PlacedComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Re-resolve every component's behavior from the kind table
    pub fn resolve_behaviors(&mut self) {
        for component in &mut self.components {
            component.behavior = component.kind.definition().behavior;
        }
    }

    /// Resolve a connection point to its board position
    pub fn connection_point_position(&self, point: &ConnectionRef) -> Option<Point> {
        self.get_component(&point.component_id)?
            .connection_point(point.index)
    }

    /// Iterate over every connection point on the board with its position
    pub fn connection_points(&self) -> impl Iterator<Item = (ConnectionRef, Point)> + '_ {
        self.components.iter().flat_map(|component| {
            (0..component.connection_point_count()).filter_map(move |index| {
                component
                    .connection_point(index)
                    .map(|pos| (ConnectionRef::new(component.id.clone(), index), pos))
            })
        })
    }

    /// Add a cable
    pub fn add_cable(&mut self, cable: Cable) {
        self.cables.push(cable);
    }

    /// Get a cable by ID
    pub fn get_cable(&self, id: &str) -> Option<&Cable> {
        self.cables.iter().find(|c| c.id == id)
    }

    /// Get cables attached to a specific component
    pub fn cables_touching(&self, component_id: &str) -> Vec<&Cable> {
        self.cables
            .iter()
            .filter(|c| c.touches(component_id))
            .collect()
    }

    /// IDs of every component and cable on the board
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.cables.iter().map(|c| c.id.as_str()))
    }
}

/// Complete file format for saving/loading boards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardFile {
    /// File format version
    pub version: String,

    /// The board
    pub board: Board,

    /// Editor settings
    #[serde(default)]
    pub settings: BoardSettings,
}

impl BoardFile {
    /// Current file format version
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(board: Board, settings: BoardSettings) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            board,
            settings,
        }
    }

    /// Load from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for BoardFile {
    fn default() -> Self {
        Self::new(Board::new(), BoardSettings::default())
    }
}
