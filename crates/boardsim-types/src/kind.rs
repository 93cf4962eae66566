//! Component kinds and their capability table.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Kind of a component that can be dragged from the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Relay,
    Piston,
    Valve,
    Light,
    Cable,
}

impl ComponentKind {
    /// Every kind offered by the palette, in palette order
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Button,
        ComponentKind::Relay,
        ComponentKind::Piston,
        ComponentKind::Valve,
        ComponentKind::Light,
        ComponentKind::Cable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Relay => "relay",
            ComponentKind::Piston => "piston",
            ComponentKind::Valve => "valve",
            ComponentKind::Light => "light",
            ComponentKind::Cable => "cable",
        }
    }

    /// Look up the capability table entry for this kind
    pub fn definition(&self) -> &'static KindDefinition {
        match self {
            ComponentKind::Button => &BUTTON,
            ComponentKind::Relay => &RELAY,
            ComponentKind::Piston => &PISTON,
            ComponentKind::Valve => &VALVE,
            ComponentKind::Light => &LIGHT,
            ComponentKind::Cable => &CABLE,
        }
    }

    /// Cables are attached between connection points rather than placed
    pub fn is_cable(&self) -> bool {
        matches!(self, ComponentKind::Cable)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a component does when clicked during simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// No click behavior
    #[default]
    Inert,
    /// Click flips the component's active flag (lit light, energized relay)
    Toggle,
    /// Registers as the board's nudge target
    Actuator,
    /// Click pushes the registered actuator one step to the right
    Nudge,
}

/// Capability table entry describing a component kind
#[derive(Debug, Clone, PartialEq)]
pub struct KindDefinition {
    pub kind: ComponentKind,

    /// Footprint width in board units
    pub width: f32,

    /// Footprint height in board units
    pub height: f32,

    /// Cable anchors, as offsets from the component's top-left corner
    pub connection_points: &'static [Point],

    /// Click behavior, copied onto each placed instance
    pub behavior: Behavior,
}

impl KindDefinition {
    /// Offset from the top-left corner to the footprint centre
    pub fn half_extent(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

static BUTTON: KindDefinition = KindDefinition {
    kind: ComponentKind::Button,
    width: 40.0,
    height: 40.0,
    connection_points: &[Point::new(40.0, 20.0)],
    behavior: Behavior::Inert,
};

static RELAY: KindDefinition = KindDefinition {
    kind: ComponentKind::Relay,
    width: 60.0,
    height: 40.0,
    connection_points: &[Point::new(0.0, 20.0), Point::new(60.0, 20.0)],
    behavior: Behavior::Toggle,
};

static PISTON: KindDefinition = KindDefinition {
    kind: ComponentKind::Piston,
    width: 80.0,
    height: 40.0,
    connection_points: &[Point::new(0.0, 20.0)],
    behavior: Behavior::Actuator,
};

static VALVE: KindDefinition = KindDefinition {
    kind: ComponentKind::Valve,
    width: 40.0,
    height: 40.0,
    connection_points: &[Point::new(0.0, 20.0), Point::new(40.0, 20.0)],
    behavior: Behavior::Nudge,
};

static LIGHT: KindDefinition = KindDefinition {
    kind: ComponentKind::Light,
    width: 40.0,
    height: 40.0,
    connection_points: &[Point::new(0.0, 20.0)],
    behavior: Behavior::Toggle,
};

static CABLE: KindDefinition = KindDefinition {
    kind: ComponentKind::Cable,
    width: 60.0,
    height: 10.0,
    connection_points: &[],
    behavior: Behavior::Inert,
};
