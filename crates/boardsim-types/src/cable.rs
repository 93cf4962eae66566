//! Cable types for linking components together.

use serde::{Deserialize, Serialize};

/// A connection point on a placed component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionRef {
    /// Component ID
    pub component_id: String,

    /// Index into the kind's connection points
    pub index: usize,
}

impl ConnectionRef {
    pub fn new(component_id: impl Into<String>, index: usize) -> Self {
        Self {
            component_id: component_id.into(),
            index,
        }
    }
}

impl std::fmt::Display for ConnectionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.component_id, self.index)
    }
}

/// A cable between two connection points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cable {
    /// Unique identifier
    pub id: String,

    pub from: ConnectionRef,

    pub to: ConnectionRef,
}

impl Cable {
    pub fn new(id: String, from: ConnectionRef, to: ConnectionRef) -> Self {
        Self { id, from, to }
    }

    /// Whether either end sits on the given component
    pub fn touches(&self, component_id: &str) -> bool {
        self.from.component_id == component_id || self.to.component_id == component_id
    }
}
