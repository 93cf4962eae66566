//! Platform input events and the editor's responses to them.

use boardsim_types::{ComponentKind, ConnectionRef, Point};
use serde::{Deserialize, Serialize};

/// Pointer and drag input reported by the platform layer, in board space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A palette entry started dragging
    PaletteDragStart { kind: ComponentKind },
    /// The palette drag ended without a drop
    PaletteDragEnd,
    /// The palette drag moved over the board
    DragOver { pointer: Point },
    /// The palette drag was released over the board
    Drop { pointer: Point },
    /// Mouse button pressed on a placed component
    Press { id: String, pointer: Point },
    /// Pointer moved anywhere on the board
    Move { pointer: Point },
    /// Mouse button released
    Release,
    /// Placed component clicked
    Click { id: String },
    Undo,
    Redo,
}

/// What the platform should apply after an event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorResponse {
    /// Nothing changed
    Idle,
    /// Where to draw the dragged palette item
    Preview { kind: ComponentKind, position: Point },
    /// A component was dropped onto the board
    Placed { id: String, position: Point },
    /// First end of a cable is anchored and waits for a second drop
    CablePending { at: ConnectionRef },
    /// A cable now links two connection points
    CableAttached { id: String },
    /// A component moved during a press-and-drag
    Moved { id: String, position: Point },
    /// The press-and-drag ended
    Released { id: String },
    /// A toggle component flipped its state
    Toggled { id: String, active: bool },
    /// An actuator was pushed
    Nudged { id: String, position: Point },
    /// Undo or redo; `applied` is false when the stack was empty
    Restored {
        applied: bool,
        can_undo: bool,
        can_redo: bool,
    },
}
