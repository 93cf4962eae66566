//! Errors raised by the board editor.

use boardsim_types::{ConnectionRef, LayoutError};
use thiserror::Error;

/// Errors that can occur while editing a board
#[derive(Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("No component with id {0}")]
    UnknownComponent(String),

    #[error("No connection point {0}")]
    UnknownConnectionPoint(ConnectionRef),

    #[error("Cable cannot start and end on the same connection point {0}")]
    SelfLoop(ConnectionRef),

    #[error("Duplicate id {0} in board")]
    DuplicateId(String),

    #[error("Cable {cable} ends on missing connection point {end}")]
    DanglingCable { cable: String, end: ConnectionRef },

    #[error("Drop received without an active palette drag")]
    NotDragging,

    #[error("Failed to parse board file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
