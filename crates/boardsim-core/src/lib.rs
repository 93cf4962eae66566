//! boardsim editor core
//!
//! Grid layout, board bookkeeping and click simulation for the component
//! board editor. Rendering and pointer-event dispatch belong to the platform
//! layer; this crate takes board-space coordinates in and hands snapped
//! positions back.

pub mod error;
pub mod events;
pub mod layout;
pub mod state;

// Re-export commonly used items
pub use error::BoardError;
pub use events::{BoardEvent, EditorResponse};
pub use layout::{snap, GridLayoutEngine};
pub use state::EditorState;
