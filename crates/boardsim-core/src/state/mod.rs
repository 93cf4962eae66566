//! Editor state management.

mod board_state;
mod drag_state;
mod editor_state;
mod history_state;
mod simulation_state;


pub use board_state::*;
pub use drag_state::*;
pub use editor_state::*;
pub use history_state::*;
pub use simulation_state::*;
