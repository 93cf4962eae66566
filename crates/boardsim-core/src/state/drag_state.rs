//! Drag state management - palette drags, component moves and pending cables.

use boardsim_types::{ComponentKind, ConnectionRef, Point};

/// A placed component being moved with the mouse held down
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSession {
    pub component_id: String,

    /// Pointer position relative to the component's top-left corner at press time
    pub grab_offset: Point,

    /// Component position when the press started
    pub origin: Point,
}

/// State for managing drag interaction
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Palette kind currently being dragged over the board
    pub palette_kind: Option<ComponentKind>,

    /// Component being moved
    pub moving: Option<MoveSession>,

    /// First end of a cable awaiting its second drop
    pub pending_cable: Option<ConnectionRef>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a palette entry
    pub fn start_palette_drag(&mut self, kind: ComponentKind) {
        self.palette_kind = Some(kind);
    }

    /// Stop dragging the palette entry, returning the kind that was dragged
    pub fn end_palette_drag(&mut self) -> Option<ComponentKind> {
        self.palette_kind.take()
    }

    /// Start moving a placed component
    pub fn start_move(&mut self, component_id: String, pointer: Point, position: Point) {
        self.moving = Some(MoveSession {
            component_id,
            grab_offset: pointer - position,
            origin: position,
        });
    }

    /// Stop moving
    pub fn stop_move(&mut self) -> Option<MoveSession> {
        self.moving.take()
    }

    pub fn is_moving(&self) -> bool {
        self.moving.is_some()
    }

    /// Component raised above the others while it is being moved
    pub fn raised_component(&self) -> Option<&str> {
        self.moving.as_ref().map(|m| m.component_id.as_str())
    }

    /// Clear all interaction state
    pub fn reset(&mut self) {
        self.palette_kind = None;
        self.moving = None;
        self.pending_cable = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_offset() {
        let mut drag = DragState::new();
        drag.start_move("component-1".into(), Point::new(25.0, 18.0), Point::new(20.0, 10.0));
        let session = drag.moving.as_ref().unwrap();
        assert_eq!(session.grab_offset, Point::new(5.0, 8.0));
        assert_eq!(drag.raised_component(), Some("component-1"));

        let ended = drag.stop_move().unwrap();
        assert_eq!(ended.origin, Point::new(20.0, 10.0));
        assert!(!drag.is_moving());
        assert_eq!(drag.raised_component(), None);
    }

    #[test]
    fn test_palette_drag() {
        let mut drag = DragState::new();
        assert_eq!(drag.end_palette_drag(), None);
        drag.start_palette_drag(ComponentKind::Light);
        assert_eq!(drag.end_palette_drag(), Some(ComponentKind::Light));
        assert_eq!(drag.palette_kind, None);
    }
}
