//! Editor state - ties board, drag, simulation and history together and
//! dispatches platform events.

use std::path::Path;

use boardsim_types::{Board, BoardFile, BoardSettings, ComponentKind, Point};

use super::{BoardState, ClickOutcome, DragState, HistoryState, SimulationState};
use crate::error::BoardError;
use crate::events::{BoardEvent, EditorResponse};
use crate::layout::snap;

/// Complete editor state for one board
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Editor configuration
    pub settings: BoardSettings,

    /// Placed components and cables
    pub board: BoardState,

    /// Pointer interaction state
    pub drag: DragState,

    /// Click-behavior registry
    pub simulation: SimulationState,

    /// Undo/redo history
    pub history: HistoryState,
}

impl EditorState {
    /// Create an editor for an empty board
    pub fn new(settings: BoardSettings) -> Result<Self, BoardError> {
        let grid = settings.grid()?;
        Ok(Self {
            history: HistoryState::new(settings.max_undo),
            board: BoardState::new(grid),
            drag: DragState::new(),
            simulation: SimulationState::new(),
            settings,
        })
    }

    /// Create an editor for a loaded board file
    pub fn from_file(file: BoardFile) -> Result<Self, BoardError> {
        let grid = file.settings.grid()?;
        let board = BoardState::with_board(file.board, grid)?;
        Ok(Self {
            history: HistoryState::new(file.settings.max_undo),
            simulation: SimulationState::from_board(&board.board),
            board,
            drag: DragState::new(),
            settings: file.settings,
        })
    }

    /// Snapshot the editor as a board file
    pub fn to_file(&self) -> BoardFile {
        BoardFile::new(self.board.board.clone(), self.settings.clone())
    }

    /// Load a board file from disk
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let json = std::fs::read_to_string(path)?;
        let file = BoardFile::from_json(&json)?;
        log::info!(
            "loaded {} components from {}",
            file.board.components.len(),
            path.display()
        );
        Self::from_file(file)
    }

    /// Save the board to disk as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), BoardError> {
        let json = self.to_file().to_json()?;
        std::fs::write(path, json)?;
        log::info!("saved board to {}", path.display());
        Ok(())
    }

    /// Dispatch one platform event
    pub fn handle(&mut self, event: BoardEvent) -> Result<EditorResponse, BoardError> {
        match event {
            BoardEvent::PaletteDragStart { kind } => {
                self.begin_palette_drag(kind);
                Ok(EditorResponse::Idle)
            }
            BoardEvent::PaletteDragEnd => {
                self.drag.end_palette_drag();
                Ok(EditorResponse::Idle)
            }
            BoardEvent::DragOver { pointer } => Ok(self.drag_over(pointer)),
            BoardEvent::Drop { pointer } => self.drop(pointer),
            BoardEvent::Press { id, pointer } => {
                self.press(&id, pointer)?;
                Ok(EditorResponse::Idle)
            }
            BoardEvent::Move { pointer } => self.move_to(pointer),
            BoardEvent::Release => Ok(self.release()),
            BoardEvent::Click { id } => self.click(&id),
            BoardEvent::Undo => {
                let applied = self.undo();
                Ok(self.restored(applied))
            }
            BoardEvent::Redo => {
                let applied = self.redo();
                Ok(self.restored(applied))
            }
        }
    }

    /// Start dragging a palette entry
    pub fn begin_palette_drag(&mut self, kind: ComponentKind) {
        log::debug!("palette drag started: {}", kind);
        self.drag.start_palette_drag(kind);
    }

    /// Preview position for the dragged palette entry
    pub fn drag_over(&self, pointer: Point) -> EditorResponse {
        match self.drag.palette_kind {
            Some(kind) => EditorResponse::Preview {
                kind,
                position: self.board.preview_position(
                    kind,
                    pointer,
                    self.settings.snap_while_dragging,
                ),
            },
            None => EditorResponse::Idle,
        }
    }

    /// Drop the dragged palette entry at `pointer`
    pub fn drop(&mut self, pointer: Point) -> Result<EditorResponse, BoardError> {
        let kind = self.drag.end_palette_drag().ok_or(BoardError::NotDragging)?;
        if kind.is_cable() {
            return self.drop_cable(pointer);
        }

        let snapshot = self.board.board.clone();
        let placed = self.board.drop_component(kind, pointer)?;
        self.simulation.register(placed);
        self.history.save_state(&snapshot);
        Ok(EditorResponse::Placed {
            id: placed.id.clone(),
            position: placed.position,
        })
    }

    /// First cable drop anchors one end, the second completes the cable
    fn drop_cable(&mut self, pointer: Point) -> Result<EditorResponse, BoardError> {
        let Some(target) = self
            .board
            .connection_point_at(pointer, self.settings.connection_snap_radius)
        else {
            log::warn!(
                "cable dropped at ({}, {}) away from any connection point",
                pointer.x,
                pointer.y
            );
            return Ok(EditorResponse::Idle);
        };

        match self.drag.pending_cable.take() {
            None => {
                log::debug!("cable anchored at {}", target);
                self.drag.pending_cable = Some(target.clone());
                Ok(EditorResponse::CablePending { at: target })
            }
            Some(from) => {
                let snapshot = self.board.board.clone();
                match self.board.attach_cable(from.clone(), target) {
                    Ok(id) => {
                        self.history.save_state(&snapshot);
                        Ok(EditorResponse::CableAttached { id })
                    }
                    Err(err) => {
                        // keep the anchor so the next drop can retry
                        self.drag.pending_cable = Some(from);
                        Err(err)
                    }
                }
            }
        }
    }

    /// Start moving a placed component
    pub fn press(&mut self, id: &str, pointer: Point) -> Result<(), BoardError> {
        let position = self.board.position_of(id)?;
        self.drag.start_move(id.to_string(), pointer, position);
        Ok(())
    }

    /// Follow the pointer with the component being moved
    pub fn move_to(&mut self, pointer: Point) -> Result<EditorResponse, BoardError> {
        let Some(session) = self.drag.moving.as_ref() else {
            return Ok(EditorResponse::Idle);
        };
        let id = session.component_id.clone();
        let position = self.board.move_component(
            &id,
            pointer - session.grab_offset,
            self.settings.snap_while_dragging,
        )?;
        log::debug!("moved {} to ({}, {})", id, position.x, position.y);
        Ok(EditorResponse::Moved { id, position })
    }

    /// End the move, snapping the final position and recording it for undo
    pub fn release(&mut self) -> EditorResponse {
        let Some(session) = self.drag.stop_move() else {
            return EditorResponse::Idle;
        };
        let Ok(current) = self.board.position_of(&session.component_id) else {
            return EditorResponse::Idle;
        };

        let grid = *self.board.grid();
        let settled = snap(current, &grid);
        if settled != session.origin {
            let mut before = self.board.board.clone();
            if let Some(component) = before.get_component_mut(&session.component_id) {
                component.position = session.origin;
            }
            self.history.save_state(&before);
        }
        if let Some(component) = self.board.board.get_component_mut(&session.component_id) {
            component.position = settled;
        }
        EditorResponse::Released {
            id: session.component_id,
        }
    }

    /// Run the clicked component's behavior
    pub fn click(&mut self, id: &str) -> Result<EditorResponse, BoardError> {
        let snapshot = self.board.board.clone();
        let outcome =
            self.simulation
                .click(&mut self.board.board, id, self.settings.nudge_distance())?;

        let response = match outcome {
            ClickOutcome::Toggled { active } => EditorResponse::Toggled {
                id: id.to_string(),
                active,
            },
            ClickOutcome::Nudged {
                actuator_id,
                position,
            } => EditorResponse::Nudged {
                id: actuator_id,
                position,
            },
            ClickOutcome::NoEffect => return Ok(EditorResponse::Idle),
        };
        self.history.save_state(&snapshot);
        Ok(response)
    }

    /// Undo the last board change; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.board.board) {
            Some(board) => {
                self.restore(board);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone change; returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.board.board) {
            Some(board) => {
                self.restore(board);
                true
            }
            None => false,
        }
    }

    fn restored(&self, applied: bool) -> EditorResponse {
        EditorResponse::Restored {
            applied,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    fn restore(&mut self, board: Board) {
        self.board.restore(board);
        self.simulation = SimulationState::from_board(&self.board.board);
        self.drag.reset();
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            settings: BoardSettings::default(),
            board: BoardState::default(),
            drag: DragState::new(),
            simulation: SimulationState::new(),
            history: HistoryState::default(),
        }
    }
}
