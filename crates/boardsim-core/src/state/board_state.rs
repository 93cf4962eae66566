//! Board state management - owns the board and issues components and cables onto it.

use std::collections::HashSet;

use boardsim_types::{Board, Cable, ComponentKind, ConnectionRef, GridSpec, PlacedComponent, Point};

use crate::error::BoardError;
use crate::layout::{snap, GridLayoutEngine};

/// State for managing the placed components of one board
#[derive(Debug, Clone)]
pub struct BoardState {
    /// The board
    pub board: Board,

    /// Grid used for every placement and move
    grid: GridSpec,

    /// Layout engine issuing IDs for this board
    engine: GridLayoutEngine,
}

impl BoardState {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            board: Board::new(),
            grid,
            engine: GridLayoutEngine::new(),
        }
    }

    /// Adopt an existing board, continuing ID allocation past its IDs.
    ///
    /// IDs must be unique across components and cables, and every cable end
    /// must resolve to a connection point. Off-grid positions are snapped.
    pub fn with_board(mut board: Board, grid: GridSpec) -> Result<Self, BoardError> {
        {
            let mut seen = HashSet::new();
            for id in board.ids() {
                if !seen.insert(id) {
                    return Err(BoardError::DuplicateId(id.to_string()));
                }
            }
        }

        for component in &mut board.components {
            let snapped = snap(component.position, &grid);
            if snapped != component.position {
                log::warn!(
                    "snapped off-grid {} from ({}, {}) to ({}, {})",
                    component.id,
                    component.position.x,
                    component.position.y,
                    snapped.x,
                    snapped.y
                );
                component.position = snapped;
            }
        }
        board.resolve_behaviors();

        for cable in &board.cables {
            for end in [&cable.from, &cable.to] {
                if board.connection_point_position(end).is_none() {
                    return Err(BoardError::DanglingCable {
                        cable: cable.id.clone(),
                        end: end.clone(),
                    });
                }
            }
            if cable.from == cable.to {
                return Err(BoardError::SelfLoop(cable.from.clone()));
            }
        }

        let engine = GridLayoutEngine::resuming_after(board.ids());
        Ok(Self {
            board,
            grid,
            engine,
        })
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Replace the board contents (undo/redo) without touching ID allocation
    pub fn restore(&mut self, board: Board) {
        self.board = board;
    }

    /// Top-left position for `kind` so that its footprint is centred on `pointer`
    fn centred_origin(kind: ComponentKind, pointer: Point) -> Point {
        pointer - kind.definition().half_extent()
    }

    /// Where a palette item hovering at `pointer` should be drawn
    pub fn preview_position(&self, kind: ComponentKind, pointer: Point, snapped: bool) -> Point {
        let origin = Self::centred_origin(kind, pointer);
        if snapped {
            snap(origin, &self.grid)
        } else {
            origin
        }
    }

    /// Place a new component centred on `pointer` and append it to the board
    pub fn drop_component(
        &mut self,
        kind: ComponentKind,
        pointer: Point,
    ) -> Result<&PlacedComponent, BoardError> {
        let component = self
            .engine
            .place(kind, Self::centred_origin(kind, pointer), &self.grid)?;
        self.board.add_component(component);
        Ok(&self.board.components[self.board.components.len() - 1])
    }

    /// Move a component to `target`, snapping when requested; returns the applied position
    pub fn move_component(
        &mut self,
        id: &str,
        target: Point,
        snapped: bool,
    ) -> Result<Point, BoardError> {
        let position = if snapped {
            snap(target, &self.grid)
        } else {
            target
        };
        let component = self
            .board
            .get_component_mut(id)
            .ok_or_else(|| BoardError::UnknownComponent(id.to_string()))?;
        component.position = position;
        Ok(position)
    }

    /// Position of a component
    pub fn position_of(&self, id: &str) -> Result<Point, BoardError> {
        self.board
            .get_component(id)
            .map(|c| c.position)
            .ok_or_else(|| BoardError::UnknownComponent(id.to_string()))
    }

    /// Nearest connection point within `radius` of `point`
    pub fn connection_point_at(&self, point: Point, radius: f32) -> Option<ConnectionRef> {
        self.board
            .connection_points()
            .map(|(conn, pos)| (conn, pos.distance_to(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(conn, _)| conn)
    }

    /// Link two connection points with a new cable; returns the cable ID
    pub fn attach_cable(&mut self, from: ConnectionRef, to: ConnectionRef) -> Result<String, BoardError> {
        for end in [&from, &to] {
            if self.board.connection_point_position(end).is_none() {
                return Err(BoardError::UnknownConnectionPoint(end.clone()));
            }
        }
        if from == to {
            return Err(BoardError::SelfLoop(from));
        }

        let id = self.engine.generate_id("cable")?;
        log::info!("attached {} from {} to {}", id, from, to);
        self.board.add_cable(Cable::new(id.clone(), from, to));
        Ok(id)
    }

    /// Board positions of both ends of a cable
    pub fn cable_endpoints(&self, cable_id: &str) -> Option<(Point, Point)> {
        let cable = self.board.get_cable(cable_id)?;
        let from = self.board.connection_point_position(&cable.from)?;
        let to = self.board.connection_point_position(&cable.to)?;
        Some((from, to))
    }

    /// Components in drawing order, with `raised` drawn last
    pub fn render_order(&self, raised: Option<&str>) -> Vec<&PlacedComponent> {
        let (mut order, top): (Vec<_>, Vec<_>) = self
            .board
            .components
            .iter()
            .partition(|c| Some(c.id.as_str()) != raised);
        order.extend(top);
        order
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(GridSpec::default())
    }
}
