//! Simulation state management - click behaviors and the actuator registry.

use boardsim_types::{Behavior, Board, PlacedComponent, Point};

use crate::error::BoardError;

/// Result of clicking a component
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The clicked component's active flag changed
    Toggled { active: bool },
    /// The registered actuator moved
    Nudged { actuator_id: String, position: Point },
    /// Nothing happened
    NoEffect,
}

/// Cross-component references needed by click behaviors, scoped to one board
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Actuator that valve clicks push (the most recently placed one)
    actuator: Option<String>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the registry from a board's placement order
    pub fn from_board(board: &Board) -> Self {
        let mut state = Self::new();
        for component in &board.components {
            state.register(component);
        }
        state
    }

    /// Record a freshly placed component's capabilities
    pub fn register(&mut self, component: &PlacedComponent) {
        if component.behavior == Behavior::Actuator {
            log::debug!("registered actuator {}", component.id);
            self.actuator = Some(component.id.clone());
        }
    }

    pub fn actuator(&self) -> Option<&str> {
        self.actuator.as_deref()
    }

    /// Apply the clicked component's behavior.
    ///
    /// Nudge moves the registered actuator right by `nudge_distance`; with no
    /// actuator on the board it has no effect.
    pub fn click(
        &self,
        board: &mut Board,
        id: &str,
        nudge_distance: f32,
    ) -> Result<ClickOutcome, BoardError> {
        let component = board
            .get_component_mut(id)
            .ok_or_else(|| BoardError::UnknownComponent(id.to_string()))?;

        match component.behavior {
            Behavior::Toggle => {
                component.active = !component.active;
                log::debug!("{} {} active={}", component.kind, id, component.active);
                Ok(ClickOutcome::Toggled {
                    active: component.active,
                })
            }
            Behavior::Nudge => {
                let Some(actuator_id) = self.actuator.as_deref() else {
                    log::warn!("{} clicked with no piston on the board", id);
                    return Ok(ClickOutcome::NoEffect);
                };
                let actuator = board
                    .get_component_mut(actuator_id)
                    .ok_or_else(|| BoardError::UnknownComponent(actuator_id.to_string()))?;
                actuator.position.x += nudge_distance;
                log::debug!("{} pushed {} to x={}", id, actuator_id, actuator.position.x);
                Ok(ClickOutcome::Nudged {
                    actuator_id: actuator_id.to_string(),
                    position: actuator.position,
                })
            }
            Behavior::Actuator | Behavior::Inert => Ok(ClickOutcome::NoEffect),
        }
    }
}
