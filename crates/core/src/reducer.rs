//! Reducer module - the single state transition entry point
//!
//! Every step runs in three phases:
//!
//! 1. finish a pending row clear (drop cells above the removed rows)
//! 2. apply the action
//! 3. bake the active piece's pending offset into its cells
//!
//! `reduce` never fails. Actions that make no sense in the current state
//! (moving after game over, restarting mid-game) leave the state unchanged.

use crate::collision::{fits, is_blocked};
use crate::game_state::GameState;
use crate::rotation::rotate;
use crate::scoring::is_gravity_tick;
use crate::types::{Action, Axis, Change};

/// Apply one action to a state, producing the next state
pub fn reduce(state: &GameState, action: Action) -> GameState {
    state.clone().step(action)
}

impl GameState {
    /// Owned form of [`reduce`]
    pub fn step(self, action: Action) -> GameState {
        let settled = self.settle_cleared_rows();
        let next = match action {
            Action::Move(change) => apply_move(settled, change),
            Action::Tick(count) => apply_tick(settled, count),
        };
        next.bake_offset()
    }
}

fn apply_move(state: GameState, change: Option<Change>) -> GameState {
    if state.game_over {
        return match change {
            None => state.restart(),
            Some(_) => state,
        };
    }

    let Some(change) = change else {
        return state;
    };

    match change.axis {
        Axis::Cw | Axis::Ccw => apply_rotation(state, change.axis == Axis::Cw),
        Axis::X => {
            let offset_x = if is_blocked(&state, Axis::X, change.amount) {
                0
            } else {
                state.active.offset_x + change.amount
            };
            let active = state.active.clone().with_offset(offset_x, state.active.offset_y);
            GameState { active, ..state }
        }
        Axis::Y => {
            if is_blocked(&state, Axis::Y, change.amount) {
                return state.lock();
            }
            let offset_y = state.active.offset_y + change.amount;
            let active = state.active.clone().with_offset(state.active.offset_x, offset_y);
            GameState { active, ..state }
        }
    }
}

fn apply_rotation(state: GameState, clockwise: bool) -> GameState {
    let axis = if clockwise { Axis::Cw } else { Axis::Ccw };
    if is_blocked(&state, axis, 0) {
        return state;
    }
    let rotated = rotate(&state.active, clockwise);
    if !fits(&rotated.cells, &state.previous) {
        return state;
    }
    GameState {
        active: rotated,
        ..state
    }
}

fn apply_tick(state: GameState, count: u64) -> GameState {
    if is_gravity_tick(count, state.level) {
        apply_move(state, Some(Change::down()))
    } else {
        state
    }
}
