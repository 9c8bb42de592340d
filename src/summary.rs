//! Session summary: counters collected while reducing an action stream.

use serde::Serialize;

use crate::core::{reduce, GameState};
use crate::input::Replay;
use crate::types::Action;

/// What happened during one session, printed as JSON by the replay tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub actions: u64,
    pub ticks: u64,
    pub locks: u64,
    pub cells_cleared: u64,
    pub game_overs: u64,
    pub restarts: u64,
    pub score: u32,
    pub level: u32,
    pub highscore: u32,
    pub game_over: bool,
}

impl SessionSummary {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            level: 1,
            ..Self::default()
        }
    }

    /// Account for one reducer step from `prev` to `next`
    pub fn observe(&mut self, prev: &GameState, action: &Action, next: &GameState) {
        self.actions += 1;
        if action.is_tick() {
            self.ticks += 1;
        }

        if prev.is_game_over() && !next.is_game_over() {
            self.restarts += 1;
        } else if next.active().generation != prev.active().generation {
            self.locks += 1;
            self.cells_cleared += next.just_cleared().len() as u64;
            if next.is_game_over() {
                self.game_overs += 1;
            }
        }

        self.score = next.score();
        self.level = next.level();
        self.highscore = next.highscore();
        self.game_over = next.is_game_over();
    }
}

/// Re-reduce a recording from its seed
///
/// `on_game_over` runs once for every lock that ends a game, with the number
/// of the action that caused it.
pub fn replay_session(
    replay: &Replay,
    mut on_game_over: impl FnMut(u64, &GameState),
) -> (GameState, SessionSummary) {
    let mut state = GameState::new(replay.seed);
    let mut summary = SessionSummary::new(replay.seed);
    for action in &replay.actions {
        let next = reduce(&state, *action);
        summary.observe(&state, action, &next);
        if next.is_game_over() && !state.is_game_over() {
            on_game_over(summary.actions, &next);
        }
        state = next;
    }
    (state, summary)
}
