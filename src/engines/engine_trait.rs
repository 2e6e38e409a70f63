//! Engine abstraction layer used by the match harness and binaries.
//!
//! Defines a common decision payload so different move-selection strategies
//! can be swapped behind a single trait object.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::Position;
use crate::search::depth_policy::DepthPolicy;

/// What the side to move does this ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMove {
    Place(Position),
    Pass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` only when the game is already over.
    pub best_move: Option<EngineMove>,
    /// Root score when a search ran.
    pub score: Option<i32>,
    pub policy: Option<DepthPolicy>,
    pub nodes: u64,
    pub leaves: u64,
}

impl EngineOutput {
    pub fn forced(best_move: EngineMove) -> Self {
        Self {
            best_move: Some(best_move),
            ..Self::default()
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> OthelloResult<()> {
        Err(OthelloError::UnknownOption(name.to_owned()))
    }

    /// Decide the move for the side to move. `game_state` may be walked
    /// during the decision but is returned exactly as it was.
    fn choose_move(&mut self, game_state: &mut GameState) -> OthelloResult<EngineOutput>;

    /// Decide and play: places the chosen disc, or passes when forced.
    fn play_move(&mut self, game_state: &mut GameState) -> OthelloResult<EngineOutput> {
        let out = self.choose_move(game_state)?;
        match out.best_move {
            Some(EngineMove::Place(position)) => game_state.apply_move(position)?,
            Some(EngineMove::Pass) => game_state.pass()?,
            None => return Err(OthelloError::GameOver),
        }
        Ok(out)
    }
}

/// Shared prologue: game over, forced pass, or a single legal move need no
/// strategy. Returns `None` when a real choice exists.
pub(crate) fn forced_decision(game_state: &GameState) -> Option<EngineOutput> {
    if game_state.is_terminal() {
        return Some(EngineOutput::default());
    }
    match game_state.legal_moves() {
        [] => Some(EngineOutput::forced(EngineMove::Pass)),
        [only] => Some(EngineOutput::forced(EngineMove::Place(*only))),
        _ => None,
    }
}
