//! Pluggable position evaluation.
//!
//! Search stays independent of any heuristic by delegating leaf scoring to
//! this trait. Scores are read from the perspective of the side to move and
//! must stay strictly inside `(-SCORE_INFINITY, SCORE_INFINITY)`.

use crate::game_state::game_state::GameState;

/// Window bound used by the search; scorers never reach it.
pub const SCORE_INFINITY: i32 = i32::MAX;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move. Must not mutate or
    /// depend on anything but `game_state`.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Always 0: every position looks equal, so the first move in order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantScorer;

impl BoardScorer for ConstantScorer {
    fn score(&self, _game_state: &GameState) -> i32 {
        0
    }
}

/// Own discs minus opponent discs. At a finished game this is the exact
/// final margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscDifferenceScorer;

impl BoardScorer for DiscDifferenceScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state.disc_difference(game_state.current_side())
    }
}

/// Only the sign of the disc margin: +1 ahead, -1 behind, 0 level.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinLossDrawScorer;

impl BoardScorer for WinLossDrawScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state.disc_difference(game_state.current_side()).signum()
    }
}
