//! Depth-limited negamax with alpha-beta pruning.
//!
//! The search walks a single `GameState` in place. Every apply or pass goes
//! through `GameState::with_move` / `with_pass`, so the matching undo runs on
//! every exit path, cutoffs and errors included, and the state handed in is
//! bit-for-bit identical when the search returns.

use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::Position;
use crate::search::board_scoring::{BoardScorer, SCORE_INFINITY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, root children included.
    pub nodes: u64,
    /// Scorer calls.
    pub leaves: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootResult {
    pub best_move: Option<Position>,
    pub best_score: i32,
    pub depth: u8,
}

/// Negamax value of `game_state` for the side to move, searched `depth`
/// placements deep inside the `(alpha, beta)` window.
///
/// A forced pass is searched at the same depth since no disc is placed.
/// A beta cutoff returns the bound that caused it.
pub fn alpha_beta<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> OthelloResult<i32> {
    stats.nodes += 1;

    if depth == 0 || game_state.is_terminal() {
        stats.leaves += 1;
        return Ok(scorer.score(game_state));
    }

    let move_count = game_state.legal_moves().len();
    if move_count == 0 {
        let value = game_state
            .with_pass(|next| alpha_beta(next, scorer, depth, -beta, -alpha, stats))??;
        return Ok(-value);
    }

    // Undo restores this ply's cache, so the list can be re-read by index.
    for i in 0..move_count {
        let mv = game_state.legal_moves()[i];
        let value = -game_state
            .with_move(mv, |next| alpha_beta(next, scorer, depth - 1, -beta, -alpha, stats))??;

        if value > alpha {
            alpha = value;
        }
        if alpha >= beta {
            return Ok(alpha);
        }
    }

    Ok(alpha)
}

/// Search each of `moves` (in the given order) to `depth` and return the
/// best. Ties keep the earliest move.
pub fn search_root<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    moves: &[Position],
    depth: u8,
    stats: &mut SearchStats,
) -> OthelloResult<RootResult> {
    if moves.is_empty() {
        let score = alpha_beta(
            game_state,
            scorer,
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            stats,
        )?;
        return Ok(RootResult {
            best_move: None,
            best_score: score,
            depth,
        });
    }

    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;
    let child_depth = depth.saturating_sub(1);

    for &mv in moves {
        let value = -game_state.with_move(mv, |next| {
            alpha_beta(next, scorer, child_depth, -beta, -alpha, stats)
        })??;

        if value > best_score {
            best_score = value;
            best_move = Some(mv);
        }
        if value > alpha {
            alpha = value;
        }
    }

    Ok(RootResult {
        best_move,
        best_score,
        depth,
    })
}
