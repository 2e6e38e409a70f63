use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{forced_decision, Engine, EngineMove, EngineOutput};
use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{Position, DIRECTIONS, DIR_NONE};

/// Plays the move that flips the most discs right now; ties are broken at
/// random.
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Discs `position` would flip for the side to move.
    fn flip_count(game_state: &GameState, position: Position) -> usize {
        let own = game_state.current_side().cell();
        let mask = game_state.directions_at(position);
        let mut flips = 0;

        for (bit, step) in DIRECTIONS {
            if mask & bit == DIR_NONE {
                continue;
            }
            let mut cursor = position.grid_index().wrapping_add_signed(step);
            while game_state.color_at(Position::from_grid_index(cursor)) != own {
                flips += 1;
                cursor = cursor.wrapping_add_signed(step);
            }
        }

        flips
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Othello Greedy"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> OthelloResult<EngineOutput> {
        if let Some(out) = forced_decision(game_state) {
            return Ok(out);
        }

        let mut best_value = 0usize;
        let mut best_moves = Vec::new();

        for &mv in game_state.legal_moves() {
            let value = Self::flip_count(game_state, mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        let picked = best_moves.as_slice().choose(&mut self.rng).copied();
        Ok(EngineOutput {
            best_move: picked.map(EngineMove::Place),
            score: Some(best_value as i32),
            ..EngineOutput::default()
        })
    }
}
