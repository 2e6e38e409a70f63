//! Random-move engine.
//!
//! Selects uniformly from legal moves and is used for diagnostics, seeded
//! match openings and as the weakest sparring partner.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{forced_decision, Engine, EngineMove, EngineOutput};
use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Othello Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> OthelloResult<EngineOutput> {
        if let Some(out) = forced_decision(game_state) {
            return Ok(out);
        }

        let picked = game_state.legal_moves().choose(&mut self.rng).copied();
        Ok(EngineOutput {
            best_move: picked.map(EngineMove::Place),
            ..EngineOutput::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_only_returns_legal_moves() {
        let mut game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(3);

        while !game.is_terminal() {
            let legal = game.legal_moves().to_vec();
            let out = engine.play_move(&mut game).expect("engine should move");
            match out.best_move {
                Some(EngineMove::Place(p)) => assert!(legal.contains(&p)),
                Some(EngineMove::Pass) => assert!(legal.is_empty()),
                None => unreachable!("game is not over"),
            }
        }
    }

    #[test]
    fn seeded_engines_agree() {
        let mut a = RandomEngine::with_seed(99);
        let mut b = RandomEngine::with_seed(99);
        let mut game_a = GameState::new_game();
        let mut game_b = GameState::new_game();
        for _ in 0..20 {
            if game_a.is_terminal() {
                break;
            }
            let out_a = a.play_move(&mut game_a).expect("move");
            let out_b = b.play_move(&mut game_b).expect("move");
            assert_eq!(out_a.best_move, out_b.best_move);
        }
        assert_eq!(game_a, game_b);
    }
}
