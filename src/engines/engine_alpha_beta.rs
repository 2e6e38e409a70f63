//! Alpha-beta search engine.
//!
//! Picks a depth policy from the number of placements left, optionally
//! orders root moves with a shallow pre-search, then runs the full negamax
//! over the ordered list. Forced passes and single legal moves are answered
//! without consulting the scorer.

use tracing::{debug, trace};

use crate::engines::engine_trait::{forced_decision, Engine, EngineMove, EngineOutput};
use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, DiscDifferenceScorer};
use crate::search::depth_policy::SearchConfig;
use crate::search::move_ordering::ordered_root_moves;
use crate::search::negamax::{search_root, SearchStats};

pub struct AlphaBetaEngine<S: BoardScorer> {
    config: SearchConfig,
    scorer: S,
}

impl AlphaBetaEngine<DiscDifferenceScorer> {
    pub fn new() -> Self {
        Self::with_scorer(SearchConfig::default(), DiscDifferenceScorer)
    }
}

impl Default for AlphaBetaEngine<DiscDifferenceScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "Othello AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> OthelloResult<()> {
        self.config.set_option(name, value)
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> OthelloResult<EngineOutput> {
        if let Some(out) = forced_decision(game_state) {
            trace!(
                turn = game_state.turn_index(),
                decision = ?out.best_move,
                "forced decision, search skipped"
            );
            return Ok(out);
        }

        let policy = self.config.select_policy(game_state);
        let mut stats = SearchStats::default();

        let moves = ordered_root_moves(
            game_state,
            &self.scorer,
            self.config.presearch_depth,
            &mut stats,
        )?;
        let result = search_root(game_state, &self.scorer, &moves, policy.depth(), &mut stats)?;

        debug!(
            turn = game_state.turn_index(),
            side = ?game_state.current_side(),
            ?policy,
            best_move = ?result.best_move.map(|p| p.to_string()),
            score = result.best_score,
            nodes = stats.nodes,
            leaves = stats.leaves,
            "alpha-beta search finished"
        );

        Ok(EngineOutput {
            best_move: result.best_move.map(EngineMove::Place),
            score: Some(result.best_score),
            policy: Some(policy),
            nodes: stats.nodes,
            leaves: stats.leaves,
        })
    }
}
