//! Root move ordering by shallow pre-search.
//!
//! The approximate scores only decide the visiting order of the full search;
//! they are never reported as the final evaluation.

use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::Position;
use crate::search::board_scoring::{BoardScorer, SCORE_INFINITY};
use crate::search::negamax::{alpha_beta, SearchStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

/// Score every legal move with a `depth`-ply search and sort descending.
/// Equal scores keep legal-move order.
pub fn presearch_root_moves<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    stats: &mut SearchStats,
) -> OthelloResult<Vec<ScoredMove>> {
    let move_count = game_state.legal_moves().len();
    let child_depth = depth.saturating_sub(1);
    let mut scored = Vec::with_capacity(move_count);

    for i in 0..move_count {
        let position = game_state.legal_moves()[i];
        let score = -game_state.with_move(position, |next| {
            alpha_beta(
                next,
                scorer,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                stats,
            )
        })??;
        scored.push(ScoredMove { position, score });
    }

    // Stable sort keeps ties in generation order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(scored)
}

/// Legal moves in pre-searched order; plain legal order when `depth == 0`.
pub fn ordered_root_moves<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    stats: &mut SearchStats,
) -> OthelloResult<Vec<Position>> {
    if depth == 0 {
        return Ok(game_state.legal_moves().to_vec());
    }
    Ok(presearch_root_moves(game_state, scorer, depth, stats)?
        .into_iter()
        .map(|m| m.position)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::othello_types::Color;
    use crate::search::board_scoring::{ConstantScorer, DiscDifferenceScorer};

    #[test]
    fn presearch_scores_are_sorted_descending() {
        let mut game = GameState::new_game();
        game.apply_move(Position::new(4, 3)).expect("legal");
        game.apply_move(Position::new(3, 3)).expect("legal");

        let before = game.clone();
        let mut stats = SearchStats::default();
        let scored = presearch_root_moves(&mut game, &DiscDifferenceScorer, 2, &mut stats)
            .expect("presearch should run");

        assert_eq!(scored.len(), before.legal_moves().len());
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(game, before);
    }

    #[test]
    fn depth_one_presearch_moves_bigger_capture_first() {
        // c1 flips b1; d8 flips b8 and c8. Legal order is c1 then d8.
        let mut game = GameState::from_discs(
            &[
                (Position::new(1, 1), Color::Black),
                (Position::new(2, 1), Color::White),
                (Position::new(1, 8), Color::Black),
                (Position::new(2, 8), Color::White),
                (Position::new(3, 8), Color::White),
            ],
            Color::Black,
        )
        .expect("valid setup");
        assert_eq!(
            game.legal_moves(),
            &[Position::new(3, 1), Position::new(4, 8)]
        );

        let mut stats = SearchStats::default();
        let scored = presearch_root_moves(&mut game, &DiscDifferenceScorer, 1, &mut stats)
            .expect("presearch should run");

        assert_eq!(
            scored,
            vec![
                ScoredMove { position: Position::new(4, 8), score: 4 },
                ScoredMove { position: Position::new(3, 1), score: 2 },
            ]
        );
        assert_eq!(stats.leaves, 2);
    }

    #[test]
    fn ties_keep_legal_order_and_depth_zero_skips_presearch() {
        let mut game = GameState::new_game();
        let legal = game.legal_moves().to_vec();
        let mut stats = SearchStats::default();

        let ordered = ordered_root_moves(&mut game, &ConstantScorer, 3, &mut stats)
            .expect("ordering should run");
        assert_eq!(ordered, legal);

        let mut untouched = SearchStats::default();
        let plain = ordered_root_moves(&mut game, &ConstantScorer, 0, &mut untouched)
            .expect("ordering should run");
        assert_eq!(plain, legal);
        assert_eq!(untouched, SearchStats::default());
    }
}
