//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one shared
//! `GameState`, with an optional seeded random opening prefix.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, EngineMove};
use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{Cell, Color, Position};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWin,
    WhiteWin,
    Draw,
}

impl MatchOutcome {
    fn from_state(state: &GameState) -> Self {
        match state.winner() {
            Some(Color::Black) => MatchOutcome::BlackWin,
            Some(Color::White) => MatchOutcome::WhiteWin,
            None => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Option<Position>>,
    pub played_moves: Vec<Option<Position>>,
    pub black_move_count: u32,
    pub white_move_count: u32,
    pub black_total_time_ns: u128,
    pub white_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub player1_disc_margin: i64,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MatchSeriesStats {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            games: 0,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            player1_disc_margin: 0,
            player1_moves: 0,
            player2_moves: 0,
            player1_total_time_ns: 0,
            player2_total_time_ns: 0,
            started_at,
            finished_at: started_at,
        }
    }

    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn player1_avg_move_time_ms(&self) -> f64 {
        Self::avg_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        Self::avg_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_margin={} p1_avg_ms={:.3} p2_avg_ms={:.3} started={} finished={}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_disc_margin,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms(),
            self.started_at.to_rfc3339(),
            self.finished_at.to_rfc3339()
        )
    }
}

/// Play a single seeded engine-vs-engine game from the opening position.
pub fn play_engine_match(
    engine_black: &mut dyn Engine,
    engine_white: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> OthelloResult<MatchResult> {
    engine_black.new_game();
    engine_white.new_game();

    let mut state = GameState::new_game();
    let opening_moves = apply_seeded_random_opening(&mut state, seed, config)?;

    let mut played_moves = Vec::new();
    let mut black_move_count = 0u32;
    let mut white_move_count = 0u32;
    let mut black_total_time_ns = 0u128;
    let mut white_total_time_ns = 0u128;

    while !state.is_terminal() {
        let mover = state.current_side();
        let legal = state.legal_moves().to_vec();

        let started = Instant::now();
        let out = match mover {
            Color::Black => engine_black.play_move(&mut state)?,
            Color::White => engine_white.play_move(&mut state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        match out.best_move {
            Some(EngineMove::Place(p)) if legal.contains(&p) => played_moves.push(Some(p)),
            Some(EngineMove::Pass) if legal.is_empty() => played_moves.push(None),
            Some(EngineMove::Place(p)) => return Err(OthelloError::IllegalMove(p)),
            Some(EngineMove::Pass) => return Err(OthelloError::PassWithLegalMoves(legal.len())),
            None => return Err(OthelloError::GameOver),
        }
    }

    let outcome = MatchOutcome::from_state(&state);
    debug!(
        seed,
        ?outcome,
        black = state.count_discs(Cell::Black),
        white = state.count_discs(Cell::White),
        "game finished\n{}",
        render_game_state(&state)
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        black_move_count,
        white_move_count,
        black_total_time_ns,
        white_total_time_ns,
    })
}

/// Play a series and aggregate win/loss/draw statistics. Player 1 takes
/// Black in even-numbered games and White in odd ones; every game uses a
/// seed derived from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> OthelloResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::new(Utc::now());

    for game_idx in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_idx));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let player1_color = if game_idx % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };

        let result = match player1_color {
            Color::Black => {
                play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
            }
            Color::White => {
                play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
            }
        };

        let winner = match (result.outcome, player1_color) {
            (MatchOutcome::Draw, _) => None,
            (MatchOutcome::BlackWin, Color::Black) | (MatchOutcome::WhiteWin, Color::White) => {
                Some(PlayerId::Player1)
            }
            _ => Some(PlayerId::Player2),
        };
        match winner {
            Some(PlayerId::Player1) => stats.player1_wins += 1,
            Some(PlayerId::Player2) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.games += 1;
        stats.player1_disc_margin += i64::from(result.final_state.disc_difference(player1_color));

        let (p1_moves, p1_ns, p2_moves, p2_ns) = match player1_color {
            Color::Black => (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            ),
            Color::White => (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            ),
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        if config.verbose {
            info!(
                game = game_idx + 1,
                of = config.games,
                player1 = player1.name(),
                player1_color = ?player1_color,
                outcome = ?result.outcome,
                ?winner,
                "series game finished"
            );
        }
    }

    stats.finished_at = Utc::now();
    info!(report = %stats.report(), "series finished");
    Ok(stats)
}

/// Play a seeded random number of random plies (passes included) before
/// the engines take over. Returns the plies played, `None` for a pass.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    config: MatchConfig,
) -> OthelloResult<Vec<Option<Position>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let min = config.opening_min_plies.min(config.opening_max_plies);
    let max = config.opening_max_plies.max(min);
    let plies = rng.random_range(min..=max);

    let mut played = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        match state.legal_moves().choose(&mut rng).copied() {
            Some(mv) => {
                state.apply_move(mv)?;
                played.push(Some(mv));
            }
            None => {
                state.pass()?;
                played.push(None);
            }
        }
    }
    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::search::board_scoring::DiscDifferenceScorer;
    use crate::search::depth_policy::SearchConfig;

    fn shallow_alpha_beta() -> Box<dyn Engine> {
        let config = SearchConfig {
            presearch_depth: 1,
            normal_depth: 2,
            wld_depth: 6,
            perfect_depth: 4,
        };
        Box::new(AlphaBetaEngine::with_scorer(config, DiscDifferenceScorer))
    }

    #[test]
    fn match_runs_to_a_finished_game() {
        let mut black = RandomEngine::with_seed(1);
        let mut white = GreedyEngine::with_seed(2);
        let result = play_engine_match(&mut black, &mut white, 7, MatchConfig::default())
            .expect("match should finish");

        assert!(result.final_state.is_terminal());
        assert_eq!(result.outcome, MatchOutcome::from_state(&result.final_state));
        let placed = result
            .opening_moves
            .iter()
            .chain(result.played_moves.iter())
            .filter(|m| m.is_some())
            .count();
        assert_eq!(placed, usize::from(result.final_state.turn_index()));
    }

    #[test]
    fn seeded_opening_is_reproducible() {
        let config = MatchConfig {
            opening_min_plies: 2,
            opening_max_plies: 6,
        };
        let mut a = GameState::new_game();
        let mut b = GameState::new_game();
        let played_a = apply_seeded_random_opening(&mut a, 1234, config).expect("opening");
        let played_b = apply_seeded_random_opening(&mut b, 1234, config).expect("opening");
        assert_eq!(played_a, played_b);
        assert_eq!(a, b);
        assert!((2..=6).contains(&played_a.len()));
    }

    #[test]
    fn series_tallies_every_game() {
        let stats = play_engine_match_series(
            shallow_alpha_beta,
            || Box::new(RandomEngine::with_seed(5)) as Box<dyn Engine>,
            MatchSeriesConfig {
                games: 4,
                base_seed: 10,
                per_game: MatchConfig::default(),
                verbose: true,
            },
        )
        .expect("series should finish");

        assert_eq!(stats.games, 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.finished_at >= stats.started_at);
        assert!(stats.report().starts_with("games=4 "));
    }
}
