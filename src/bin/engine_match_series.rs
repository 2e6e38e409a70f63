//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use othello_engine::engines::engine_alpha_beta::AlphaBetaEngine;
use othello_engine::engines::engine_greedy::GreedyEngine;
use othello_engine::engines::engine_trait::Engine;
use othello_engine::errors::OthelloError;
use othello_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), OthelloError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different engines/scorers/depths.
    let player1 = || Box::new(AlphaBetaEngine::new()) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    Ok(())
}
