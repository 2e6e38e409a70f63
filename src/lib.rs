//! Crate root module declarations for the Othello engine project.
//!
//! This file exposes the board state machine, move generation helpers, the
//! alpha-beta search, engine strategies and utility helpers so binaries,
//! benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod game_state;
    pub mod move_cache;
    pub mod othello_rules;
    pub mod othello_types;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod mobility;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod depth_policy;
    pub mod move_ordering;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}
