//! Errors returned by board operations, search and engines.
//!
//! Every variant is an ordinary, retryable outcome: a failed operation leaves
//! the `GameState` exactly as it was, and callers are expected to branch on
//! the variant rather than treat it as fatal.

use thiserror::Error;

use crate::game_state::othello_types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// Coordinate outside the playable 8x8 region.
    #[error("position ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: u8, y: u8 },

    /// Placement that brackets no opponent disc (or an occupied cell).
    #[error("illegal move at {0}: no discs would be flipped")]
    IllegalMove(Position),

    /// Pass attempted while placements are available.
    #[error("cannot pass while {0} legal move(s) are available")]
    PassWithLegalMoves(usize),

    /// Pass attempted after the game has ended.
    #[error("cannot pass: the game is over")]
    GameOver,

    /// Undo attempted with an empty history.
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },
}

pub type OthelloResult<T> = Result<T, OthelloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            OthelloError::IllegalMove(Position::new(1, 1)).to_string(),
            "illegal move at a1: no discs would be flipped"
        );
        assert_eq!(
            OthelloError::OutOfBounds { x: 9, y: 2 }.to_string(),
            "position (9, 2) is outside the 8x8 board"
        );
        assert_eq!(
            OthelloError::InvalidOptionValue {
                name: "NormalDepth".to_owned(),
                value: "deep".to_owned(),
            }
            .to_string(),
            "invalid value 'deep' for option 'NormalDepth'"
        );
    }
}
