//! Canonical board constants.

use crate::game_state::othello_types::{Color, Position};

/// Side length of the playable region.
pub const BOARD_SIZE: u8 = 8;
/// Side length of the grid including the wall ring.
pub const GRID_WIDTH: usize = BOARD_SIZE as usize + 2;
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_WIDTH;
/// Playable squares.
pub const SQUARES: u8 = BOARD_SIZE * BOARD_SIZE;
/// Discs that can still be placed after the opening four.
pub const MAX_TURNS: u8 = SQUARES - 4;

/// Opening four discs.
pub const INITIAL_DISCS: [(Position, Color); 4] = [
    (Position::new(4, 4), Color::White),
    (Position::new(5, 5), Color::White),
    (Position::new(4, 5), Color::Black),
    (Position::new(5, 4), Color::Black),
];

/// Black always opens.
pub const FIRST_TO_MOVE: Color = Color::Black;
