//! Bracket detection over the walled grid.
//!
//! The wall ring guarantees that every ray reaches a non-disc cell before it
//! can leave the grid, so no coordinate checks are needed while stepping.

use crate::game_state::othello_rules::GRID_CELLS;
use crate::game_state::othello_types::{Cell, Color, DirectionMask, Position, DIRECTIONS, DIR_NONE};

/// Directions in which a `color` disc placed at `position` would flip
/// opponent discs. Occupied cells always yield `DIR_NONE`.
pub fn check_mobility(grid: &[Cell; GRID_CELLS], position: Position, color: Color) -> DirectionMask {
    let origin = position.grid_index();
    if grid[origin] != Cell::Empty {
        return DIR_NONE;
    }

    let own = color.cell();
    let opponent = color.opposite().cell();
    let mut mask = DIR_NONE;

    for (bit, step) in DIRECTIONS {
        let mut cursor = origin.wrapping_add_signed(step);
        if grid[cursor] != opponent {
            continue;
        }
        cursor = cursor.wrapping_add_signed(step);
        while grid[cursor] == opponent {
            cursor = cursor.wrapping_add_signed(step);
        }
        if grid[cursor] == own {
            mask |= bit;
        }
    }

    mask
}

/// True if `color` has at least one legal placement on `grid`.
pub fn has_any_move(grid: &[Cell; GRID_CELLS], color: Color) -> bool {
    Position::all().any(|p| check_mobility(grid, p, color) != DIR_NONE)
}
