//! Value types shared by the board, move generation and search.
//!
//! Coordinates are 1-indexed over the playable 8x8 region and address a
//! 10x10 grid whose outer ring is `Cell::Wall`, so ray casts never need
//! bounds checks.

use std::fmt;

use crate::game_state::othello_rules::{BOARD_SIZE, GRID_WIDTH};

/// Side to move / disc owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Content of one grid cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
    Wall = 3,
}

impl Cell {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Owner of the disc in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Wall => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.cell()
    }
}

/// Board coordinate: `x` is the column (a..h), `y` the row (1..8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True when the coordinate lies inside the playable 8x8 region.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x >= 1 && self.x <= BOARD_SIZE && self.y >= 1 && self.y <= BOARD_SIZE
    }

    /// Flat index into the walled 10x10 grid. Only meaningful for on-board
    /// positions.
    #[inline]
    pub const fn grid_index(self) -> usize {
        self.y as usize * GRID_WIDTH + self.x as usize
    }

    #[inline]
    pub const fn from_grid_index(index: usize) -> Self {
        Self {
            x: (index % GRID_WIDTH) as u8,
            y: (index / GRID_WIDTH) as u8,
        }
    }

    /// All 64 playable positions in row-major order (row 1 first).
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", char::from(b'a' + self.x - 1), self.y)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// A cell together with the color written to it by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disc {
    pub position: Position,
    pub color: Color,
}

/// One bit per compass direction in which a placement brackets discs.
pub type DirectionMask = u8;

pub const DIR_NONE: DirectionMask = 0;
pub const DIR_NORTH: DirectionMask = 1 << 0;
pub const DIR_NORTH_WEST: DirectionMask = 1 << 1;
pub const DIR_WEST: DirectionMask = 1 << 2;
pub const DIR_SOUTH_WEST: DirectionMask = 1 << 3;
pub const DIR_SOUTH: DirectionMask = 1 << 4;
pub const DIR_SOUTH_EAST: DirectionMask = 1 << 5;
pub const DIR_EAST: DirectionMask = 1 << 6;
pub const DIR_NORTH_EAST: DirectionMask = 1 << 7;

const W: isize = GRID_WIDTH as isize;

/// Direction bit paired with its step on the flat grid. North is row - 1.
pub const DIRECTIONS: [(DirectionMask, isize); 8] = [
    (DIR_NORTH, -W),
    (DIR_NORTH_WEST, -W - 1),
    (DIR_WEST, -1),
    (DIR_SOUTH_WEST, W - 1),
    (DIR_SOUTH, W),
    (DIR_SOUTH_EAST, W + 1),
    (DIR_EAST, 1),
    (DIR_NORTH_EAST, -W + 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_index_round_trips_for_every_playable_position() {
        for p in Position::all() {
            assert_eq!(Position::from_grid_index(p.grid_index()), p);
        }
        assert_eq!(Position::all().count(), 64);
    }

    #[test]
    fn on_board_excludes_the_wall_ring() {
        assert!(Position::new(1, 1).is_on_board());
        assert!(Position::new(8, 8).is_on_board());
        assert!(!Position::new(0, 4).is_on_board());
        assert!(!Position::new(4, 9).is_on_board());
        assert!(!Position::new(200, 3).is_on_board());
    }

    #[test]
    fn display_uses_column_letter_and_row_digit() {
        assert_eq!(Position::new(4, 3).to_string(), "d3");
        assert_eq!(Position::new(8, 8).to_string(), "h8");
        assert_eq!(Position::new(0, 3).to_string(), "(0, 3)");
    }

    #[test]
    fn direction_bits_are_distinct() {
        let combined = DIRECTIONS.iter().fold(DIR_NONE, |acc, (bit, _)| {
            assert_eq!(acc & bit, 0);
            acc | bit
        });
        assert_eq!(combined, 0xFF);
    }
}
