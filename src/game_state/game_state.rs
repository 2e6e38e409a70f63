//! Core incremental board state representation.
//!
//! `GameState` owns the walled grid, the disc counters, the per-ply legality
//! cache and the undo stack. Search mutates one instance in place through
//! `apply_move` / `pass` / `undo`, which must nest strictly LIFO.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::move_cache::MoveCacheStack;
use crate::game_state::othello_rules::{
    FIRST_TO_MOVE, GRID_CELLS, INITIAL_DISCS, MAX_TURNS, SQUARES,
};
use crate::game_state::othello_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::mobility::{check_mobility, has_any_move};

#[derive(Debug, Clone)]
pub struct GameState {
    grid: [Cell; GRID_CELLS],

    // Indexed by `Cell::index()`; the wall slot stays 0.
    discs: [u8; 4],

    side_to_move: Color,
    turns: u8,

    move_cache: MoveCacheStack,
    undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl PartialEq for GameState {
    /// Two states are equal when every observable of the position matches;
    /// cache storage beyond the current ply is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.discs == other.discs
            && self.side_to_move == other.side_to_move
            && self.turns == other.turns
            && self.undo_stack == other.undo_stack
            && self.move_cache.current().legal_moves == other.move_cache.current().legal_moves
            && self.move_cache.current().directions == other.move_cache.current().directions
    }
}

impl Eq for GameState {}

impl GameState {
    /// Opening position: four centre discs, Black to move, turn 0.
    pub fn new_game() -> Self {
        let mut state = Self {
            grid: [Cell::Wall; GRID_CELLS],
            discs: [0; 4],
            side_to_move: FIRST_TO_MOVE,
            turns: 0,
            move_cache: MoveCacheStack::default(),
            undo_stack: Vec::with_capacity(MAX_TURNS as usize + 8),
        };
        state.reset();
        state
    }

    /// Build a position from explicit disc placements, bypassing move
    /// legality. `turns` is derived from the number of discs on the board.
    ///
    /// Intended for tests and curated positions; the undo stack starts empty.
    pub fn from_discs(discs: &[(Position, Color)], side_to_move: Color) -> OthelloResult<Self> {
        let mut state = Self::new_game();
        state.clear_grid();

        for &(position, color) in discs {
            if !position.is_on_board() {
                return Err(OthelloError::OutOfBounds {
                    x: position.x,
                    y: position.y,
                });
            }
            let idx = position.grid_index();
            if let Some(previous) = state.grid[idx].color() {
                state.discs[previous.cell().index()] -= 1;
                state.discs[Cell::Empty.index()] += 1;
            }
            state.grid[idx] = color.cell();
            state.discs[color.cell().index()] += 1;
            state.discs[Cell::Empty.index()] -= 1;
        }

        let placed = SQUARES - state.discs[Cell::Empty.index()];
        state.turns = placed.saturating_sub(4);
        state.side_to_move = side_to_move;
        state.rebuild_root_cache();
        Ok(state)
    }

    /// Return to the opening position, discarding history.
    pub fn reset(&mut self) {
        self.clear_grid();
        for (position, color) in INITIAL_DISCS {
            self.grid[position.grid_index()] = color.cell();
            self.discs[color.cell().index()] += 1;
            self.discs[Cell::Empty.index()] -= 1;
        }
        self.side_to_move = FIRST_TO_MOVE;
        self.turns = 0;
        self.rebuild_root_cache();
    }

    fn clear_grid(&mut self) {
        self.grid = [Cell::Wall; GRID_CELLS];
        for p in Position::all() {
            self.grid[p.grid_index()] = Cell::Empty;
        }
        self.discs = [0; 4];
        self.discs[Cell::Empty.index()] = SQUARES;
        self.undo_stack.clear();
    }

    fn rebuild_root_cache(&mut self) {
        self.move_cache.reset();
        self.fill_current_cache();
    }

    /// Recompute legal moves and direction masks for the current ply.
    fn fill_current_cache(&mut self) {
        let side = self.side_to_move;
        let cache = self.move_cache.current_mut();
        cache.clear();
        for p in Position::all() {
            let mask = check_mobility(&self.grid, p, side);
            if mask != DIR_NONE {
                cache.legal_moves.push(p);
            }
            cache.directions[p.grid_index()] = mask;
        }
    }

    fn advance_ply(&mut self, record: UndoState) {
        self.undo_stack.push(record);
        self.side_to_move = self.side_to_move.opposite();
        self.move_cache.push();
        self.fill_current_cache();
    }

    /// Legal placements for the side to move, in row-major scan order. An
    /// empty slice means the side must pass.
    #[inline]
    pub fn legal_moves(&self) -> &[Position] {
        &self.move_cache.current().legal_moves
    }

    /// Cached bracket directions for `position` at the current ply.
    #[inline]
    pub fn directions_at(&self, position: Position) -> DirectionMask {
        if !position.is_on_board() {
            return DIR_NONE;
        }
        self.move_cache.current().direction_at(position)
    }

    #[inline]
    pub fn is_legal(&self, position: Position) -> bool {
        self.directions_at(position) != DIR_NONE
    }

    /// Place a disc for the side to move and flip every bracketed run.
    ///
    /// Fails without touching the board if `position` is off the board or
    /// brackets nothing.
    pub fn apply_move(&mut self, position: Position) -> OthelloResult<()> {
        if !position.is_on_board() {
            return Err(OthelloError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        let mask = self.move_cache.current().direction_at(position);
        if mask == DIR_NONE {
            return Err(OthelloError::IllegalMove(position));
        }

        let mover = self.side_to_move;
        let own = mover.cell();
        let origin = position.grid_index();

        let mut changed = Vec::with_capacity(20);
        self.grid[origin] = own;
        changed.push(Disc {
            position,
            color: mover,
        });

        for (bit, step) in DIRECTIONS {
            if mask & bit == DIR_NONE {
                continue;
            }
            // Legality was cached, so the run ends on an own disc.
            let mut cursor = origin.wrapping_add_signed(step);
            while self.grid[cursor] != own {
                self.grid[cursor] = own;
                changed.push(Disc {
                    position: Position::from_grid_index(cursor),
                    color: mover,
                });
                cursor = cursor.wrapping_add_signed(step);
            }
        }

        let placed = changed.len() as u8;
        self.discs[own.index()] += placed;
        self.discs[mover.opposite().cell().index()] -= placed - 1;
        self.discs[Cell::Empty.index()] -= 1;

        self.turns += 1;
        self.advance_ply(UndoState { changed });
        Ok(())
    }

    /// Hand the move to the opponent. Only allowed when the side to move has
    /// no placement and the game is not over.
    pub fn pass(&mut self) -> OthelloResult<()> {
        let available = self.legal_moves().len();
        if available != 0 {
            return Err(OthelloError::PassWithLegalMoves(available));
        }
        if self.is_terminal() {
            return Err(OthelloError::GameOver);
        }
        self.advance_ply(UndoState::pass());
        Ok(())
    }

    /// Revert the most recent move or pass exactly.
    pub fn undo(&mut self) -> OthelloResult<()> {
        let record = self.undo_stack.pop().ok_or(OthelloError::NothingToUndo)?;
        self.move_cache.pop();
        self.side_to_move = self.side_to_move.opposite();

        if record.is_pass() {
            return Ok(());
        }

        let mover = self.side_to_move;
        let opponent = mover.opposite().cell();
        let mut discs = record.changed.iter();
        if let Some(placed) = discs.next() {
            self.grid[placed.position.grid_index()] = Cell::Empty;
        }
        for flipped in discs {
            self.grid[flipped.position.grid_index()] = opponent;
        }

        let placed = record.changed.len() as u8;
        self.discs[mover.cell().index()] -= placed;
        self.discs[opponent.index()] += placed - 1;
        self.discs[Cell::Empty.index()] += 1;
        self.turns -= 1;
        Ok(())
    }

    /// Apply `position`, run `f` on the resulting state, then undo. The
    /// board is restored before `f`'s result is handed back, whatever it is.
    pub fn with_move<T>(
        &mut self,
        position: Position,
        f: impl FnOnce(&mut Self) -> T,
    ) -> OthelloResult<T> {
        self.apply_move(position)?;
        let out = f(self);
        self.undo()?;
        Ok(out)
    }

    /// `with_move` for a forced pass.
    pub fn with_pass<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> OthelloResult<T> {
        self.pass()?;
        let out = f(self);
        self.undo()?;
        Ok(out)
    }

    /// True when all 60 placements are made or neither side can move.
    pub fn is_terminal(&self) -> bool {
        if self.turns >= MAX_TURNS {
            return true;
        }
        if !self.legal_moves().is_empty() {
            return false;
        }
        !has_any_move(&self.grid, self.side_to_move.opposite())
    }

    /// Content of `position`; off-board coordinates read as `Cell::Wall`.
    #[inline]
    pub fn color_at(&self, position: Position) -> Cell {
        if !position.is_on_board() {
            return Cell::Wall;
        }
        self.grid[position.grid_index()]
    }

    /// Count of `cell` on the playable region; walls count as 0.
    #[inline]
    pub fn count_discs(&self, cell: Cell) -> u8 {
        self.discs[cell.index()]
    }

    #[inline]
    pub fn current_side(&self) -> Color {
        self.side_to_move
    }

    /// Discs placed since the opening (passes excluded).
    #[inline]
    pub fn turn_index(&self) -> u8 {
        self.turns
    }

    /// Moves and passes currently on the undo stack.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Placements still available before the board is full.
    #[inline]
    pub fn remaining_turns(&self) -> u8 {
        MAX_TURNS.saturating_sub(self.turns)
    }

    /// Discs written by the last move (placed disc first); empty after a
    /// pass or at the start of the game.
    pub fn last_change(&self) -> &[Disc] {
        self.undo_stack
            .last()
            .map(|record| record.changed.as_slice())
            .unwrap_or(&[])
    }

    /// `color`'s discs minus the opponent's.
    pub fn disc_difference(&self, color: Color) -> i32 {
        i32::from(self.count_discs(color.cell()))
            - i32::from(self.count_discs(color.opposite().cell()))
    }

    /// Winner by disc count once the game is over; `None` while play
    /// continues or on a draw.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_terminal() {
            return None;
        }
        match self.disc_difference(Color::Black) {
            d if d > 0 => Some(Color::Black),
            d if d < 0 => Some(Color::White),
            _ => None,
        }
    }
}
