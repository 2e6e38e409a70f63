//! Per-ply legality cache.
//!
//! Each ply owns the list of legal placements for the side to move and the
//! direction mask of every grid cell. Entries live in an arena that grows on
//! demand and is never shrunk, so `push`/`pop` reuse storage and only the
//! entry at the current ply is ever read.

use crate::game_state::othello_rules::GRID_CELLS;
use crate::game_state::othello_types::{DirectionMask, Position, DIR_NONE};

#[derive(Debug, Clone)]
pub struct MoveCache {
    pub legal_moves: Vec<Position>,
    pub directions: [DirectionMask; GRID_CELLS],
}

impl Default for MoveCache {
    fn default() -> Self {
        Self {
            legal_moves: Vec::with_capacity(32),
            directions: [DIR_NONE; GRID_CELLS],
        }
    }
}

impl MoveCache {
    #[inline]
    pub fn clear(&mut self) {
        self.legal_moves.clear();
        self.directions = [DIR_NONE; GRID_CELLS];
    }

    #[inline]
    pub fn direction_at(&self, position: Position) -> DirectionMask {
        self.directions[position.grid_index()]
    }
}

/// Arena of `MoveCache` entries indexed by ply.
#[derive(Debug, Clone)]
pub struct MoveCacheStack {
    entries: Vec<MoveCache>,
    top: usize,
}

impl Default for MoveCacheStack {
    fn default() -> Self {
        Self {
            entries: vec![MoveCache::default()],
            top: 0,
        }
    }
}

impl MoveCacheStack {
    #[inline]
    pub fn current(&self) -> &MoveCache {
        &self.entries[self.top]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut MoveCache {
        &mut self.entries[self.top]
    }

    /// Advance to a fresh entry for the next ply and return it cleared.
    pub fn push(&mut self) -> &mut MoveCache {
        self.top += 1;
        if self.top == self.entries.len() {
            self.entries.push(MoveCache::default());
        }
        let entry = &mut self.entries[self.top];
        entry.clear();
        entry
    }

    /// Drop the current entry; the previous ply's entry becomes current
    /// again exactly as it was left. Returns false at the root.
    pub fn pop(&mut self) -> bool {
        if self.top == 0 {
            return false;
        }
        self.top -= 1;
        true
    }

    /// Return to ply 0 with a cleared root entry.
    pub fn reset(&mut self) -> &mut MoveCache {
        self.top = 0;
        let entry = &mut self.entries[0];
        entry.clear();
        entry
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.top
    }
}
