use crate::game_state::othello_types::Disc;

/// Single undo record for `apply_move` / `pass` / `undo`.
///
/// `changed[0]` is the placed disc, the rest are flipped discs, all carrying
/// the mover's color. An empty record is a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoState {
    pub changed: Vec<Disc>,
}

impl UndoState {
    #[inline]
    pub fn pass() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.changed.is_empty()
    }

    /// Number of opponent discs turned over.
    #[inline]
    pub fn flipped(&self) -> usize {
        self.changed.len().saturating_sub(1)
    }
}
