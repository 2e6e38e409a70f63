use crate::errors::OthelloResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub passes: u64,
    pub terminals: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.passes += rhs.passes;
        self.terminals += rhs.terminals;
    }
}

/// Count leaf positions `depth` plies below `game_state`. A forced pass is
/// one ply; finished games end their branch early and count as a leaf.
///
/// The state is walked in place and left exactly as it was passed in.
pub fn perft(game_state: &mut GameState, depth: u8) -> OthelloResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    if game_state.is_terminal() {
        return Ok(PerftCounts {
            nodes: 1,
            terminals: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let move_count = game_state.legal_moves().len();

    if move_count == 0 {
        let mut below = game_state.with_pass(|next| perft(next, depth - 1))??;
        below.passes += 1;
        total.merge(below);
        return Ok(total);
    }

    // The cache for this ply is restored by every undo, so indexing it
    // again after each child is sound.
    for i in 0..move_count {
        let mv = game_state.legal_moves()[i];
        let below = game_state.with_move(mv, |next| perft(next, depth - 1))??;
        total.merge(below);
    }

    Ok(total)
}
