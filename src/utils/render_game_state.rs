//! Plain-text board renderer for logs and test failure output.

use crate::game_state::game_state::GameState;
use crate::game_state::othello_rules::BOARD_SIZE;
use crate::game_state::othello_types::{Cell, Position};

/// Render the board with `X` for Black, `O` for White and `.` for empty,
/// columns `a`..`h` left to right and row 1 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 1..=BOARD_SIZE {
        out.push(char::from(b'0' + y));
        out.push(' ');

        for x in 1..=BOARD_SIZE {
            out.push(cell_to_char(game_state.color_at(Position::new(x, y))));
            if x < BOARD_SIZE {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "black {} white {} empty {} to move {:?}",
        game_state.count_discs(Cell::Black),
        game_state.count_discs(Cell::White),
        game_state.count_discs(Cell::Empty),
        game_state.current_side()
    ));

    out
}

fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Black => 'X',
        Cell::White => 'O',
        Cell::Empty => '.',
        Cell::Wall => '#',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_renders_centre_discs() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "4 . . . O X . . .");
        assert_eq!(lines[5], "5 . . . X O . . .");
        assert_eq!(lines[9], "black 2 white 2 empty 60 to move Black");
    }
}
