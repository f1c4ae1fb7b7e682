//! Plain-text board renderer.
//!
//! Produces an ASCII view of any board size for debugging, tests and the CLI.
//! Pieces use their FEN letters and empty squares are `.`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;

/// Render the board with rank 1 at the bottom and file `a` on the left.
pub fn render_board(board: &Board) -> String {
    let size = board.size() as i8;
    let header = file_header(size);
    let mut out = String::new();

    out.push_str(&header);
    out.push('\n');

    for rank in (0..size).rev() {
        out.push_str(&format!("{:>2} ", rank + 1));
        for file in 0..size {
            let symbol = board
                .try_get_piece(Coordinate::new(file, rank))
                .map_or('.', |piece| piece.fen_symbol());
            out.push(symbol);
            if file + 1 < size {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {}\n", rank + 1));
    }

    out.push_str(&header);
    out
}

fn file_header(size: i8) -> String {
    let letters: Vec<String> = (0..size)
        .map(|file| char::from(b'a' + file as u8).to_string())
        .collect();
    format!("   {}", letters.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_position_renders_with_headers() {
        let board = Board::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[1], " 8 r n b q k b n r 8");
        assert_eq!(lines[5], " 4 . . . . . . . . 4");
        assert_eq!(lines[8], " 1 R N B Q K B N R 1");
        assert_eq!(lines[9], lines[0]);
    }

    #[test]
    fn small_boards_render_their_own_width() {
        let board = Board::from_fen("k2/3/2K w - - 0 1").expect("three by three board");
        assert_eq!(
            render_board(&board),
            "   a b c\n 3 k . . 3\n 2 . . . 2\n 1 . . K 1\n   a b c"
        );
    }
}
