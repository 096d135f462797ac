//! GameState-to-FEN generator.
//!
//! Emits the board and side-to-move fields faithfully. The engine does not
//! track castling rights or en-passant squares, so those fields are always
//! `-`, and the clocks are reconstructed from the move log.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let board_field = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} - - {} {}",
        board_field,
        side_to_move,
        halfmove_clock(game_state),
        fullmove_number(game_state)
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    // Row 0 is rank 8, which FEN lists first.
    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            match game_state.board().piece_at(square) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

/// Plies since the last capture or pawn move, recovered from the log.
fn halfmove_clock(game_state: &GameState) -> usize {
    game_state
        .move_log()
        .iter()
        .rev()
        .take_while(|mv| !mv.is_capture() && mv.piece_moved().kind != PieceKind::Pawn)
        .count()
}

fn fullmove_number(game_state: &GameState) -> usize {
    game_state.move_log().len() / 2 + 1
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn starting_position_generates_the_expected_fields() {
        let game = GameState::new_game();
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
    }

    #[test]
    fn generated_fen_parses_back_to_the_same_position() {
        let mut game = GameState::new_game();
        let e2e4 = Move::new(Square::new(6, 4), Square::new(4, 4), game.board())
            .expect("e2 is occupied");
        game.make_move(e2e4);

        let reparsed =
            GameState::from_fen(&game.get_fen()).expect("generated FEN should parse back");
        assert_eq!(reparsed.board(), game.board());
        assert_eq!(reparsed.side_to_move(), game.side_to_move());
    }

    #[test]
    fn clocks_are_reconstructed_from_the_log() {
        let mut game = GameState::new_game();

        let e2e4 = Move::new(Square::new(6, 4), Square::new(4, 4), game.board())
            .expect("e2 is occupied");
        game.make_move(e2e4);
        assert!(game.get_fen().ends_with("b - - 0 1"));

        let g8f6 = Move::new(Square::new(0, 6), Square::new(2, 5), game.board())
            .expect("g8 is occupied");
        game.make_move(g8f6);
        assert!(game.get_fen().ends_with("w - - 1 2"));
    }
}
