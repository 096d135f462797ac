use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::generate_rook_moves;

/// Queen movement is the union of the rook and bishop slides from the same
/// square.
pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut Vec<Move>) {
    generate_rook_moves(board, from, queen, out);
    generate_bishop_moves(board, from, queen, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::Move;

    #[test]
    fn open_board_queen_covers_all_lines_and_diagonals() {
        let mut board = Board::empty();
        let from = Square::new(4, 3);
        let queen = Piece::new(Color::White, PieceKind::Queen);
        board.set(from, Some(queen));

        let mut out = Vec::<Move>::new();
        generate_queen_moves(&board, from, queen, &mut out);

        assert_eq!(out.len(), 27);
        assert!(out.iter().all(|mv| mv.piece_moved() == queen));
    }

    #[test]
    fn queen_notation_carries_the_queen_letter() {
        let mut board = Board::empty();
        let from = Square::new(4, 3);
        let queen = Piece::new(Color::White, PieceKind::Queen);
        board.set(from, Some(queen));
        board.set(
            Square::new(4, 7),
            Some(Piece::new(Color::Black, PieceKind::Rook)),
        );

        let mut out = Vec::<Move>::new();
        generate_queen_moves(&board, from, queen, &mut out);

        let capture = out
            .iter()
            .find(|mv| mv.end() == Square::new(4, 7))
            .expect("rook on the open rank should be capturable");
        assert_eq!(capture.get_chess_notation(), "Qxh4");
    }
}
