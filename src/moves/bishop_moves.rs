use crate::game_state::board::Board;
use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::Move;

/// Append the bishop slides from `from`: each diagonal ray continues
/// through empty squares, stops inclusively on the first enemy piece
/// (capture) and exclusively on the first friendly piece.
pub fn generate_bishop_moves(board: &Board, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in BISHOP_DIRECTIONS {
        let mut target = from;
        while let Some(next) = target.offset(row_delta, col_delta) {
            target = next;
            match board.piece_at(target) {
                None => out.push(Move::from_generation(from, target, bishop, None)),
                Some(occupant) => {
                    if occupant.color != bishop.color {
                        out.push(Move::from_generation(from, target, bishop, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}
