use crate::game_state::board::Board;
use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::Move;

/// Append the rook slides from `from`: each orthogonal ray continues
/// through empty squares, stops inclusively on the first enemy piece
/// (capture) and exclusively on the first friendly piece.
pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in ROOK_DIRECTIONS {
        let mut target = from;
        while let Some(next) = target.offset(row_delta, col_delta) {
            target = next;
            match board.piece_at(target) {
                None => out.push(Move::from_generation(from, target, rook, None)),
                Some(occupant) => {
                    if occupant.color != rook.color {
                        out.push(Move::from_generation(from, target, rook, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}
