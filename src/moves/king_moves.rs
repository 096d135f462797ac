use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_DIRECTIONS;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::Move;

/// Append the king steps from `from`: exactly one square in each of the
/// eight directions, onto empty or enemy-occupied squares. Castling is not
/// modeled. Stepping into attacked squares is filtered later by the
/// legality pass, not here.
pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in KING_DIRECTIONS {
        let Some(target) = from.offset(row_delta, col_delta) else {
            continue;
        };
        match board.piece_at(target) {
            None => out.push(Move::from_generation(from, target, king, None)),
            Some(occupant) if occupant.color != king.color => {
                out.push(Move::from_generation(from, target, king, Some(occupant)));
            }
            Some(_) => {}
        }
    }
}
