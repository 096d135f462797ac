use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_JUMPS;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::Move;

/// Append the knight jumps from `from`: the eight (1,2)/(2,1) offsets,
/// landing on any on-board square that is empty or enemy-occupied. Knights
/// jump over intervening pieces.
pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in KNIGHT_JUMPS {
        let Some(target) = from.offset(row_delta, col_delta) else {
            continue;
        };
        match board.piece_at(target) {
            None => out.push(Move::from_generation(from, target, knight, None)),
            Some(occupant) if occupant.color != knight.color => {
                out.push(Move::from_generation(from, target, knight, Some(occupant)));
            }
            Some(_) => {}
        }
    }
}
