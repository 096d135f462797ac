use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::Move;

/// Append the pawn moves available from `from`: a single forward advance
/// onto an empty square, a double advance from the start row through an
/// empty intermediate, and diagonal captures onto enemy-occupied squares.
///
/// Pawns never move backward. En passant and promotion are not modeled.
pub fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let forward = pawn_direction(pawn.color);

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(Move::from_generation(from, one_step, pawn, None));

            if from.row() == pawn_start_row(pawn.color) {
                if let Some(two_steps) = from.offset(2 * forward, 0) {
                    if board.piece_at(two_steps).is_none() {
                        out.push(Move::from_generation(from, two_steps, pawn, None));
                    }
                }
            }
        }
    }

    // Diagonal captures only; a pawn cannot advance onto an occupied square.
    for col_delta in [-1i8, 1] {
        let Some(target) = from.offset(forward, col_delta) else {
            continue;
        };
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color != pawn.color {
                out.push(Move::from_generation(from, target, pawn, Some(occupant)));
            }
        }
    }
}
