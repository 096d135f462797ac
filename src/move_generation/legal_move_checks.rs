//! Attack and check queries built on the pseudo-legal generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_generator::pseudo_legal_moves_for;

/// Whether any pseudo-legal move of `attacker` lands on `square`.
///
/// Regenerates the attacker's full move set on every call; the legality
/// filter above this is the documented O(candidates x opponent candidates)
/// hot path.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    pseudo_legal_moves_for(board, attacker)
        .iter()
        .any(|reply| reply.end() == square)
}

/// Whether `color`'s king is currently attacked.
///
/// A missing king reports not-in-check so deliberately partial test
/// positions stay usable; during normal play the king is always present.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => false,
    }
}
