//! Pseudo-legal and legal move generation pipeline.
//!
//! Enumerates per-piece candidates for the side to move, then filters to
//! fully legal moves by simulating each candidate and rejecting outcomes
//! that leave the mover's own king attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Pseudo-legal moves for the side to move: a row-major square scan with
/// per-piece dispatch. Output order is deterministic but carries no
/// meaning; callers must not rely on it.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    pseudo_legal_moves_for(game_state.board(), game_state.side_to_move())
}

/// Pseudo-legal moves for `side` on `board`, independent of whose turn the
/// surrounding game says it is. Attack testing runs this for the opponent.
pub fn pseudo_legal_moves_for(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Square::new(row, col);
            if let Some(piece) = board.piece_at(from) {
                if piece.color == side {
                    piece_moves(board, from, piece, &mut out);
                }
            }
        }
    }

    out
}

/// Dispatch one square's occupant to its movement rule. The match is
/// exhaustive over `PieceKind`, so a piece kind without a rule cannot
/// compile.
fn piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
    }
}

/// Legal moves for the side to move.
///
/// Every candidate is applied to a scratch copy of the state, then the full
/// opposing pseudo-legal move set is regenerated to test whether any reply
/// lands on the mover's king. That makes a call O(candidates x opponent
/// candidates); an attack-map cache is the known optimization once this
/// shows up in a profile.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mover = game_state.side_to_move();
    let candidates = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let mut scratch = game_state.clone();
        scratch.make_move(candidate);
        if !is_king_in_check(scratch.board(), mover) {
            legal.push(candidate);
        }
    }

    legal
}
