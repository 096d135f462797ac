//! Canonical chess-rule constants.
//!
//! Static movement facts shared by the per-piece rules: the standard
//! starting position, pawn geometry per color, and the direction tables for
//! the stepping and sliding pieces.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Orthogonal slide directions as (row, col) deltas.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Diagonal slide directions as (row, col) deltas.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// All eight one-step king directions.
pub const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight knight jump offsets.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Forward row delta for a color's pawns; white advances toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row a color's pawns start on, from which a double advance is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}
