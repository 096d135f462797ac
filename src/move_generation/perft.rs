//! Node-count verification over the legal move generator.
//!
//! Perft walks the legal move tree to a fixed depth and counts leaves. With
//! castling, en passant, and promotion unmodeled, the counts from the
//! starting position still match the standard reference table through depth
//! 4, where those special moves contribute nothing.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Aggregate counts for one perft walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

/// Count leaf nodes of the legal move tree rooted at `game_state`, plus
/// how many of the leaf-entering moves were captures.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();

    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    perft_recurse(game_state, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_legal_moves(game_state);

    if depth == 1 {
        counts.nodes += moves.len() as u64;
        counts.captures += moves.iter().filter(|mv| mv.is_capture()).count() as u64;
        return;
    }

    for mv in moves {
        let mut next = game_state.clone();
        next.make_move(mv);
        perft_recurse(&next, depth - 1, counts);
    }
}
