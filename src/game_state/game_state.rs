//! Core mutable game state.
//!
//! `GameState` owns the board, the side to move, and the append-only move
//! log that backs undo. All mutation funnels through `make_move` and
//! `undo_move`; one call completes before the next begins, and there is no
//! internal locking. Concurrent analysis must work on a clone.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_pseudo_legal_moves,
};
use crate::moves::move_descriptions::{Move, MoveError};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
}

impl GameState {
    /// Standard starting position, white to move, empty log.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assemble a state from parts; used by the FEN parser.
    #[inline]
    pub(crate) fn from_parts(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            move_log: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Applied moves, oldest first. Backs undo only; not a replay or
    /// serialization format.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Apply `mv` without legality checks, trusting the caller to pass a
    /// move drawn from [`valid_moves`](Self::valid_moves).
    ///
    /// Panics when the start square is empty: applying a move with no
    /// mover is a programming error, never a silent no-op.
    pub fn make_move(&mut self, mv: Move) {
        assert!(
            self.board.piece_at(mv.start()).is_some(),
            "make_move from empty square {}",
            mv.start()
        );
        self.board.set(mv.start(), None);
        self.board.set(mv.end(), Some(mv.piece_moved()));
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Validating counterpart of [`make_move`](Self::make_move) for
    /// untrusted callers. Rejects without mutating anything.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let Some(piece) = self.board.piece_at(mv.start()) else {
            return Err(MoveError::EmptyStartSquare(mv.start()));
        };
        if piece.color != self.side_to_move {
            return Err(MoveError::NotSideToMove {
                square: mv.start(),
                side_to_move: self.side_to_move,
            });
        }
        if !self.valid_moves().contains(&mv) {
            return Err(MoveError::NotLegal {
                start: mv.start(),
                end: mv.end(),
            });
        }
        self.make_move(mv);
        Ok(())
    }

    /// Reverse the most recent move; the exact inverse of
    /// [`make_move`](Self::make_move).
    ///
    /// No-op on an empty log, so a UI undo binding can call this
    /// speculatively without guarding.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        self.board.set(mv.start(), Some(mv.piece_moved()));
        self.board.set(mv.end(), mv.piece_captured());
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Moves that obey the piece movement rules and leave the mover's own
    /// king safe.
    #[inline]
    pub fn valid_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Pseudo-legal moves only; may leave the mover's king attacked.
    #[inline]
    pub fn all_possible_moves(&self) -> Vec<Move> {
        generate_pseudo_legal_moves(self)
    }
}
