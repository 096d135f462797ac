//! Immutable move descriptors and simplified algebraic notation.
//!
//! A [`Move`] is a frozen record of intent plus capture context: the squares
//! involved and what the board held on them when the move was generated. It
//! stays valid evidence of that snapshot even after the board changes, which
//! is what makes the move log usable for undo.

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// A single move: start and end squares plus the occupants captured from
/// the board at construction time. Applied at most once, then retained only
/// in the move log.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
}

impl Move {
    /// Build a move from raw squares against the current board, copying
    /// both occupants into the descriptor.
    ///
    /// An empty start square is an explicit error: silently recording
    /// "nothing" as the moved piece would corrupt the undo log later.
    pub fn new(start: Square, end: Square, board: &Board) -> Result<Self, MoveError> {
        let Some(piece_moved) = board.piece_at(start) else {
            return Err(MoveError::EmptyStartSquare(start));
        };
        Ok(Self {
            start,
            end,
            piece_moved,
            piece_captured: board.piece_at(end),
        })
    }

    /// Constructor for the move generators, which already hold the
    /// occupants they scanned.
    #[inline]
    pub(crate) fn from_generation(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    /// The piece that stood on the start square when the move was built.
    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// The piece that stood on the end square when the move was built, if
    /// any.
    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Simplified algebraic notation: piece letter plus destination, with
    /// `x` marking captures; pawn pushes are the bare destination and pawn
    /// captures lead with the origin file letter.
    ///
    /// Display convenience only. This is not a reversible move encoding and
    /// must not be used as a move's stored form.
    pub fn get_chess_notation(&self) -> String {
        let destination = self.end.to_string();
        match (self.piece_moved.kind, self.piece_captured.is_some()) {
            (PieceKind::Pawn, false) => destination,
            (PieceKind::Pawn, true) => format!("{}x{}", self.start.file_char(), destination),
            (kind, false) => format!("{}{}", kind.notation_letter(), destination),
            (kind, true) => format!("{}x{}", kind.notation_letter(), destination),
        }
    }
}

/// Identity is the (start, end) square pair; the occupant snapshot is
/// evidence, not identity. A promotion-choice field must join this
/// comparison if promotion is ever added.
impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// Errors surfaced at the move construction and application boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move references a start square with no piece on it.
    EmptyStartSquare(Square),
    /// The piece on the start square belongs to the side not on move.
    NotSideToMove {
        square: Square,
        side_to_move: Color,
    },
    /// The move is not in the current legal move set.
    NotLegal { start: Square, end: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyStartSquare(square) => {
                write!(f, "no piece on start square {square}")
            }
            MoveError::NotSideToMove {
                square,
                side_to_move,
            } => {
                write!(
                    f,
                    "piece on {square} does not belong to the side to move ({side_to_move:?})"
                )
            }
            MoveError::NotLegal { start, end } => {
                write!(f, "move {start}{end} is not legal in this position")
            }
        }
    }
}

impl Error for MoveError {}
