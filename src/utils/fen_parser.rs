//! FEN-to-GameState parser.
//!
//! Builds a board and side to move from a Forsyth-Edwards Notation string.
//! The castling, en-passant, and clock fields are validated for shape but
//! not stored: the engine does not model those rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    validate_castling_field(castling_part)?;
    validate_en_passant_field(en_passant_part)?;
    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    Ok(GameState::from_parts(board, side_to_move))
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is board row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }
            board.set(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(format!("Board rank {} does not cover 8 files", 8 - row));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(format!("Invalid side-to-move field: {other}")),
    }
}

fn validate_castling_field(castling_part: &str) -> Result<(), String> {
    if castling_part == "-" {
        return Ok(());
    }
    if castling_part.is_empty() || !castling_part.chars().all(|ch| "KQkq".contains(ch)) {
        return Err(format!("Invalid castling rights field: {castling_part}"));
    }
    Ok(())
}

fn validate_en_passant_field(en_passant_part: &str) -> Result<(), String> {
    if en_passant_part == "-" {
        return Ok(());
    }
    algebraic_to_square(en_passant_part)?;
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn starting_position_parses_to_the_standard_setup() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.board().piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            game.board().piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(game.board().piece_at(Square::new(4, 4)), None);
    }

    #[test]
    fn side_to_move_field_is_honored() {
        let game = parse_fen("8/8/8/8/8/8/8/8 b - - 0 1").expect("empty board FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - -").is_err());
    }

    #[test]
    fn trailing_fields_are_rejected() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").is_err());
    }

    #[test]
    fn malformed_board_layouts_are_rejected() {
        // Seven ranks.
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        // Bad piece character.
        assert!(parse_fen("8/8/8/8/8/8/8/7x w - - 0 1").is_err());
        // Rank too short.
        assert!(parse_fen("8/8/8/8/8/8/8/6p w - - 0 1").is_err());
        // Rank too long.
        assert!(parse_fen("8/8/8/8/8/8/8/8p w - - 0 1").is_err());
    }

    #[test]
    fn unmodeled_fields_are_validated_for_shape() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 w KQkq e3 0 1").is_ok());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w XY - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - many 1").is_err());
    }
}
