//! Shared helpers for integration tests and benches.
//!
//! Positions are written in FEN-style text and loaded through the public
//! `place_piece`/`set_*` hooks; halfmove and fullmove fields are accepted but
//! ignored.

#![allow(dead_code)]

use plum_movegen::game_state::board_state::BoardState;
use plum_movegen::game_state::chess_types::*;
use plum_movegen::move_generation::legality_filter::LegalMoveGenerator;
use plum_movegen::utils::algebraic::algebraic_to_square;

pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub board: BoardState,
    pub side: Color,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_position(text: &str) -> Result<Position, String> {
    let mut parts = text.split_whitespace();

    let board_part = parts.next().ok_or("missing board layout")?;
    let side_part = parts.next().ok_or("missing side to move")?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    let mut board = BoardState::empty();
    load_pieces(board_part, &mut board)?;

    let side = match side_part {
        "w" => Color::Light,
        "b" => Color::Dark,
        _ => return Err(format!("invalid side to move: {side_part}")),
    };

    board.set_castling_rights(parse_castling_rights(castling_part)?);

    let en_passant = match en_passant_part {
        "-" => None,
        square => Some(algebraic_to_square(square).map_err(|err| err.to_string())?),
    };
    board
        .set_en_passant_square(en_passant)
        .map_err(|err| err.to_string())?;

    board.validate().map_err(|err| err.to_string())?;
    Ok(Position { board, side })
}

fn load_pieces(board_part: &str, board: &mut BoardState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let (color, piece) =
                piece_from_char(ch).ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            if file >= 8 {
                return Err(format!("rank {} has too many files", rank + 1));
            }
            board
                .place_piece(color, piece, rank * 8 + file)
                .map_err(|err| err.to_string())?;
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank {} does not sum to 8 files", rank + 1));
        }
    }
    Ok(())
}

fn parse_castling_rights(text: &str) -> Result<CastlingRights, String> {
    if text == "-" {
        return Ok(0);
    }
    text.chars().try_fold(0, |rights, ch| match ch {
        'K' => Ok(rights | CASTLE_LIGHT_KINGSIDE),
        'Q' => Ok(rights | CASTLE_LIGHT_QUEENSIDE),
        'k' => Ok(rights | CASTLE_DARK_KINGSIDE),
        'q' => Ok(rights | CASTLE_DARK_QUEENSIDE),
        _ => Err(format!("invalid castling character: {ch}")),
    })
}

fn piece_from_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, piece))
}

/// Count leaf nodes of the legal move tree, playing and taking back moves on
/// `board` in place.
pub fn perft(generator: &LegalMoveGenerator<'_>, board: &mut BoardState, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator
        .legal_moves(board, side)
        .expect("both kings should be on the board");
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        board.apply_move(mv).expect("legal move should apply");
        nodes += perft(generator, board, side.opposite(), depth - 1);
        board.undo_move(mv).expect("undo should mirror apply");
    }
    nodes
}
