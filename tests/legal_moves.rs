mod common;

use common::{init_logging, load_position, STARTPOS};
use plum_movegen::chess_errors::ChessError;
use plum_movegen::game_state::board_state::BoardState;
use plum_movegen::game_state::chess_types::*;
use plum_movegen::move_generation::legality_filter::{LegalMoveGenerator, PositionStatus};
use plum_movegen::move_generation::move_generator::MoveGenerator;
use plum_movegen::moves::chess_move::Move;
use plum_movegen::utils::algebraic::algebraic_to_square;

fn square(text: &str) -> Square {
    algebraic_to_square(text).expect("test coordinate should parse")
}

fn find_move(moves: &[Move], text: &str) -> Option<Move> {
    moves.iter().copied().find(|m| m.to_string() == text)
}

#[test]
fn initial_position_has_twenty_legal_moves() {
    init_logging();
    let position = load_position(STARTPOS).expect("start position should load");
    assert_eq!(position.board, BoardState::new_game());

    let legal = LegalMoveGenerator::default()
        .legal_moves(&position.board, Color::Light)
        .expect("both kings present");
    assert_eq!(legal.len(), 20);
}

#[test]
fn back_rank_mate_has_no_legal_moves() {
    init_logging();
    let position = load_position("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fixture should load");
    let generator = LegalMoveGenerator::default();
    assert!(generator
        .legal_moves(&position.board, position.side)
        .expect("both kings present")
        .is_empty());
    assert_eq!(
        generator.position_status(&position.board, position.side),
        Ok(PositionStatus::Checkmate)
    );
}

#[test]
fn en_passant_follows_a_dark_double_push() {
    init_logging();
    let mut board = load_position("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1")
        .expect("fixture should load")
        .board;
    let generator = LegalMoveGenerator::default();

    let dark_moves = generator
        .legal_moves(&board, Color::Dark)
        .expect("both kings present");
    let push = find_move(&dark_moves, "d7d5").expect("d7d5 should be legal");
    assert!(push.is_double_pawn_push());
    board.apply_move(&push).expect("d7d5 should apply");
    assert_eq!(board.en_passant_square(), Some(square("d6")));

    let light_moves = generator
        .legal_moves(&board, Color::Light)
        .expect("both kings present");
    let capture = find_move(&light_moves, "e5d6").expect("e5xd6 en passant should be legal");
    assert!(capture.is_en_passant());

    let before = board;
    board.apply_move(&capture).expect("en passant should apply");
    assert_eq!(board.piece_on_square(square("d5")), None);
    assert_eq!(
        board.piece_on_square(square("d6")),
        Some((Color::Light, PieceKind::Pawn))
    );
    assert_eq!(board.pieces(Color::Dark, PieceKind::Pawn), 0);

    board.undo_move(&capture).expect("undo should restore");
    assert_eq!(board, before);
}

#[test]
fn en_passant_exposing_the_king_is_filtered() {
    init_logging();
    // Taking on d6 would open the fifth rank between the rook and the king.
    let position = load_position("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 1").expect("fixture should load");
    let pseudo = MoveGenerator::default().generate_moves(&position.board, Color::Light);
    assert!(find_move(&pseudo, "e5d6").is_some());

    let legal = LegalMoveGenerator::default()
        .legal_moves(&position.board, Color::Light)
        .expect("both kings present");
    assert!(find_move(&legal, "e5d6").is_none());
}

#[test]
fn kingside_castling_is_denied_on_attacked_squares() {
    init_logging();
    let generator = LegalMoveGenerator::default();
    let base = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
    let clear = load_position(base).expect("fixture should load");
    let legal = generator
        .legal_moves(&clear.board, Color::Light)
        .expect("both kings present");
    assert!(find_move(&legal, "e1g1").is_some());

    // A dark rook covering the start, transit and landing square in turn.
    for attacked in ["e", "f", "g"] {
        let mut board = clear.board;
        board
            .remove_piece(square("e8"))
            .expect("dark king stands on e8");
        board
            .place_piece(Color::Dark, PieceKind::King, square("a8"))
            .expect("a8 should be free");
        board
            .place_piece(Color::Dark, PieceKind::Rook, square(&format!("{attacked}6")))
            .expect("rank 6 square should be free");

        let legal = generator
            .legal_moves(&board, Color::Light)
            .expect("both kings present");
        assert!(
            find_move(&legal, "e1g1").is_none(),
            "castling allowed with {attacked}1 attacked"
        );
    }
}

#[test]
fn apply_then_undo_restores_every_legal_move() {
    init_logging();
    let generator = LegalMoveGenerator::default();
    for text in [
        STARTPOS,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ] {
        let position = load_position(text).expect("fixture should load");
        let mut board = position.board;
        for mv in generator
            .legal_moves(&board, position.side)
            .expect("both kings present")
        {
            board.apply_move(&mv).expect("legal move should apply");
            board.validate().expect("invariants should hold after apply");
            board.undo_move(&mv).expect("undo should mirror apply");
            assert_eq!(board, position.board, "{mv} did not round-trip in {text}");
        }
    }
}

#[test]
fn rook_capture_clears_the_matching_castling_right() {
    init_logging();
    let position =
        load_position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fixture should load");
    let mut board = position.board;
    let legal = LegalMoveGenerator::default()
        .legal_moves(&board, Color::Light)
        .expect("both kings present");
    let capture = find_move(&legal, "h1h8").expect("h1xh8 should be legal");
    assert_eq!(capture.captured(), Some(PieceKind::Rook));

    board.apply_move(&capture).expect("capture should apply");
    assert_eq!(
        board.castling_rights(),
        CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_QUEENSIDE
    );
}

#[test]
fn moves_from_the_wrong_side_are_rejected() {
    init_logging();
    let board = BoardState::new_game();
    let dark = MoveGenerator::default().generate_moves(&board, Color::Dark);
    let mut copy = board;
    let err = plum_movegen::move_generation::legality_filter::LegalityFilter::default()
        .filter_legal_moves(&board, &dark, Color::Light)
        .expect_err("dark moves cannot be filtered for light");
    assert!(matches!(err, ChessError::IllegalMoveApplication { .. }));

    let stale = Move::new(square("e2"), square("e5")).expect("squares are on the board");
    assert!(copy.apply_move(&stale).is_err());
    assert_eq!(copy, board);
}
