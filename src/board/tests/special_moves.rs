//! Castling, en passant and promotion tests.

use super::{play, sq, squares};
use crate::board::{
    AlwaysQueen, Board, BoardBuilder, Color, PieceKind, Promotion, PromotionChooser, Square,
    SpecialMove,
};

const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("valid FEN")
}

/// Records how often it was asked and always answers `pick`.
struct Counting {
    calls: usize,
    pick: Promotion,
}

impl PromotionChooser for Counting {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        self.calls += 1;
        self.pick
    }
}

// ============================================================================
// En passant
// ============================================================================

#[test]
fn test_en_passant_only_on_next_turn() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("g1"), Color::White, PieceKind::Knight)
        .piece(sq("e2"), Color::White, PieceKind::Pawn)
        .piece(sq("d4"), Color::Black, PieceKind::Pawn)
        .build();

    play(&mut board, &["e2e4"]);
    assert_eq!(board.en_passant_target(), Some(sq("e4")));
    assert_eq!(board.get_valid_moves(sq("d4")), squares(&["d3", "e3"]));

    // Black declines; the chance is gone for good
    play(&mut board, &["e8d8", "g1f3"]);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.get_valid_moves(sq("d4")), squares(&["d3"]));
    assert!(!board.make_move("d4", "e3"));
}

#[test]
fn test_en_passant_removes_passed_pawn() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert!(board.get_valid_moves(sq("e5")).contains(sq("d6")));

    let outcome = board
        .try_make_move("e5", "d6", &mut AlwaysQueen)
        .expect("en passant is legal");
    let record = outcome.record();
    assert_eq!(record.special, Some(SpecialMove::EnPassant));
    assert_eq!(record.captured.map(|p| (p.kind, p.color)), Some((PieceKind::Pawn, Color::Black)));
    assert!(board.is_empty(sq("d5")));
    assert_eq!(
        board.piece_at(sq("d6")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let mut board = BoardBuilder::new()
        .piece(sq("a5"), Color::White, PieceKind::King)
        .piece(sq("e5"), Color::White, PieceKind::Pawn)
        .piece(sq("d7"), Color::Black, PieceKind::Pawn)
        .piece(sq("h5"), Color::Black, PieceKind::Rook)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .side_to_move(Color::Black)
        .build();

    play(&mut board, &["d7d5"]);
    // Taking d5 would clear the fifth rank between rook and king
    assert!(board.generate_geometric_moves(sq("e5")).contains(sq("d6")));
    assert_eq!(board.get_valid_moves(sq("e5")), squares(&["e6"]));
}

#[test]
fn test_double_push_sets_target_single_push_clears_it() {
    let mut board = Board::new();
    play(&mut board, &["e2e4"]);
    assert_eq!(board.en_passant_target(), Some(sq("e4")));
    assert_eq!(board.en_passant_capture_square(), Some(sq("e3")));

    play(&mut board, &["e7e6"]);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.en_passant_capture_square(), None);
}

// ============================================================================
// Castling
// ============================================================================

#[test]
fn test_castling_both_sides() {
    let mut board = board(CASTLING_FEN);
    assert_eq!(
        board.get_valid_moves(sq("e1")),
        squares(&["d1", "d2", "e2", "f2", "f1", "g1", "c1"])
    );

    let outcome = board
        .try_make_move("e1", "g1", &mut AlwaysQueen)
        .expect("castling is legal");
    assert_eq!(outcome.record().special, Some(SpecialMove::CastleKingside));
    assert!(board.piece_at(sq("g1")).is_some_and(|p| p.is(PieceKind::King, Color::White)));
    let rook = board.piece_at(sq("f1")).expect("rook hopped to f1");
    assert!(rook.is(PieceKind::Rook, Color::White) && rook.has_moved);
    assert!(board.is_empty(sq("h1")));
    assert!(board.is_empty(sq("e1")));

    let outcome = board
        .try_make_move("e8", "c8", &mut AlwaysQueen)
        .expect("castling is legal");
    assert_eq!(outcome.record().special, Some(SpecialMove::CastleQueenside));
    assert!(board.piece_at(sq("c8")).is_some_and(|p| p.is(PieceKind::King, Color::Black)));
    assert!(board.piece_at(sq("d8")).is_some_and(|p| p.is(PieceKind::Rook, Color::Black)));
    assert!(board.is_empty(sq("a8")));
}

#[test]
fn test_castling_needs_empty_path() {
    let bishop_f1 = board("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1");
    let moves = bishop_f1.get_valid_moves(sq("e1"));
    assert!(!moves.contains(sq("g1")));
    assert!(moves.contains(sq("c1")));

    // b1 is not crossed by the king but still has to be empty
    let knight_b1 = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    let moves = knight_b1.get_valid_moves(sq("e1"));
    assert!(!moves.contains(sq("c1")));
    assert!(moves.contains(sq("g1")));
}

#[test]
fn test_castling_through_or_into_attack() {
    let transit = board("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    let moves = transit.get_valid_moves(sq("e1"));
    assert!(!moves.contains(sq("g1")));
    assert!(moves.contains(sq("c1")));

    let destination = board("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    let moves = destination.get_valid_moves(sq("e1"));
    assert!(!moves.contains(sq("g1")));
    assert!(moves.contains(sq("c1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = board("r3k3/8/8/8/4r3/8/8/R3K2R w KQq - 0 1");
    assert!(board.is_in_check(Color::White));
    let moves = board.get_valid_moves(sq("e1"));
    assert!(!moves.contains(sq("g1")));
    assert!(!moves.contains(sq("c1")));
}

#[test]
fn test_king_move_forfeits_castling() {
    let mut board = board(CASTLING_FEN);
    play(&mut board, &["e1f1", "a8b8", "f1e1", "b8a8"]);

    // Both pieces are back home, but the rights are gone
    let white = board.get_valid_moves(sq("e1"));
    assert!(!white.contains(sq("g1")));
    assert!(!white.contains(sq("c1")));

    let black = board.get_valid_moves(sq("e8"));
    assert!(black.contains(sq("g8")));
    assert!(!black.contains(sq("c8")));
    assert!(!board.can_castle(Color::White, true));
    assert!(!board.can_castle(Color::Black, false));
}

#[test]
fn test_rook_move_forfeits_its_side() {
    let mut board = board(CASTLING_FEN);
    play(&mut board, &["h1h2", "a8a7", "h2h1"]);

    let white = board.get_valid_moves(sq("e1"));
    assert!(!white.contains(sq("g1")));
    assert!(white.contains(sq("c1")));
    assert_eq!(board.to_fen(), "4k2r/r7/8/8/8/8/8/R3K2R b Qk - 0 2");
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_promotion_defaults_to_queen() {
    let mut board = board("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    assert!(board.make_move("a7", "a8"));

    let piece = board.piece_at(sq("a8")).expect("promoted piece");
    assert!(piece.is(PieceKind::Queen, Color::White));
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_underpromotion_uses_chooser() {
    let mut board = board("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    let mut chooser = Counting {
        calls: 0,
        pick: Promotion::Knight,
    };

    let outcome = board
        .try_make_move("a7", "a8", &mut chooser)
        .expect("promotion is legal");
    assert_eq!(chooser.calls, 1);
    assert_eq!(
        outcome.record().special,
        Some(SpecialMove::Promotion(Promotion::Knight))
    );
    assert!(board
        .piece_at(sq("a8"))
        .is_some_and(|p| p.is(PieceKind::Knight, Color::White)));
    assert!(!board.is_in_check(Color::Black));

    // Not consulted for ordinary moves
    board
        .try_make_move("h8", "g8", &mut chooser)
        .expect("king move is legal");
    assert_eq!(chooser.calls, 1);
}

#[test]
fn test_chooser_not_called_for_rejected_promotion() {
    let mut board = board("r6k/P7/8/8/8/8/8/2K5 w - - 0 1");
    let mut chooser = Counting {
        calls: 0,
        pick: Promotion::Rook,
    };
    // a8 is occupied, so the push is illegal
    assert!(board.try_make_move("a7", "a8", &mut chooser).is_err());
    assert_eq!(chooser.calls, 0);
}

#[test]
fn test_capture_promotion() {
    let mut board = board("r6k/1P6/8/8/8/8/8/2K5 w - - 0 1");
    assert_eq!(board.get_valid_moves(sq("b7")), squares(&["a8", "b8"]));

    let mut rook = |_: Color, _: Square| Promotion::Rook;
    let outcome = board
        .try_make_move("b7", "a8", &mut rook)
        .expect("capture promotion is legal");
    assert_eq!(
        outcome.record().captured.map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert!(board
        .piece_at(sq("a8"))
        .is_some_and(|p| p.is(PieceKind::Rook, Color::White)));
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut board = board("k7/8/8/8/8/8/p7/7K b - - 0 1");
    assert!(board.make_move("a2", "a1"));
    assert!(board
        .piece_at(sq("a1"))
        .is_some_and(|p| p.is(PieceKind::Queen, Color::Black)));
    assert!(board.is_in_check(Color::White));
}
