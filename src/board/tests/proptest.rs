//! Property-based tests using proptest.

use crate::board::{
    AlwaysQueen, Board, BoardBuilder, Color, PieceKind, Promotion, Square, SquareSet,
};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(Square::from_index)
}

/// Flatten the legal moves of the side to move into (from, to) pairs.
fn all_moves(board: &Board) -> Vec<(Square, Square)> {
    board
        .legal_moves(board.current_turn())
        .into_iter()
        .flat_map(|(from, moves)| moves.iter().map(move |to| (from, to)))
        .collect()
}

/// Ray walk over an explicit direction list, stopping at the first occupied
/// square and keeping it only when it holds an enemy.
fn reference_rays(board: &Board, from: Square, color: Color, dirs: &[(isize, isize)]) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => set.insert(next),
                Some(piece) => {
                    if piece.color != color {
                        set.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    set
}

const ROOK_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: a legal move never leaves the mover's own king in check
    #[test]
    fn prop_random_play_never_self_checks(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = all_moves(&board);
            if moves.is_empty() {
                prop_assert!(board.status().is_over());
                break;
            }
            let (from, to) = moves[rng.gen_range(0..moves.len())];
            let mover = board.current_turn();
            let pick = Promotion::ALL[rng.gen_range(0..Promotion::ALL.len())];
            let mut chooser = move |_: Color, _: Square| pick;

            let outcome = board.try_play(from, to, &mut chooser);
            prop_assert!(outcome.is_ok());
            prop_assert!(!board.is_in_check(mover));
            prop_assert_eq!(board.current_turn(), mover.opponent());
            prop_assert_eq!(board.last_move(), Some((from, to)));
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = all_moves(&board);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.try_play(from, to, &mut AlwaysQueen).is_ok());
        }

        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen);
        prop_assert!(restored.is_ok(), "failed to parse {}", fen);
        let restored = restored.unwrap();
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.current_turn(), board.current_turn());
        prop_assert_eq!(restored.en_passant_target(), board.en_passant_target());
        prop_assert_eq!(restored.legal_move_count(board.current_turn()), board.legal_move_count(board.current_turn()));
    }

    /// Property: a rejected move leaves the board exactly as it was
    #[test]
    fn prop_rejected_moves_do_not_mutate(
        seed in seed_strategy(),
        num_moves in 0..=20usize,
        from in square_strategy(),
        to in square_strategy(),
    ) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = all_moves(&board);
            if moves.is_empty() {
                break;
            }
            let (f, t) = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.try_play(f, t, &mut AlwaysQueen).is_ok());
        }

        let legal = board
            .piece_at(from)
            .is_some_and(|p| p.color == board.current_turn())
            && board.get_valid_moves(from).contains(to);
        prop_assume!(!legal);

        let before = board.clone();
        prop_assert!(board.try_play(from, to, &mut AlwaysQueen).is_err());
        prop_assert!(!board.make_move(&from.to_string(), &to.to_string()));
        prop_assert_eq!(board, before);
    }

    /// Property: slider moves match a ray walk truncated at the first blocker
    #[test]
    fn prop_slider_rays(
        kind in prop_oneof![Just(PieceKind::Rook), Just(PieceKind::Bishop), Just(PieceKind::Queen)],
        from in square_strategy(),
        blockers in prop::collection::vec((square_strategy(), any::<bool>()), 0..10),
    ) {
        let mut builder = BoardBuilder::new();
        for (sq, white) in blockers {
            let color = if white { Color::White } else { Color::Black };
            builder = builder.piece(sq, color, PieceKind::Knight);
        }
        let board = builder.piece(from, Color::White, kind).build();

        let expected = match kind {
            PieceKind::Rook => reference_rays(&board, from, Color::White, &ROOK_DIRS),
            PieceKind::Bishop => reference_rays(&board, from, Color::White, &BISHOP_DIRS),
            _ => SquareSet(
                reference_rays(&board, from, Color::White, &ROOK_DIRS).0
                    | reference_rays(&board, from, Color::White, &BISHOP_DIRS).0,
            ),
        };
        prop_assert_eq!(board.get_valid_moves(from), expected);
    }

    /// Property: algebraic names round-trip for every square
    #[test]
    fn prop_square_name_roundtrip(sq in square_strategy()) {
        let name = sq.to_string();
        prop_assert_eq!(name.parse::<Square>(), Ok(sq));
    }
}
