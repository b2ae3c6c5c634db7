//! Per-piece move rule and self-check filtering tests.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

#[test]
fn initial_position_has_twenty_moves_per_side() {
    let board = Board::new();
    assert_eq!(board.all_legal_moves(Color::White, None).len(), 20);
    assert_eq!(board.all_legal_moves(Color::Black, None).len(), 20);
}

#[test]
fn empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.legal_moves(Square(4, 4), None).is_empty());
    assert!(board.pseudo_legal_moves(Square(4, 4), None).is_empty());
}

#[test]
fn pawn_single_and_double_advance_from_home_rank() {
    let board = Board::new();
    let moves = board.legal_moves(Square(6, 4), None);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::new(Square(6, 4), Square(5, 4))));
    assert!(moves.contains(&Move::new(Square(6, 4), Square(4, 4))));
}

#[test]
fn pawn_off_home_rank_advances_one_square_only() {
    let board = BoardBuilder::new()
        .piece(Square(5, 4), Color::White, Piece::Pawn)
        .build();
    let moves = board.legal_moves(Square(5, 4), None);
    assert_eq!(moves, vec![Move::new(Square(5, 4), Square(4, 4))]);
}

#[test]
fn blocked_pawn_cannot_advance() {
    // Blocker directly ahead kills both the single and the double step.
    let board = BoardBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::Pawn)
        .piece(Square(5, 4), Color::Black, Piece::Rook)
        .build();
    assert!(board.legal_moves(Square(6, 4), None).is_empty());
}

#[test]
fn pawn_double_advance_blocked_on_far_square() {
    let board = BoardBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 4), Color::Black, Piece::Rook)
        .build();
    let moves = board.legal_moves(Square(6, 4), None);
    assert_eq!(moves, vec![Move::new(Square(6, 4), Square(5, 4))]);
}

#[test]
fn pawn_captures_diagonally_not_forward() {
    let board = BoardBuilder::new()
        .piece(Square(5, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 4), Color::Black, Piece::Pawn)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .piece(Square(4, 5), Color::White, Piece::Knight)
        .build();
    let moves = board.legal_moves(Square(5, 4), None);
    // Forward blocked, left diagonal is an enemy, right diagonal a friend.
    assert_eq!(moves, vec![Move::new(Square(5, 4), Square(4, 3))]);
}

#[test]
fn pawn_en_passant_move_is_generated_and_flagged() {
    // White pawn just advanced two squares to (4, 4); the skipped square
    // (5, 4) is the target for the black pawn beside it.
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .build();
    let target = Some(Square(5, 4));

    let moves = board.legal_moves(Square(4, 3), target);
    let en_passant = Move {
        from: Square(4, 3),
        to: Square(5, 4),
        is_en_passant: true,
    };
    assert!(moves.contains(&en_passant));

    // Without the target the diagonal onto the empty square is not a move.
    let moves = board.legal_moves(Square(4, 3), None);
    assert!(!moves.iter().any(|mv| mv.to == Square(5, 4)));
}

#[test]
fn knight_in_corner_has_two_moves() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Knight)
        .build();
    let mut moves: Vec<Square> = board
        .legal_moves(Square(0, 0), None)
        .iter()
        .map(|mv| mv.to)
        .collect();
    moves.sort_by_key(|sq| (sq.0, sq.1));
    assert_eq!(moves, vec![Square(1, 2), Square(2, 1)]);
}

#[test]
fn knight_jumps_over_pieces() {
    let board = Board::new();
    let moves = board.legal_moves(Square(7, 1), None);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::new(Square(7, 1), Square(5, 0))));
    assert!(moves.contains(&Move::new(Square(7, 1), Square(5, 2))));
}

#[test]
fn rook_ray_stops_before_friend_and_on_enemy() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Rook)
        .piece(Square(4, 6), Color::White, Piece::Pawn)
        .piece(Square(4, 1), Color::Black, Piece::Pawn)
        .build();
    let targets: Vec<Square> = board
        .legal_moves(Square(4, 4), None)
        .iter()
        .map(|mv| mv.to)
        .collect();

    assert!(targets.contains(&Square(4, 5)));
    assert!(!targets.contains(&Square(4, 6)), "friendly square included");
    assert!(!targets.contains(&Square(4, 7)), "ray continued past friend");
    assert!(targets.contains(&Square(4, 1)), "enemy capture missing");
    assert!(!targets.contains(&Square(4, 0)), "ray continued past enemy");
}

#[test]
fn queen_covers_rook_and_bishop_rays() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Queen)
        .build();
    let moves = board.legal_moves(Square(4, 4), None);
    // Empty board from a central square: 14 rook targets + 13 bishop targets.
    assert_eq!(moves.len(), 27);
}

#[test]
fn pinned_bishop_may_only_move_along_the_pin_line() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(6, 3), Color::White, Piece::Bishop)
        .piece(Square(3, 0), Color::Black, Piece::Bishop)
        .build();

    let mut targets: Vec<Square> = board
        .legal_moves(Square(6, 3), None)
        .iter()
        .map(|mv| mv.to)
        .collect();
    targets.sort_by_key(|sq| (sq.0, sq.1));

    // Staying on the a5-e1 diagonal, including capturing the pinning piece.
    assert_eq!(targets, vec![Square(3, 0), Square(4, 1), Square(5, 2)]);
}

#[test]
fn king_cannot_step_into_attack() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 3), Color::Black, Piece::Rook)
        .build();

    let targets: Vec<Square> = board
        .legal_moves(Square(7, 4), None)
        .iter()
        .map(|mv| mv.to)
        .collect();

    assert!(!targets.contains(&Square(7, 3)));
    assert!(!targets.contains(&Square(6, 3)));
    assert_eq!(targets.len(), 3);
}

#[test]
fn moving_a_blocker_off_a_pin_is_filtered_but_pseudo_legal() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(6, 4), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::Rook)
        .build();

    let pseudo = board.pseudo_legal_moves(Square(6, 4), None);
    assert!(pseudo.iter().any(|mv| mv.to.1 != 4));

    // Legal moves stay on the e-file between the rook and the attacker.
    let legal = board.legal_moves(Square(6, 4), None);
    assert!(!legal.is_empty());
    assert!(legal.iter().all(|mv| mv.to.1 == 4));
}
