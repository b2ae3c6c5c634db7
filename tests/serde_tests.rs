//! Serde round-trip tests; run with `cargo test --features serde`.
#![cfg(feature = "serde")]

use chess_core::{Board, Color, Difficulty, GameStatus, Move, SearchRequest, Square};

#[test]
fn move_round_trips_through_json() {
    let mv = Move {
        from: Square(6, 4),
        to: Square(4, 4),
        is_en_passant: false,
    };
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, back);
}

#[test]
fn status_round_trips_through_json() {
    for status in [
        GameStatus::Active,
        GameStatus::Check(Color::White),
        GameStatus::Checkmate(Color::Black),
        GameStatus::Stalemate,
    ] {
        let json = serde_json::to_string(&status).unwrap();
        let back: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}

#[test]
fn search_request_round_trips_through_json() {
    let request = SearchRequest {
        board: Board::new(),
        side: Color::Black,
        en_passant_target: Some(Square(2, 3)),
        difficulty: Difficulty::Hard,
    };
    let json = serde_json::to_string(&request).unwrap();
    let back: SearchRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(back.board, request.board);
    assert_eq!(back.side, request.side);
    assert_eq!(back.en_passant_target, request.en_passant_target);
    assert_eq!(back.difficulty, request.difficulty);
}
