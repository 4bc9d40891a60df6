use super::*;

fn sq(text: &str) -> Square {
    position(text).unwrap()
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

fn castling_board() -> Board {
    let mut board = Board::empty();
    board.place(Piece::new(Color::White, PieceKind::King), sq("e1"));
    board.place(Piece::new(Color::White, PieceKind::Rook), sq("a1"));
    board.place(Piece::new(Color::White, PieceKind::Rook), sq("h1"));
    board.place(Piece::new(Color::Black, PieceKind::King), sq("e8"));
    board
}

#[test]
fn test_startpos_not_in_check() {
    let board = Board::startpos();
    assert!(!is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
}

#[test]
fn test_startpos_legal_moves() {
    let board = Board::startpos();
    // 16 pawn advances + 4 knight moves
    assert_eq!(legal_moves(&board, Color::White).len(), 20);
    assert_eq!(legal_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_rook_gives_check() {
    let mut board = Board::empty();
    board.place(Piece::new(Color::White, PieceKind::King), sq("e1"));
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("e8"));
    assert!(is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));

    board.place(Piece::new(Color::White, PieceKind::Pawn), sq("e2"));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_pawn_push_does_not_attack() {
    let mut board = Board::empty();
    board.place(Piece::moved(Color::White, PieceKind::King), sq("e4"));
    board.place(Piece::moved(Color::Black, PieceKind::Pawn), sq("e5"));
    assert!(!is_in_check(&board, Color::White));

    board.place(Piece::moved(Color::Black, PieceKind::Pawn), sq("d5"));
    assert!(is_in_check(&board, Color::White));
}

#[test]
fn test_missing_king_is_not_in_check() {
    let mut board = Board::empty();
    board.place(Piece::new(Color::Black, PieceKind::Queen), sq("d8"));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = Board::empty();
    board.place(Piece::new(Color::White, PieceKind::King), sq("e1"));
    board.place(Piece::new(Color::White, PieceKind::Pawn), sq("e2"));
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("e8"));
    board.place(Piece::new(Color::Black, PieceKind::Pawn), sq("f3"));

    assert_eq!(
        validate_move(&board, Color::White, sq("e2"), sq("f3")),
        Err(MoveError::ExposesKing {
            from: sq("e2"),
            to: sq("f3")
        })
    );
    let moves = legal_moves(&board, Color::White);
    assert!(moves.contains(&mv("e2", "e3")));
    assert!(moves.contains(&mv("e2", "e4")));
    assert!(!moves.contains(&mv("e2", "f3")));
}

#[test]
fn test_validate_rejection_reasons() {
    let board = Board::startpos();
    assert_eq!(
        validate_move(&board, Color::White, sq("e4"), sq("e5")),
        Err(MoveError::NoPiece(sq("e4")))
    );
    assert_eq!(
        validate_move(&board, Color::White, sq("e7"), sq("e5")),
        Err(MoveError::NotYourPiece(sq("e7")))
    );
    assert_eq!(
        validate_move(&board, Color::White, sq("e2"), sq("e5")),
        Err(MoveError::IllegalShape {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    let ok = validate_move(&board, Color::White, sq("g1"), sq("f3")).unwrap();
    assert_eq!(ok.kind, MoveKind::Normal);
    assert_eq!(ok.piece.kind, PieceKind::Knight);
}

#[test]
fn test_castling_when_path_is_safe() {
    let board = castling_board();
    let moves = legal_moves(&board, Color::White);
    assert!(moves.contains(&mv("e1", "g1")));
    assert!(moves.contains(&mv("e1", "c1")));

    let v = validate_move(&board, Color::White, sq("e1"), sq("g1")).unwrap();
    assert_eq!(
        v.kind,
        MoveKind::Castle {
            rook_from: sq("h1"),
            rook_to: sq("f1")
        }
    );
    let v = validate_move(&board, Color::White, sq("e1"), sq("c1")).unwrap();
    assert_eq!(
        v.kind,
        MoveKind::Castle {
            rook_from: sq("a1"),
            rook_to: sq("d1")
        }
    );
}

#[test]
fn test_castling_through_attacked_square() {
    let mut board = castling_board();
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("f8"));

    assert!(!castling_path_is_safe(&board, sq("e1"), sq("g1")));
    assert!(castling_path_is_safe(&board, sq("e1"), sq("c1")));
    let moves = legal_moves(&board, Color::White);
    assert!(!moves.contains(&mv("e1", "g1")));
    assert!(moves.contains(&mv("e1", "c1")));
    assert_eq!(
        validate_move(&board, Color::White, sq("e1"), sq("g1")),
        Err(MoveError::ExposesKing {
            from: sq("e1"),
            to: sq("g1")
        })
    );
}

#[test]
fn test_castling_out_of_check() {
    let mut board = castling_board();
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("e5"));
    let moves = legal_moves(&board, Color::White);
    assert!(!moves.contains(&mv("e1", "g1")));
    assert!(!moves.contains(&mv("e1", "c1")));
}

#[test]
fn test_queenside_rook_square_may_be_attacked() {
    // Only the king's squares matter; b1 just has to be empty
    let mut board = castling_board();
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("b8"));
    assert!(legal_moves(&board, Color::White).contains(&mv("e1", "c1")));
}

#[test]
fn test_en_passant_classified() {
    let mut board = Board::empty();
    board.place(Piece::new(Color::White, PieceKind::King), sq("e1"));
    board.place(Piece::moved(Color::White, PieceKind::Pawn), sq("e5"));
    board.place(Piece::moved(Color::Black, PieceKind::Pawn), sq("d5"));
    board.set_en_passant(Some(sq("d6")));

    let v = validate_move(&board, Color::White, sq("e5"), sq("d6")).unwrap();
    assert_eq!(v.kind, MoveKind::EnPassant { victim: sq("d5") });

    let after = simulate(&board, sq("e5"), sq("d6"), v.kind);
    assert!(after.is_empty(sq("d5")));
    assert!(after.is_empty(sq("e5")));
    assert_eq!(after.get(sq("d6")).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_en_passant_that_exposes_king() {
    // Both pawns leave the fifth rank, opening it for the rook
    let mut board = Board::empty();
    board.place(Piece::moved(Color::White, PieceKind::King), sq("a5"));
    board.place(Piece::moved(Color::White, PieceKind::Pawn), sq("b5"));
    board.place(Piece::moved(Color::Black, PieceKind::Pawn), sq("c5"));
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("h5"));
    board.set_en_passant(Some(sq("c6")));

    assert!(!is_in_check(&board, Color::White));
    assert!(!legal_moves(&board, Color::White).contains(&mv("b5", "c6")));
    assert!(legal_moves(&board, Color::White).contains(&mv("b5", "b6")));
}

#[test]
fn test_back_rank_checkmate() {
    let mut board = Board::empty();
    board.place(Piece::moved(Color::White, PieceKind::King), sq("h1"));
    board.place(Piece::new(Color::Black, PieceKind::Rook), sq("a1"));
    board.place(Piece::moved(Color::Black, PieceKind::Rook), sq("a2"));

    assert!(is_in_check(&board, Color::White));
    assert!(legal_moves(&board, Color::White).is_empty());
    assert!(is_checkmate(&board, Color::White));
    assert!(!is_stalemate(&board, Color::White));
}

#[test]
fn test_lone_king_stalemate() {
    let mut board = Board::empty();
    board.place(Piece::moved(Color::White, PieceKind::King), sq("h1"));
    board.place(Piece::moved(Color::Black, PieceKind::Queen), sq("f2"));
    board.place(Piece::moved(Color::Black, PieceKind::King), sq("a8"));

    assert!(!is_in_check(&board, Color::White));
    assert!(legal_moves(&board, Color::White).is_empty());
    assert!(is_stalemate(&board, Color::White));
    assert!(!is_checkmate(&board, Color::White));
}

#[test]
fn test_king_may_capture_undefended_attacker() {
    let mut board = Board::empty();
    board.place(Piece::moved(Color::White, PieceKind::King), sq("h1"));
    board.place(Piece::moved(Color::Black, PieceKind::Queen), sq("g2"));
    assert!(is_in_check(&board, Color::White));
    assert_eq!(legal_moves(&board, Color::White), vec![mv("h1", "g2")]);

    // Defended queen: mate
    board.place(Piece::moved(Color::Black, PieceKind::King), sq("f3"));
    assert!(is_checkmate(&board, Color::White));
}

#[test]
fn test_no_legal_move_self_checks() {
    let mut board = Board::startpos();
    for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
        board.move_piece(sq(from), sq(to));
    }
    // Black is in check from the queen on h5
    assert!(is_in_check(&board, Color::Black));
    for side in [Color::White, Color::Black] {
        for m in legal_moves(&board, side) {
            let pc = board.get(m.from).unwrap();
            let kind = classify(&board, m.from, m.to, pc);
            let after = simulate(&board, m.from, m.to, kind);
            assert!(!is_in_check(&after, side), "{m} leaves {side} in check");
        }
    }
    // g7-g6 is the only block
    assert_eq!(legal_moves(&board, Color::Black), vec![mv("g7", "g6")]);
}
