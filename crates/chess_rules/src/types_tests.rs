use super::*;

#[test]
fn test_position_from_notation() {
    assert_eq!(position("e2"), Ok(Square::new(6, 4)));
    assert_eq!(position("e4"), Ok(Square::new(4, 4)));
    assert_eq!(position("a1"), Ok(Square::new(7, 0)));
    assert_eq!(position("h8"), Ok(Square::new(0, 7)));
}

#[test]
fn test_notation_round_trip() {
    for sq in Square::all() {
        assert_eq!(position(&notation(sq)), Ok(sq));
    }
    for f in 'a'..='h' {
        for r in '1'..='8' {
            let text = format!("{f}{r}");
            assert_eq!(notation(position(&text).unwrap()), text);
        }
    }
}

#[test]
fn test_malformed_notation() {
    assert_eq!(
        position("e"),
        Err(ParseSquareError::WrongLength("e".to_string()))
    );
    assert_eq!(
        position("e22"),
        Err(ParseSquareError::WrongLength("e22".to_string()))
    );
    assert_eq!(position("i2"), Err(ParseSquareError::BadFile('i')));
    assert_eq!(position("e9"), Err(ParseSquareError::BadRank('9')));
    assert_eq!(position("e0"), Err(ParseSquareError::BadRank('0')));
    assert!("é2".parse::<Square>().is_err());
}

#[test]
fn test_offset_stays_on_board() {
    let a1 = Square::new(7, 0);
    assert_eq!(a1.offset(-1, 1), Some(Square::new(6, 1)));
    assert_eq!(a1.offset(1, 0), None);
    assert_eq!(a1.offset(0, -1), None);
    assert!(!Square::new(8, 0).is_in_bounds());
}

#[test]
fn test_color_directions() {
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
    assert_eq!(Color::White.promotion_row(), 0);
    assert_eq!(Color::Black.promotion_row(), 7);
    assert_eq!(Color::White.other(), Color::Black);
}

#[test]
fn test_promotion_kind_conversion() {
    assert_eq!(
        PromotionKind::try_from(PieceKind::Knight),
        Ok(PromotionKind::Knight)
    );
    assert_eq!(
        PromotionKind::try_from(PieceKind::King),
        Err(PromotionError::InvalidKind(PieceKind::King))
    );
    assert_eq!(
        PromotionKind::try_from(PieceKind::Pawn),
        Err(PromotionError::InvalidKind(PieceKind::Pawn))
    );
    assert_eq!(PieceKind::from(PromotionKind::Rook), PieceKind::Rook);
}

#[test]
fn test_move_display() {
    let mv = Move::new(position("e2").unwrap(), position("e4").unwrap());
    assert_eq!(mv.to_string(), "e2e4");
}
