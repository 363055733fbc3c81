use chess_core::{Board, Color, Move, Piece, PieceKind, Square};

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).unwrap()
}

#[test]
fn lone_rook_covers_fourteen_squares() {
    let mut board = Board::new();
    board
        .place(sq(0, 0), Piece::new(PieceKind::Rook, Color::White))
        .unwrap();
    board
        .place(sq(7, 7), Piece::new(PieceKind::King, Color::Black))
        .unwrap();

    let moves = board.generate_moves(Color::White);
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
    assert!(moves
        .iter()
        .all(|mv| mv.to.file == 0 || mv.to.rank == 0));
}

#[test]
fn kingside_castle_appears_next_to_ordinary_king_steps() {
    let mut board = Board::new();
    board
        .place(sq(4, 0), Piece::new(PieceKind::King, Color::White))
        .unwrap();
    board
        .place(sq(7, 0), Piece::new(PieceKind::Rook, Color::White))
        .unwrap();
    board
        .place(sq(0, 7), Piece::new(PieceKind::King, Color::Black))
        .unwrap();

    let moves = board.generate_moves(Color::White);
    let king_moves: Vec<&Move> = moves.iter().filter(|mv| mv.from == sq(4, 0)).collect();

    assert!(king_moves.iter().any(|mv| mv.to == sq(6, 0)));
    // The ordinary one-square steps are all still there.
    for step in [sq(3, 0), sq(5, 0), sq(3, 1), sq(4, 1), sq(5, 1)] {
        assert!(king_moves.iter().any(|mv| mv.to == step));
    }
}

#[test]
fn lone_pawn_generates_exactly_one_forward_move() {
    let mut board = Board::new();
    board
        .place(sq(3, 3), Piece::new(PieceKind::Pawn, Color::White))
        .unwrap();
    board
        .place(sq(7, 7), Piece::new(PieceKind::King, Color::Black))
        .unwrap();

    let moves = board.generate_moves(Color::White);
    assert_eq!(moves, vec![Move::new(sq(3, 3), sq(3, 4))]);
}

#[test]
fn no_generated_move_targets_an_own_piece() {
    let board = Board::standard();
    for color in [Color::White, Color::Black] {
        for mv in board.generate_moves(color) {
            assert_ne!(
                board.piece_at(mv.to).map(|piece| piece.color),
                Some(color),
                "{mv} lands on an own piece"
            );
        }
    }
}

#[test]
fn captures_record_the_actual_occupant() {
    let mut board = Board::new();
    board
        .place(sq(3, 3), Piece::new(PieceKind::Queen, Color::White))
        .unwrap();
    board
        .place(sq(3, 6), Piece::new(PieceKind::Rook, Color::Black))
        .unwrap();

    let moves = board.generate_moves(Color::White);
    for mv in moves {
        match board.piece_at(mv.to) {
            Some(&occupant) => assert_eq!(mv.captured, Some(occupant)),
            None => assert_eq!(mv.captured, None),
        }
    }
}

#[test]
fn every_generated_move_round_trips_through_apply_and_undo() {
    let mut board = Board::standard();
    let before = board.clone();

    for mv in before.generate_moves(Color::White) {
        board.apply_move(mv);
        assert_ne!(board, before);
        board.undo_move(mv);
        assert_eq!(board, before);
    }
}
