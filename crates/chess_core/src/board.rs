use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::moves::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::{Square, BOARD_SIZE};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
    (1, -2),
    (2, -1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    Occupied(Square),
}

/// The live piece collection plus every rule that reads or mutates it:
/// pseudo-legal move generation, in-place apply/undo, and evaluation.
///
/// Pieces are keyed by square, so one occupant per square is structural.
/// A piece's coordinates are its key; capture removes the occupant from the
/// map and undo re-inserts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pieces: HashMap<Square, Piece>,
}

impl Board {
    /// An empty board. Pieces are placed by the caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chess starting position.
    pub fn standard() -> Self {
        let mut board = Self::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.pieces.insert(
                Square { file, rank: 0 },
                Piece::new(kind, Color::White),
            );
            board.pieces.insert(
                Square { file, rank: 1 },
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.pieces.insert(
                Square { file, rank: 7 },
                Piece::new(kind, Color::Black),
            );
            board.pieces.insert(
                Square { file, rank: 6 },
                Piece::new(PieceKind::Pawn, Color::Black),
            );
        }
        board
    }

    /// Places a piece during position setup.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.pieces.contains_key(&square) {
            return Err(BoardError::Occupied(square));
        }
        self.pieces.insert(square, piece);
        Ok(())
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    /// Every live piece with its square, for renderers and setup code.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&square, &piece)| (square, piece))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Every pseudo-legal move for `color`. Squares are scanned rank-major so
    /// the order never depends on map iteration order.
    pub fn generate_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                let from = Square { file, rank };
                if let Some(&piece) = self.pieces.get(&from) {
                    if piece.color == color {
                        self.moves_for(from, piece, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn moves_for(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece.color, moves),
            PieceKind::Knight => self.step_moves(from, piece.color, &KNIGHT_JUMPS, moves),
            PieceKind::Bishop => self.sliding_moves(from, piece.color, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.sliding_moves(from, piece.color, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => self.sliding_moves(from, piece.color, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => {
                self.step_moves(from, piece.color, &KING_STEPS, moves);
                self.castling_moves(from, piece.color, moves);
            }
        }
    }

    /// One step forward onto an empty square, or a diagonal capture one step
    /// forward-left/right. No double-step, no en-passant, no promotion.
    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.forward();
        let ahead = match from.offset(0, dir) {
            Some(square) => square,
            None => return,
        };
        if self.pieces.get(&ahead).is_none() {
            moves.push(Move::new(from, ahead));
        }
        for dx in [-1, 1] {
            if let Some(target) = from.offset(dx, dir) {
                if let Some(&occupant) = self.pieces.get(&target) {
                    if occupant.color != color {
                        moves.push(Move::capture(from, target, occupant));
                    }
                }
            }
        }
    }

    fn step_moves(&self, from: Square, color: Color, deltas: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dx, dy) in deltas {
            if let Some(target) = from.offset(dx, dy) {
                match self.pieces.get(&target) {
                    None => moves.push(Move::new(from, target)),
                    Some(&occupant) if occupant.color != color => {
                        moves.push(Move::capture(from, target, occupant));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// Slides until the board edge, an own piece (stop, excluded) or an
    /// opposing piece (stop, included as a capture).
    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dx, dy) in directions {
            let mut next = from.offset(dx, dy);
            while let Some(target) = next {
                match self.pieces.get(&target) {
                    None => {
                        moves.push(Move::new(from, target));
                        next = target.offset(dx, dy);
                    }
                    Some(&occupant) => {
                        if occupant.color != color {
                            moves.push(Move::capture(from, target, occupant));
                        }
                        break;
                    }
                }
            }
        }
    }

    // Castling is modeled for White's king on its home square only: the king
    // jumps two files, the rook stays put, and no attack safety is checked.
    // Path squares must be empty regardless of occupant color.
    fn castling_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let home = Square { file: 4, rank: 0 };
        if color != Color::White || from != home {
            return;
        }
        let kingside = [Square { file: 5, rank: 0 }, Square { file: 6, rank: 0 }];
        if kingside.iter().all(|square| self.pieces.get(square).is_none()) {
            moves.push(Move::new(from, Square { file: 6, rank: 0 }));
        }
        let queenside = [
            Square { file: 1, rank: 0 },
            Square { file: 2, rank: 0 },
            Square { file: 3, rank: 0 },
        ];
        if queenside.iter().all(|square| self.pieces.get(square).is_none()) {
            moves.push(Move::new(from, Square { file: 2, rank: 0 }));
        }
    }

    /// Applies `mv` in place. The captured occupant of `mv.to`, if any, was
    /// recorded in the move at generation time; re-keying the mover drops it
    /// from the collection.
    ///
    /// The matching [`Board::undo_move`] must run before any other mutation,
    /// and nested moves must be undone in reverse order of application.
    pub fn apply_move(&mut self, mv: Move) {
        let piece = self
            .pieces
            .remove(&mv.from)
            .expect("move origin square is empty");
        self.pieces.insert(mv.to, piece);
    }

    /// Exactly reverses the immediately preceding unmatched [`Board::apply_move`]
    /// of the same move. Out-of-order undo corrupts the board.
    pub fn undo_move(&mut self, mv: Move) {
        let piece = self
            .pieces
            .remove(&mv.to)
            .expect("move target square is empty");
        self.pieces.insert(mv.from, piece);
        if let Some(captured) = mv.captured {
            self.pieces.insert(mv.to, captured);
        }
    }

    /// Applies `mv`, runs `f`, and undoes `mv`, keeping the apply/undo pairing
    /// intact on every exit path of `f`.
    pub fn with_move<T>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> T) -> T {
        self.apply_move(mv);
        let result = f(self);
        self.undo_move(mv);
        result
    }

    /// Material plus mobility from `color`'s perspective: piece values added
    /// for own pieces and subtracted for opposing ones, plus own move count
    /// minus opposing move count. The mobility term runs a full generation
    /// pass for both sides on every call.
    pub fn evaluate(&self, color: Color) -> i32 {
        let mut score = 0;
        for piece in self.pieces.values() {
            let value = piece.kind.value();
            score += if piece.color == color { value } else { -value };
        }
        score += self.generate_moves(color).len() as i32
            - self.generate_moves(color.opponent()).len() as i32;
        score
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..BOARD_SIZE {
                match self.pieces.get(&Square { file, rank }) {
                    Some(piece) => {
                        let symbol = if piece.color == Color::White {
                            piece.kind.symbol()
                        } else {
                            piece.kind.symbol().to_ascii_lowercase()
                        };
                        write!(f, " {symbol}")?;
                    }
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
