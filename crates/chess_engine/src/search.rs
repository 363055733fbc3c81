//! Fixed-depth minimax with alpha-beta pruning over a mutable board.

use chess_core::{Board, Color, Move, PieceKind};
use log::debug;

/// Window bound treated as infinity by the search. Evaluation scores stay
/// well inside it.
pub const INF: i32 = 10_000;

/// Fixed-depth alpha-beta searcher picking moves for White, the maximizing
/// side.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    depth: u8,
    pawn_queen_pruning: bool,
}

impl Engine {
    /// An engine searching `depth` plies, with the pawn-takes-queen skip
    /// enabled.
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            pawn_queen_pruning: true,
        }
    }

    /// Disables the heuristic that skips pawn captures of a queen below the
    /// root.
    pub fn without_pawn_queen_pruning(mut self) -> Self {
        self.pawn_queen_pruning = false;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The White move with the greatest minimax score, or `None` when White
    /// has no pseudo-legal moves. Ties keep the first move generated; the
    /// heuristic skip does not apply at the root.
    ///
    /// The board is searched through in-place apply/undo and is left exactly
    /// as it was passed in.
    pub fn best_move(&self, board: &mut Board) -> Option<Move> {
        let mut best_move = None;
        let mut best_score = -INF;

        for mv in board.generate_moves(Color::White) {
            let score = board.with_move(mv, |board| {
                self.minimax(board, self.depth.saturating_sub(1), -INF, INF, false)
            });
            debug!("root move {mv} scores {score}");
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if let Some(mv) = best_move {
            debug!("chose {mv} with score {best_score}");
        }
        best_move
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        if depth == 0 {
            return board.evaluate(Color::White);
        }

        let to_move = if maximizing { Color::White } else { Color::Black };
        let moves = board.generate_moves(to_move);
        if moves.is_empty() {
            // Running out of moves and running out of depth look the same
            // here: fall back to the static evaluation.
            return board.evaluate(Color::White);
        }

        if maximizing {
            let mut best = -INF;
            for mv in moves {
                if self.skip_move(board, mv) {
                    continue;
                }
                let score = board.with_move(mv, |board| {
                    self.minimax(board, depth - 1, alpha, beta, false)
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in moves {
                if self.skip_move(board, mv) {
                    continue;
                }
                let score = board.with_move(mv, |board| {
                    self.minimax(board, depth - 1, alpha, beta, true)
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    // Heuristic filter applied below the root: any pawn move that captures a
    // queen is skipped, for either side, which can hide winning captures
    // from the search.
    fn skip_move(&self, board: &Board, mv: Move) -> bool {
        if !self.pawn_queen_pruning {
            return false;
        }
        mv.captured.map(|piece| piece.kind) == Some(PieceKind::Queen)
            && board.piece_at(mv.from).map(|piece| piece.kind) == Some(PieceKind::Pawn)
    }
}
