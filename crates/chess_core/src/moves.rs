use std::fmt;

use crate::piece::Piece;
use crate::position::Square;

/// A single board transition plus what is needed to undo it.
///
/// Moves are produced by generation, applied once, and undone exactly once,
/// in reverse order of application. The moving piece is identified by its
/// origin square; a captured occupant of `to` is recorded at generation time
/// so undo can re-insert it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    pub fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " (captures {:?})", captured.kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceKind};

    #[test]
    fn display_names_the_capture() {
        let from = Square::new(3, 3).unwrap();
        let to = Square::new(4, 4).unwrap();
        assert_eq!(Move::new(from, to).to_string(), "d4 -> e5");

        let victim = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(
            Move::capture(from, to, victim).to_string(),
            "d4 -> e5 (captures Queen)"
        );
    }
}
