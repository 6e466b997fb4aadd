//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

use std::fmt;

/// Fixed capacity of the upcoming-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Fixed capacity of the reserve stack.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by the triple swap.
pub const SWAP_BLOCK_LEN: usize = 3;

/// Unique piece identifier, assigned in generation order starting at 0.
pub type PieceId = u32;

/// Piece type labels available to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// The full alphabet, in the order the generator indexes it.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from a character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to the display character.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable piece token: a type label plus a unique id.
///
/// Pieces are created only by the piece source and are moved by value
/// between containers, never aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: PieceId,
}

impl Piece {
    pub fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_char_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
        assert_eq!(PieceKind::from_char('Z'), None);
    }

    #[test]
    fn test_piece_display() {
        let piece = Piece::new(PieceKind::T, 42);
        assert_eq!(piece.to_string(), "[T 42]");
    }
}
