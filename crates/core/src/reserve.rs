//! Reserve module - fixed-capacity LIFO of set-aside pieces
//!
//! Slots fill from the bottom; `len` doubles as the index one past the top.
//! Push shares the queue's saturating overflow policy: a full stack ignores
//! the piece silently.

use arrayvec::ArrayVec;

use crate::error::PreconditionViolated;
use tetris_stack_types::{Piece, RESERVE_CAPACITY};

/// Bounded stack of reserved pieces, top = most recently reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; RESERVE_CAPACITY],
    len: usize,
}

impl ReserveStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            slots: [None; RESERVE_CAPACITY],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RESERVE_CAPACITY
    }

    /// Place a piece on top. Saturating: a full stack ignores the piece
    /// and the call is a no-op.
    pub fn push(&mut self, piece: Piece) {
        if self.is_full() {
            return;
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
    }

    /// Remove and return the top piece.
    ///
    /// Callers must check [`is_empty`](Self::is_empty) first; an empty
    /// stack reports a precondition violation.
    pub fn pop(&mut self) -> Result<Piece, PreconditionViolated> {
        if self.len == 0 {
            return Err(PreconditionViolated("pop on empty stack"));
        }
        let piece = self.slots[self.len - 1]
            .take()
            .ok_or(PreconditionViolated("stack slot unexpectedly vacant"))?;
        self.len -= 1;
        Ok(piece)
    }

    /// Peek at the top piece without removing it
    pub fn top(&self) -> Option<&Piece> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.len - 1].as_ref()
    }

    /// Replace the top piece in place, returning the old top.
    /// Length is unchanged.
    pub fn swap_top(&mut self, piece: Piece) -> Result<Piece, PreconditionViolated> {
        self.replace_from_top(0, piece)
    }

    /// Replace the piece `offset` slots below the top in place, returning
    /// the old occupant. Requires `offset < len`.
    pub fn replace_from_top(
        &mut self,
        offset: usize,
        piece: Piece,
    ) -> Result<Piece, PreconditionViolated> {
        if offset >= self.len {
            return Err(PreconditionViolated("stack slot offset out of range"));
        }
        let index = self.len - 1 - offset;
        let old = self.slots[index]
            .replace(piece)
            .ok_or(PreconditionViolated("stack slot unexpectedly vacant"))?;
        Ok(old)
    }

    /// Read-only snapshot in LIFO order, top first
    pub fn top_to_bottom(&self) -> ArrayVec<Piece, RESERVE_CAPACITY> {
        let mut view = ArrayVec::new();
        for offset in 0..self.len {
            if let Some(piece) = self.slots[self.len - 1 - offset] {
                view.push(piece);
            }
        }
        view
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_stack_types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::L, id)
    }

    #[test]
    fn test_new_stack_empty() {
        let stack = ReserveStack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.top(), None);
        assert!(stack.top_to_bottom().is_empty());
    }

    #[test]
    fn test_push_pop_lifo_order() {
        let mut stack = ReserveStack::new();
        stack.push(piece(0));
        stack.push(piece(1));
        stack.push(piece(2));

        assert_eq!(stack.pop().unwrap(), piece(2));
        assert_eq!(stack.pop().unwrap(), piece(1));
        assert_eq!(stack.pop().unwrap(), piece(0));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_saturates_when_full() {
        let mut stack = ReserveStack::new();
        for id in 0..RESERVE_CAPACITY as u32 {
            stack.push(piece(id));
        }
        assert!(stack.is_full());

        // Overflow is a silent no-op
        stack.push(piece(99));
        assert_eq!(stack.len(), RESERVE_CAPACITY);
        assert_eq!(stack.top(), Some(&piece(2)));
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack = ReserveStack::new();
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_top_to_bottom_view_order() {
        let mut stack = ReserveStack::new();
        stack.push(piece(0));
        stack.push(piece(1));
        stack.push(piece(2));

        let ids: Vec<u32> = stack.top_to_bottom().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn test_replace_from_top() {
        let mut stack = ReserveStack::new();
        stack.push(piece(0));
        stack.push(piece(1));
        stack.push(piece(2));

        let old = stack.replace_from_top(1, piece(42)).unwrap();
        assert_eq!(old, piece(1));

        let ids: Vec<u32> = stack.top_to_bottom().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 42, 0]);

        // Offset beyond the occupied slots is rejected
        assert!(stack.replace_from_top(3, piece(7)).is_err());
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_swap_top() {
        let mut stack = ReserveStack::new();
        stack.push(piece(0));

        let old = stack.swap_top(piece(9)).unwrap();
        assert_eq!(old, piece(0));
        assert_eq!(stack.top(), Some(&piece(9)));
        assert_eq!(stack.len(), 1);
    }
}
