//! Queue module - fixed-capacity circular FIFO of upcoming pieces
//!
//! Head and tail indices wrap modulo the capacity; the length is tracked
//! explicitly so a full buffer is never confused with an empty one.
//! Insertion is saturating: enqueue on a full queue is a silent no-op, the
//! defined overflow policy rather than an error.

use arrayvec::ArrayVec;

use crate::error::PreconditionViolated;
use tetris_stack_types::{Piece, QUEUE_CAPACITY};

/// Circular buffer of upcoming pieces, front = next to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    head: usize,
    tail: usize,
    len: usize,
}

impl PieceQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the tail. Saturating: a full queue ignores the
    /// piece and the call is a no-op.
    pub fn enqueue(&mut self, piece: Piece) {
        if self.is_full() {
            return;
        }
        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % QUEUE_CAPACITY;
        self.len += 1;
    }

    /// Remove and return the front piece.
    ///
    /// Callers must check [`is_empty`](Self::is_empty) first; an empty
    /// queue reports a precondition violation.
    pub fn dequeue(&mut self) -> Result<Piece, PreconditionViolated> {
        let piece = self.slots[self.head]
            .take()
            .ok_or(PreconditionViolated("dequeue on empty queue"))?;
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Peek at the front piece without removing it
    pub fn front(&self) -> Option<&Piece> {
        self.slots[self.head].as_ref()
    }

    /// Replace the front piece in place, returning the old front.
    /// Length is unchanged.
    pub fn swap_front(&mut self, piece: Piece) -> Result<Piece, PreconditionViolated> {
        self.replace_from_front(0, piece)
    }

    /// Replace the piece `offset` slots behind the front in place,
    /// returning the old occupant. Requires `offset < len`.
    pub fn replace_from_front(
        &mut self,
        offset: usize,
        piece: Piece,
    ) -> Result<Piece, PreconditionViolated> {
        if offset >= self.len {
            return Err(PreconditionViolated("queue slot offset out of range"));
        }
        let index = (self.head + offset) % QUEUE_CAPACITY;
        let old = self.slots[index]
            .replace(piece)
            .ok_or(PreconditionViolated("queue slot unexpectedly vacant"))?;
        Ok(old)
    }

    /// Read-only snapshot in FIFO order, front first
    pub fn front_to_back(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        let mut view = ArrayVec::new();
        for offset in 0..self.len {
            let index = (self.head + offset) % QUEUE_CAPACITY;
            if let Some(piece) = self.slots[index] {
                view.push(piece);
            }
        }
        view
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
