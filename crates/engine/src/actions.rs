//! Exchange engine - the five actions over the queue and the reserve.
//!
//! Each action is atomic from the caller's point of view: every
//! precondition is checked before the first mutation, so a failure returns
//! with both containers exactly as they were. Play and reserve auto-refill
//! the queue with a freshly generated piece; release and the swaps do not.

use crate::errors::ExchangeError;
use tetris_stack_core::{PieceQueue, PieceSource, ReserveStack};
use tetris_stack_types::{Piece, SWAP_BLOCK_LEN};

/// Result of a successful play action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The piece removed from the queue front.
    pub played: Piece,
    /// The freshly generated piece appended at the tail.
    pub refill: Piece,
}

/// Result of a successful reserve action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveOutcome {
    /// The piece moved from the queue front onto the reserve top.
    pub reserved: Piece,
    /// The freshly generated piece appended at the tail.
    pub refill: Piece,
}

/// Result of a successful single swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Former reserve top, now at the queue front.
    pub to_queue: Piece,
    /// Former queue front, now on the reserve top.
    pub to_reserve: Piece,
}

/// Result of a successful triple swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSwapOutcome {
    /// Pieces written into the queue, front-to-back (former reserve top first).
    pub to_queue: [Piece; SWAP_BLOCK_LEN],
    /// Pieces written onto the reserve, top-to-bottom (former queue front first).
    pub to_reserve: [Piece; SWAP_BLOCK_LEN],
}

/// The operations layer composing the queue, the reserve, and the source.
///
/// Owns all three exclusively; nothing else mutates the containers.
#[derive(Debug, Clone)]
pub struct ExchangeEngine {
    queue: PieceQueue,
    reserve: ReserveStack,
    source: PieceSource,
}

impl ExchangeEngine {
    /// Initialize for a fresh run: queue prefilled to capacity from the
    /// source, reserve empty.
    pub fn new(mut source: PieceSource) -> Self {
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue(source.generate());
        }
        Self {
            queue,
            reserve: ReserveStack::new(),
            source,
        }
    }

    /// Assemble an engine from pre-populated containers, for drivers that
    /// need a drained or preloaded starting state.
    pub fn from_parts(queue: PieceQueue, reserve: ReserveStack, source: PieceSource) -> Self {
        Self {
            queue,
            reserve,
            source,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Play the front piece: dequeue it, then refill the queue with one
    /// freshly generated piece. Queue size is unchanged.
    pub fn play_front(&mut self) -> Result<PlayOutcome, ExchangeError> {
        if self.queue.is_empty() {
            return Err(ExchangeError::EmptyQueue);
        }

        let played = self.queue.dequeue()?;
        let refill = self.source.generate();
        self.queue.enqueue(refill);

        Ok(PlayOutcome { played, refill })
    }

    /// Move the front piece onto the reserve, then refill the queue.
    /// Queue size is unchanged; reserve grows by one.
    pub fn move_front_to_reserve(&mut self) -> Result<ReserveOutcome, ExchangeError> {
        if self.queue.is_empty() {
            return Err(ExchangeError::EmptyQueue);
        }
        if self.reserve.is_full() {
            return Err(ExchangeError::ReserveFull);
        }

        let reserved = self.queue.dequeue()?;
        self.reserve.push(reserved);
        let refill = self.source.generate();
        self.queue.enqueue(refill);

        Ok(ReserveOutcome { reserved, refill })
    }

    /// Take the top reserved piece. The reserve is not refilled.
    pub fn pop_reserved(&mut self) -> Result<Piece, ExchangeError> {
        if self.reserve.is_empty() {
            return Err(ExchangeError::ReserveEmpty);
        }
        Ok(self.reserve.pop()?)
    }

    /// Exchange the queue front with the reserve top in place.
    /// No sizes change and no piece is generated.
    pub fn swap_front_top(&mut self) -> Result<SwapOutcome, ExchangeError> {
        let front = *self.queue.front().ok_or(ExchangeError::EmptyQueue)?;
        let top = *self.reserve.top().ok_or(ExchangeError::ReserveEmpty)?;

        self.queue.swap_front(top)?;
        self.reserve.swap_top(front)?;

        Ok(SwapOutcome {
            to_queue: top,
            to_reserve: front,
        })
    }

    /// Exchange the first three queue pieces with the top three reserve
    /// pieces, preserving front-to-back and top-to-bottom order. The former
    /// reserve top becomes the new queue front and vice versa.
    pub fn swap_three_block(&mut self) -> Result<BlockSwapOutcome, ExchangeError> {
        if self.queue.len() < SWAP_BLOCK_LEN {
            return Err(ExchangeError::InsufficientQueue {
                available: self.queue.len(),
            });
        }
        if self.reserve.len() < SWAP_BLOCK_LEN {
            return Err(ExchangeError::InsufficientReserve {
                available: self.reserve.len(),
            });
        }

        // Capture both blocks into temporaries before writing anything back
        let queue_view = self.queue.front_to_back();
        let reserve_view = self.reserve.top_to_bottom();
        let from_queue = [queue_view[0], queue_view[1], queue_view[2]];
        let from_reserve = [reserve_view[0], reserve_view[1], reserve_view[2]];

        for (offset, piece) in from_reserve.iter().enumerate() {
            self.queue.replace_from_front(offset, *piece)?;
        }
        for (offset, piece) in from_queue.iter().enumerate() {
            self.reserve.replace_from_top(offset, *piece)?;
        }

        Ok(BlockSwapOutcome {
            to_queue: from_reserve,
            to_reserve: from_queue,
        })
    }
}
