//! Exchange action errors.
//!
//! Every variant is an expected, recoverable condition detected before any
//! mutation, so a failed action leaves both containers untouched. The
//! precondition class is the one exception: it marks a misused raw
//! container operation and is unreachable through the guarded actions.

use thiserror::Error;

use tetris_stack_core::PreconditionViolated;
use tetris_stack_types::SWAP_BLOCK_LEN;

/// Why an exchange action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("queue is empty, no piece to take")]
    EmptyQueue,

    #[error("reserve stack is full, release a piece first")]
    ReserveFull,

    #[error("reserve stack is empty, reserve a piece first")]
    ReserveEmpty,

    #[error("queue holds {available}/{SWAP_BLOCK_LEN} pieces, not enough to swap")]
    InsufficientQueue { available: usize },

    #[error("reserve holds {available}/{SWAP_BLOCK_LEN} pieces, not enough to swap")]
    InsufficientReserve { available: usize },

    #[error(transparent)]
    Precondition(#[from] PreconditionViolated),
}
