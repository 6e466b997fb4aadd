//! Exchange engine - the operations layer over the piece containers
//!
//! Composes the queue, the reserve stack, and the piece source into the
//! five player-facing actions:
//!
//! - **Play**: dequeue the front piece, refill the queue
//! - **Reserve**: move the front piece onto the reserve, refill the queue
//! - **Release**: pop the reserve top, no refill
//! - **Single swap**: exchange queue front and reserve top in place
//! - **Triple swap**: exchange the first three queue pieces with the top
//!   three reserve pieces, order preserved
//!
//! Every action checks all of its preconditions before mutating anything,
//! so a failure outcome means both containers are exactly as they were.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::PieceSource;
//! use tetris_stack_engine::ExchangeEngine;
//!
//! let mut engine = ExchangeEngine::new(PieceSource::new(12345));
//! let outcome = engine.play_front().unwrap();
//!
//! // The queue is refilled back to capacity after every play
//! assert!(engine.queue().is_full());
//! assert_ne!(outcome.played.id, outcome.refill.id);
//! ```

pub mod actions;
pub mod errors;

// Re-export commonly used types for convenience
pub use actions::{BlockSwapOutcome, ExchangeEngine, PlayOutcome, ReserveOutcome, SwapOutcome};
pub use errors::ExchangeError;
