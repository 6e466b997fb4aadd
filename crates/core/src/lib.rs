//! Core containers - pure, deterministic, and testable
//!
//! This crate holds the piece generator and both bounded containers.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a seeded source produces identical piece streams
//! - **Testable**: unit tests cover every container operation
//! - **Portable**: can run headless under any driver
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and the [`PieceSource`] piece generator
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`reserve`]: fixed-capacity LIFO of set-aside pieces
//! - [`error`]: the precondition-violation error for misused raw operations

pub mod error;
pub mod queue;
pub mod reserve;
pub mod rng;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::PreconditionViolated;
pub use queue::PieceQueue;
pub use reserve::ReserveStack;
pub use rng::{PieceSource, SimpleRng};
