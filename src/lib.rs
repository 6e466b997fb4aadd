//! Tetris Stack (workspace facade crate).
//!
//! This package keeps a stable `tetris_stack::{types,core,engine}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_types as types;
