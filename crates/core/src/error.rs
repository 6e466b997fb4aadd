//! Precondition errors for the raw container operations.
//!
//! `dequeue`, `pop`, and the slot accessors require the caller to check
//! occupancy first. Misuse is reported as an explicit error rather than
//! left undefined.

use thiserror::Error;

/// A raw container operation was called without its precondition holding.
///
/// The exchange engine always guards before calling the raw operations, so
/// this error is unreachable through the action entry points. It exists for
/// callers that drive the containers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("precondition violated: {0}")]
pub struct PreconditionViolated(pub &'static str);
