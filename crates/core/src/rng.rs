//! RNG module - random piece generation
//!
//! Provides a simple seeded LCG plus the [`PieceSource`] generator that
//! stamps every piece with a unique, monotonically increasing id.
//!
//! Drivers seed from the clock so runs differ; tests inject a fixed seed
//! for deterministic piece streams.

use std::time::{SystemTime, UNIX_EPOCH};

use tetris_stack_types::{Piece, PieceId, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Generator of piece tokens with unique ids.
///
/// The id counter is instance state, so independent sources (one per test,
/// for example) each start from 0.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
    next_id: PieceId,
}

impl PieceSource {
    /// Create a deterministic source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Create a source seeded from the system clock, for interactive runs
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Generate the next piece: uniform random kind, post-incremented id
    pub fn generate(&mut self) -> Piece {
        let kinds = PieceKind::ALL;
        let kind = kinds[self.rng.next_range(kinds.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Number of pieces generated so far (also the next id to be assigned)
    pub fn generated_count(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
