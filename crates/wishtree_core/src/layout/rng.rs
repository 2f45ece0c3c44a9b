//! Seeded pseudo-random number source for layout generation.
//!
//! # Responsibility
//! - Reproduce one fixed linear-congruential sequence exactly, so client and
//!   server regeneration agree on every placement.
//!
//! # Invariants
//! - The recurrence runs in integer arithmetic; division to `f64` happens
//!   only when handing a sample out.
//! - Equal seeds yield bit-identical sample sequences.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Deterministic LCG with the recurrence
/// `value = (value * 9301 + 49297) mod 233280`.
///
/// Not a statistical-quality generator; it exists for cross-implementation
/// reproducibility, never for randomness guarantees.
#[derive(Debug, Clone)]
pub struct SeededRng {
    value: u64,
}

impl SeededRng {
    /// Creates a generator seeded once for a full generation run.
    pub fn new(seed: u64) -> Self {
        Self { value: seed }
    }

    /// Advances the sequence and returns the next sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.value = (self.value * MULTIPLIER + INCREMENT) % MODULUS;
        self.value as f64 / MODULUS as f64
    }
}
