//! Deterministic ornament layout generation.
//!
//! # Responsibility
//! - Produce the reproducible ornament placement used to bootstrap an empty
//!   store.
//! - Keep generation a pure computation: explicit parameters in, ordered
//!   placements out, no I/O and no failure modes.
//!
//! # Invariants
//! - Equal `LayoutParams` produce bit-identical placement sequences.
//! - Every accepted point lies inside the tree silhouette and keeps the
//!   minimum pairwise distance to all earlier points.

pub mod generator;
pub mod rng;
pub mod silhouette;

pub use generator::{generate, LayoutParams};
pub use rng::SeededRng;
pub use silhouette::{Band, Silhouette};
