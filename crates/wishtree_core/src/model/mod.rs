//! Domain model for the compliment tree.
//!
//! # Responsibility
//! - Define the canonical ornament record shared by layout, storage and
//!   client-facing code.
//!
//! # Invariants
//! - Ornament ids are dense 0-based indexes assigned at generation time.
//! - Positions are fixed once generated; only `text` is mutable.

pub mod ornament;
