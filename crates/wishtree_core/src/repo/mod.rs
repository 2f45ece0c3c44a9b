//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the ornament store contract consumed by the bootstrap client.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Initialization is write-once-if-empty; a populated store is never
//!   overwritten.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod ornament_repo;
