//! Core domain logic for the wishtree compliment board.
//! This crate is the single source of truth for layout and store invariants.

pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use layout::{generate, LayoutParams, SeededRng, Silhouette};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ornament::{
    Ornament, OrnamentId, OrnamentValidationError, DEFAULT_COLOR, MAX_TEXT_CHARS, PALETTE,
};
pub use repo::ornament_repo::{
    coerce_ornament, InitializeOutcome, OrnamentRepository, RepoError, RepoResult,
    SqliteOrnamentRepository,
};
pub use service::ornament_service::{HealthStatus, OrnamentService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
