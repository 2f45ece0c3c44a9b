//! Ornament store client: load-or-bootstrap orchestration.
//!
//! # Responsibility
//! - Decide at load time whether to trust the persisted collection or
//!   generate and persist a fresh layout.
//! - Reconcile with the store's write-once guarantee when two clients
//!   bootstrap a cold store concurrently.
//!
//! # Invariants
//! - A non-empty store is authoritative; independently regenerated layouts
//!   are never substituted for persisted ones.
//! - Bootstrap persistence failure degrades to an in-memory layout for the
//!   session, never to a hard error.

use crate::layout::{self, LayoutParams};
use crate::model::ornament::{Ornament, OrnamentId};
use crate::repo::ornament_repo::{OrnamentRepository, RepoResult};
use log::{info, warn};

/// Use-case service wrapping a repository and the layout generator.
pub struct OrnamentService<R: OrnamentRepository> {
    repo: R,
    layout: LayoutParams,
}

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub ornament_count: u32,
}

impl<R: OrnamentRepository> OrnamentService<R> {
    /// Creates a service with the reference layout parameters.
    pub fn new(repo: R) -> Self {
        Self::with_layout(repo, LayoutParams::default())
    }

    /// Creates a service with explicit layout parameters.
    pub fn with_layout(repo: R, layout: LayoutParams) -> Self {
        Self { repo, layout }
    }

    /// Loads the ornament collection, bootstrapping an empty store.
    ///
    /// # Contract
    /// - Non-empty store: returned verbatim, stored layout is the single
    ///   source of truth.
    /// - Empty store: generate locally, then attempt to persist. When the
    ///   store reports it was initialized in the meantime (lost bootstrap
    ///   race), the stored collection is re-read and wins. When persistence
    ///   fails outright, the failure is logged and the local layout serves
    ///   the session.
    pub fn load_or_bootstrap(&self) -> RepoResult<Vec<Ornament>> {
        let stored = self.repo.list_ornaments()?;
        if !stored.is_empty() {
            info!(
                "event=load module=service status=ok source=store count={}",
                stored.len()
            );
            return Ok(stored);
        }

        let generated = layout::generate(&self.layout);
        info!(
            "event=layout_generate module=service status=ok seed={} count={}",
            self.layout.seed,
            generated.len()
        );

        match self.repo.initialize_from_layout(&generated) {
            Ok(outcome) if outcome.already_initialized => {
                // Another client won the bootstrap race; its layout is
                // authoritative. Fall back to ours only if the re-read fails.
                match self.repo.list_ornaments() {
                    Ok(stored) if !stored.is_empty() => {
                        info!(
                            "event=bootstrap module=service status=raced count={}",
                            stored.len()
                        );
                        Ok(stored)
                    }
                    Ok(_) | Err(_) => Ok(generated),
                }
            }
            Ok(outcome) => {
                info!(
                    "event=bootstrap module=service status=ok count={}",
                    outcome.count
                );
                Ok(generated)
            }
            Err(err) => {
                warn!(
                    "event=bootstrap module=service status=error error={err} fallback=local_layout"
                );
                Ok(generated)
            }
        }
    }

    /// Overwrites one ornament's compliment; last write wins.
    ///
    /// Returns repository-level not-found and validation errors unchanged.
    pub fn update_text(&self, id: OrnamentId, text: &str) -> RepoResult<Ornament> {
        self.repo.update_text(id, text)
    }

    /// Liveness probe with the stored ornament count.
    pub fn health(&self) -> RepoResult<HealthStatus> {
        Ok(HealthStatus {
            status: "ok",
            ornament_count: self.repo.count_ornaments()?,
        })
    }
}
