//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate layout generation and repository calls into the
//!   load-or-bootstrap flow clients consume.
//! - Keep callers decoupled from storage details.

pub mod ornament_service;
