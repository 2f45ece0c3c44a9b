//! Ornament domain model.
//!
//! # Responsibility
//! - Define the single persisted entity: a placed, colorable ornament that
//!   can carry one short compliment.
//! - Provide the fixed color palette shared by generation and coercion.
//!
//! # Invariants
//! - `id` is stable once assigned and unique within a collection.
//! - `x`/`y` live in a normalized 0-100 plane and never change after
//!   generation.
//! - `text` holds at most `MAX_TEXT_CHARS` characters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an ornament.
///
/// Dense 0-based index assigned in placement order by the layout generator.
pub type OrnamentId = i64;

/// Maximum compliment length in characters.
pub const MAX_TEXT_CHARS: usize = 200;

/// Fixed 8-color ornament palette; generation assigns `PALETTE[id % 8]`.
pub const PALETTE: [&str; 8] = [
    "#ef4444", // red
    "#f59e0b", // amber
    "#eab308", // yellow
    "#3b82f6", // blue
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#10b981", // emerald
];

/// Fallback color used when an initialize payload carries a non-string color.
pub const DEFAULT_COLOR: &str = "#ef4444";

/// A single decoratable point on the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ornament {
    /// Dense 0-based index, stable once assigned.
    pub id: OrnamentId,
    /// User-submitted compliment; empty until someone writes one.
    pub text: String,
    /// Horizontal position as a percentage of the container width.
    pub x: f64,
    /// Vertical position as a percentage of the container height.
    pub y: f64,
    /// Hex color string, normally one of `PALETTE`.
    pub color: String,
}

/// Validation failure for ornament write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrnamentValidationError {
    /// `text` exceeds `MAX_TEXT_CHARS` characters.
    TextTooLong { chars: usize },
}

impl Display for OrnamentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextTooLong { chars } => write!(
                f,
                "ornament text has {chars} characters, maximum is {MAX_TEXT_CHARS}"
            ),
        }
    }
}

impl Error for OrnamentValidationError {}

impl Ornament {
    /// Creates an ornament at a generated position with an empty compliment.
    pub fn placed(id: OrnamentId, x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            text: String::new(),
            x,
            y,
            color: color.into(),
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), OrnamentValidationError> {
        let chars = self.text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(OrnamentValidationError::TextTooLong { chars });
        }
        Ok(())
    }

    /// Returns the palette color for a given id.
    pub fn palette_color(id: OrnamentId) -> &'static str {
        PALETTE[(id.unsigned_abs() as usize) % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::{Ornament, OrnamentValidationError, DEFAULT_COLOR, MAX_TEXT_CHARS, PALETTE};

    #[test]
    fn palette_color_wraps_every_eight_ids() {
        assert_eq!(Ornament::palette_color(0), PALETTE[0]);
        assert_eq!(Ornament::palette_color(7), PALETTE[7]);
        assert_eq!(Ornament::palette_color(8), PALETTE[0]);
        assert_eq!(Ornament::palette_color(250), PALETTE[250 % 8]);
    }

    #[test]
    fn default_color_is_first_palette_entry() {
        assert_eq!(DEFAULT_COLOR, PALETTE[0]);
    }

    #[test]
    fn validate_accepts_boundary_length_text() {
        let mut ornament = Ornament::placed(0, 50.0, 30.0, DEFAULT_COLOR);
        ornament.text = "x".repeat(MAX_TEXT_CHARS);
        assert!(ornament.validate().is_ok());
    }

    #[test]
    fn validate_rejects_over_long_text() {
        let mut ornament = Ornament::placed(0, 50.0, 30.0, DEFAULT_COLOR);
        ornament.text = "x".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            ornament.validate(),
            Err(OrnamentValidationError::TextTooLong {
                chars: MAX_TEXT_CHARS + 1
            })
        );
    }
}
