//! Tree silhouette containment geometry.
//!
//! # Responsibility
//! - Describe the valid placement region as three stacked triangular bands.
//! - Answer point-in-silhouette queries during generation.
//!
//! # Invariants
//! - Band y-ranges overlap; the first band (top to bottom) whose y-range
//!   covers the query decides the answer, even when its x-test fails.
//! - Band parameters must stay in lockstep with the rendered tree shape.

/// One triangular taper region.
///
/// The half-width at height `y` interpolates linearly from the apex
/// (width 0 at `y == apex_offset`) to `base_width` at
/// `y == apex_offset + height`. The horizontal bound is anchored slightly
/// asymmetrically for the upper tiers to match the drawn tree.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    /// Lowest y covered by this band.
    pub y_min: f64,
    /// Highest y covered by this band.
    pub y_max: f64,
    /// Reference apex height for the width interpolation.
    pub apex_offset: f64,
    /// Triangle height used as the interpolation denominator.
    pub height: f64,
    /// Full width at the triangle base.
    pub base_width: f64,
    /// Center anchor for the left bound.
    pub left_anchor: f64,
    /// Center anchor for the right bound.
    pub right_anchor: f64,
}

impl Band {
    /// Whether `y` falls inside this band's vertical span.
    pub fn spans_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_max
    }

    /// Whether `x` falls inside the tapered horizontal bound at height `y`.
    pub fn contains_x(&self, x: f64, y: f64) -> bool {
        let width_at_height = ((y - self.apex_offset) / self.height) * self.base_width;
        let left_bound = self.left_anchor - width_at_height / 2.0;
        let right_bound = self.right_anchor + width_at_height / 2.0;
        x >= left_bound && x <= right_bound
    }
}

/// The placement region: three overlapping bands, top tier first.
#[derive(Debug, Clone)]
pub struct Silhouette {
    bands: [Band; 3],
}

impl Silhouette {
    /// The reference three-tier tree shape.
    pub fn tree() -> Self {
        Self {
            bands: [
                // Top tier: apex (50,8), base from (28,38) to (72,38).
                Band {
                    y_min: 19.0,
                    y_max: 40.0,
                    apex_offset: 14.0,
                    height: 31.0,
                    base_width: 53.0,
                    left_anchor: 51.0,
                    right_anchor: 47.0,
                },
                // Middle tier: apex (50,25), base from (18,60) to (82,60).
                Band {
                    y_min: 23.0,
                    y_max: 57.0,
                    apex_offset: 27.0,
                    height: 35.0,
                    base_width: 75.0,
                    left_anchor: 52.0,
                    right_anchor: 48.0,
                },
                // Bottom tier: apex (50,45), base from (10,88) to (90,88).
                Band {
                    y_min: 29.0,
                    y_max: 88.0,
                    apex_offset: 45.0,
                    height: 43.0,
                    base_width: 103.0,
                    left_anchor: 50.0,
                    right_anchor: 50.0,
                },
            ],
        }
    }

    /// Point-in-silhouette test.
    ///
    /// Bands are evaluated top to bottom; the first band covering `y` gives
    /// the verdict. A point below or above every band is outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        for band in &self.bands {
            if band.spans_y(y) {
                return band.contains_x(x, y);
            }
        }
        false
    }
}
