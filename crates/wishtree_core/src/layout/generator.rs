//! Two-phase deterministic ornament placement.
//!
//! # Responsibility
//! - Turn a seed and the silhouette geometry into an ordered list of
//!   non-overlapping ornament placements.
//!
//! # Invariants
//! - Phase order is fixed: grid sweep first, uniform fill second. Every
//!   candidate draws the same number of PRNG samples whether or not it is
//!   accepted, so the sequence consumed is a pure function of the seed.
//! - Accepted ids are dense `0..k` in acceptance order.

use crate::layout::rng::SeededRng;
use crate::layout::silhouette::Silhouette;
use crate::model::ornament::Ornament;

/// Default generation seed shared by every client of the store.
pub const DEFAULT_SEED: u64 = 12345;
/// Number of ornaments a full tree carries.
pub const DEFAULT_TARGET_COUNT: usize = 250;
/// Minimum pairwise distance between ornament centers.
pub const DEFAULT_MIN_DISTANCE: f64 = 2.3;

const GRID_LAYERS: u32 = 15;
const MAX_FILL_ATTEMPTS: u32 = 1000;

/// Explicit generation parameters; no ambient configuration is consulted.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub seed: u64,
    pub target_count: usize,
    pub min_distance: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            target_count: DEFAULT_TARGET_COUNT,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Generates the full ornament layout for the reference tree silhouette.
///
/// Pure computation: no I/O, never fails. May return fewer than
/// `target_count` placements when the fill phase exhausts its attempt
/// budget; callers treat that as a valid (smaller) layout.
pub fn generate(params: &LayoutParams) -> Vec<Ornament> {
    generate_in(params, &Silhouette::tree())
}

/// Generates a layout constrained to an explicit silhouette.
pub fn generate_in(params: &LayoutParams, silhouette: &Silhouette) -> Vec<Ornament> {
    let mut rng = SeededRng::new(params.seed);
    let mut ornaments: Vec<Ornament> = Vec::with_capacity(params.target_count);

    // Grid phase: sweep 15 horizontal layers with jittered nominal positions
    // for an even distribution over the silhouette.
    for layer in 0..GRID_LAYERS {
        if ornaments.len() >= params.target_count {
            break;
        }

        let y_base = 20.0 + f64::from(layer) * 4.0;
        let max_width = 30.0 + f64::from(layer) * 2.0;
        let x_spacing = (max_width / 8.0).max(2.5);

        // f64 accumulation mirrors the reference sweep exactly; do not
        // rewrite as an integer step count.
        let mut x_offset = -max_width / 2.0;
        while x_offset <= max_width / 2.0 {
            if ornaments.len() >= params.target_count {
                break;
            }

            let x = 50.0 + x_offset + (rng.next_f64() - 0.5) * 1.5;
            let y = y_base + (rng.next_f64() - 0.5) * 2.0;
            try_place(&mut ornaments, silhouette, params.min_distance, x, y);

            x_offset += x_spacing;
        }
    }

    // Fill phase: uniform candidates over the bounding region until the
    // target is met or the attempt budget runs out.
    let mut attempts = 0;
    while ornaments.len() < params.target_count && attempts < MAX_FILL_ATTEMPTS {
        let x = 2.0 + rng.next_f64() * 90.0;
        let y = 16.0 + rng.next_f64() * 61.0;
        try_place(&mut ornaments, silhouette, params.min_distance, x, y);
        attempts += 1;
    }

    ornaments
}

/// Accepts the candidate when it is inside the silhouette and clear of all
/// earlier placements, assigning the next dense id and its palette color.
fn try_place(
    accepted: &mut Vec<Ornament>,
    silhouette: &Silhouette,
    min_distance: f64,
    x: f64,
    y: f64,
) {
    if !silhouette.contains(x, y) || collides(accepted, x, y, min_distance) {
        return;
    }
    let id = accepted.len() as i64;
    accepted.push(Ornament::placed(id, x, y, Ornament::palette_color(id)));
}

fn collides(accepted: &[Ornament], x: f64, y: f64, min_distance: f64) -> bool {
    accepted.iter().any(|ornament| {
        let dx = x - ornament.x;
        let dy = y - ornament.y;
        (dx * dx + dy * dy).sqrt() < min_distance
    })
}
