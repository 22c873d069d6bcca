//! Free position finder for parent-less concepts.
//!
//! Handles three cases, escalating from cheapest to most speculative:
//!
//! 1. the root, pinned to the layout center with no search;
//! 2. first-generation concepts, placed on deterministic ring slots around
//!    the root;
//! 3. overflow concepts, sampled randomly on an outer annulus with a
//!    bounded retry budget and an explicit give-up fallback.
//!
//! The finder never fails: when every sample collides it returns a point on
//! a ring 20% wider than the annulus, accepting overlap as the documented
//! degradation.

use std::f32::consts::TAU;

use log::{debug, trace};
use rand::Rng;

use dendrite_core::geometry::Point;

use crate::config::LayoutConfig;
use crate::layout::{PlacementContext, collision::CollisionChecker};

/// Multipliers bounding the overflow sampling annulus around
/// `secondary_radius`. The fallback ring sits at the outer bound.
const ANNULUS_INNER: f32 = 0.8;
const ANNULUS_OUTER: f32 = 1.2;

/// Places concepts that have no declared parent.
pub struct FreePositionFinder {
    config: LayoutConfig,
}

impl FreePositionFinder {
    /// Creates a finder with the given spacing parameters
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Position for the root concept: always exactly the layout center.
    pub fn place_root(&self, ctx: &PlacementContext<'_>) -> Point {
        ctx.center()
    }

    /// Position for a parent-less, non-root concept.
    ///
    /// Deterministic ring placement while the map is still in its first
    /// generation; stochastic annulus search beyond that.
    pub fn place<R: Rng>(&self, ctx: &PlacementContext<'_>, rng: &mut R) -> Point {
        let non_root_count = ctx.non_root_count();
        if non_root_count < self.config.first_generation_limit() {
            self.ring_position(ctx, non_root_count)
        } else {
            self.sampled_position(ctx, rng)
        }
    }

    /// Evenly spaced slot on the main ring.
    ///
    /// The slot index is the current non-root count; the circle is divided
    /// by at least `min_ring_slots` so that early angles stay stable as
    /// more subtopics arrive.
    fn ring_position(&self, ctx: &PlacementContext<'_>, slot: usize) -> Point {
        let divisions = (slot + 1).max(self.config.min_ring_slots());
        let angle = slot as f32 * TAU / divisions as f32;
        trace!(slot = slot, divisions = divisions; "Placing first-generation concept on ring");
        Point::on_circle(ctx.center(), self.config.main_radius(), angle)
    }

    /// Random annulus search with the rectangular exclusion rule.
    fn sampled_position<R: Rng>(&self, ctx: &PlacementContext<'_>, rng: &mut R) -> Point {
        let checker = CollisionChecker::new(&self.config, ctx);
        let min_radius = ANNULUS_INNER * self.config.secondary_radius();
        let max_radius = ANNULUS_OUTER * self.config.secondary_radius();

        for attempt in 0..self.config.max_free_attempts() {
            let angle = rng.random_range(0.0..TAU);
            let radius = rng.random_range(min_radius..max_radius);
            let candidate = Point::on_circle(ctx.center(), radius, angle);

            if checker.is_free_rectangular(candidate) {
                trace!(attempt = attempt; "Found free overflow position");
                return candidate;
            }
        }

        // Give up gracefully: one ring further out, overlap accepted
        let angle = rng.random_range(0.0..TAU);
        debug!(
            attempts = self.config.max_free_attempts();
            "Overflow search exhausted, degrading to outer ring"
        );
        Point::on_circle(ctx.center(), max_radius, angle)
    }
}
