//! Relative position finder for declared children.
//!
//! A child is placed on an angular slot pointing away from the root: the
//! full circle minus a forbidden sector centered on the parent→root
//! direction is divided into slots, and the child takes the slot after its
//! existing siblings. On collision the child is pushed radially outward in
//! fixed increments; the angle is never perturbed, so a child's direction
//! stays visually consistent with its slot even when it ends up farther
//! out.

use std::f32::consts::TAU;

use indexmap::IndexSet;
use log::{debug, trace};

use dendrite_core::geometry::{Point, normalize_angle};
use dendrite_core::semantic::ConceptId;

use crate::config::LayoutConfig;
use crate::layout::{PlacementContext, collision::CollisionChecker};

/// Places concepts that are declared children of an existing parent.
pub struct RelativePositionFinder {
    config: LayoutConfig,
}

impl RelativePositionFinder {
    /// Creates a finder with the given spacing parameters
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Position for a new child of `parent_id`.
    ///
    /// Deterministic for a given context: the sibling set, the slot index,
    /// and the collision escalation are all functions of the snapshot.
    ///
    /// A `parent_id` missing from the context is a caller bug; the finder
    /// does not validate it and simply measures from the layout center so
    /// the call still returns a usable point.
    pub fn place(&self, ctx: &PlacementContext<'_>, parent_id: &ConceptId) -> Point {
        let parent_position = ctx
            .concept(parent_id)
            .map(|parent| parent.position())
            .unwrap_or_else(|| ctx.center());

        let angle = self.child_angle(ctx, parent_id, parent_position);
        self.resolve_collisions(ctx, parent_position, angle)
    }

    /// Angular slot for the next child of the parent.
    fn child_angle(
        &self,
        ctx: &PlacementContext<'_>,
        parent_id: &ConceptId,
        parent_position: Point,
    ) -> f32 {
        let index = self.sibling_count(ctx, parent_id);

        // Direction from the parent back toward the hub; the forbidden
        // sector is centered on it
        let angle_to_root = ctx
            .root()
            .map(|root| parent_position.angle_to(root.position()))
            .unwrap_or(0.0);

        let sector = self.config.forbidden_sector();
        let usable_arc = TAU - sector;
        let slots = (index + 1).max(self.config.min_slots());
        let angle = normalize_angle(
            angle_to_root + sector / 2.0 + index as f32 * usable_arc / slots as f32,
        );

        trace!(
            parent:% = parent_id,
            sibling_index = index,
            slots = slots,
            angle = angle;
            "Computed child slot angle"
        );
        angle
    }

    /// Counts the distinct concepts already connected to the parent.
    ///
    /// Discovery order is the order of the existing connections, so the
    /// count (and thus the slot index) is stable across calls with the same
    /// snapshot. The root is excluded (it anchors the forbidden direction
    /// rather than occupying a child slot) and so is the parent itself,
    /// which tolerates self-loops.
    fn sibling_count(&self, ctx: &PlacementContext<'_>, parent_id: &ConceptId) -> usize {
        let root_id = ctx.root().map(|root| root.id());
        let mut siblings: IndexSet<&ConceptId> = IndexSet::new();

        for connection in ctx.connections() {
            let Some(other) = connection.other_endpoint(parent_id) else {
                continue;
            };
            if other == parent_id || Some(other) == root_id {
                continue;
            }
            siblings.insert(other);
        }

        siblings.len()
    }

    /// Walks the candidate outward until it clears the radial rule or the
    /// retry budget runs out. The final candidate is returned either way.
    fn resolve_collisions(
        &self,
        ctx: &PlacementContext<'_>,
        parent_position: Point,
        angle: f32,
    ) -> Point {
        let checker = CollisionChecker::new(&self.config, ctx);
        let margin = self.config.canvas_margin();
        let mut distance = self.config.distance_from_parent();

        let mut candidate = ctx
            .canvas()
            .clamp_with_margin(Point::on_circle(parent_position, distance, angle), margin);

        for attempt in 0..self.config.max_child_attempts() {
            if checker.is_free_radial(candidate) {
                return candidate;
            }
            distance += self.config.distance_increment();
            candidate = ctx
                .canvas()
                .clamp_with_margin(Point::on_circle(parent_position, distance, angle), margin);
            trace!(attempt = attempt, distance = distance; "Child candidate collided, escalating radius");
        }

        if !checker.is_free_radial(candidate) {
            debug!(
                attempts = self.config.max_child_attempts(),
                distance = distance;
                "Child placement budget exhausted, accepting overlap"
            );
        }
        candidate
    }
}
