//! Collision rules for candidate placements.
//!
//! Two exclusion rules are supported because the two finders work under
//! different density assumptions:
//!
//! - the **rectangular rule** is an L∞-style separation test used for flat
//!   placement, cheap and tolerant of dense rings;
//! - the **radial rule** is a Euclidean test with a per-node exclusion
//!   radius, where the root and its direct neighbors get the larger
//!   parent-zone radius so children never crowd the hub.

use dendrite_core::geometry::Point;

use crate::config::LayoutConfig;
use crate::layout::PlacementContext;

/// Tests candidate points against the already-placed concept set.
///
/// Built per placement call from the context snapshot; holds no state of
/// its own beyond borrowed configuration.
pub struct CollisionChecker<'a> {
    config: &'a LayoutConfig,
    ctx: &'a PlacementContext<'a>,
}

impl<'a> CollisionChecker<'a> {
    /// Creates a checker over the given context
    pub fn new(config: &'a LayoutConfig, ctx: &'a PlacementContext<'a>) -> Self {
        Self { config, ctx }
    }

    /// Rectangular rule: free iff every existing concept differs from the
    /// candidate by at least `min_distance_x` horizontally or
    /// `min_distance_y` vertically.
    pub fn is_free_rectangular(&self, candidate: Point) -> bool {
        self.ctx.concepts().iter().all(|concept| {
            candidate.chebyshev_separated(
                concept.position(),
                self.config.min_distance_x(),
                self.config.min_distance_y(),
            )
        })
    }

    /// Radial rule: free iff the Euclidean distance to every existing
    /// concept strictly exceeds that concept's exclusion radius.
    pub fn is_free_radial(&self, candidate: Point) -> bool {
        let parent_zone = self.ctx.parent_zone_ids();
        self.ctx.concepts().iter().all(|concept| {
            let radius = if parent_zone.contains(concept.id()) {
                self.config.parent_zone_radius()
            } else {
                self.config.node_exclusion_radius()
            };
            candidate.distance(concept.position()) > radius
        })
    }
}

#[cfg(test)]
mod tests {
    use dendrite_core::geometry::Bounds;

    use crate::layout::test_support::{edge, root_at, subtopic};

    use super::*;

    fn canvas() -> Bounds {
        Bounds::from_canvas_size(700.0, 500.0)
    }

    #[test]
    fn test_rectangular_rule_is_axis_wise() {
        let config = LayoutConfig::default();
        let concepts = [subtopic("a", 300.0, 300.0)];
        let ctx = PlacementContext::new(&concepts, &[], canvas());
        let checker = CollisionChecker::new(&config, &ctx);

        // Far enough on x alone (default min_distance_x = 80)
        assert!(checker.is_free_rectangular(Point::new(380.0, 300.0)));
        // Far enough on y alone (default min_distance_y = 60)
        assert!(checker.is_free_rectangular(Point::new(300.0, 360.0)));
        // Too close on both axes
        assert!(!checker.is_free_rectangular(Point::new(350.0, 340.0)));
    }

    #[test]
    fn test_rectangular_rule_empty_set_is_free() {
        let config = LayoutConfig::default();
        let ctx = PlacementContext::new(&[], &[], canvas());
        let checker = CollisionChecker::new(&config, &ctx);
        assert!(checker.is_free_rectangular(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_radial_rule_ordinary_node() {
        let config = LayoutConfig::default();
        let concepts = [subtopic("a", 300.0, 300.0)];
        let ctx = PlacementContext::new(&concepts, &[], canvas());
        let checker = CollisionChecker::new(&config, &ctx);

        // Default node_exclusion_radius = 40; the test is strict
        assert!(!checker.is_free_radial(Point::new(340.0, 300.0)));
        assert!(checker.is_free_radial(Point::new(341.0, 300.0)));
    }

    #[test]
    fn test_radial_rule_parent_zone_is_larger() {
        let config = LayoutConfig::default();
        let concepts = [root_at(350.0, 250.0), subtopic("a", 300.0, 300.0)];
        let connections = [edge("e0", "root", "a")];
        let ctx = PlacementContext::new(&concepts, &connections, canvas());
        let checker = CollisionChecker::new(&config, &ctx);

        // 41 px from "a" would clear an ordinary node, but "a" is adjacent
        // to the root and carries the parent-zone radius (default 80)
        let near_a = Point::new(341.0, 300.0);
        assert!(!checker.is_free_radial(near_a));

        let clear_of_a = Point::new(300.0, 390.0);
        assert!(checker.is_free_radial(clear_of_a));
    }

    #[test]
    fn test_radial_rule_without_root_uses_ordinary_radius() {
        let config = LayoutConfig::default();
        let concepts = [subtopic("a", 300.0, 300.0)];
        let connections = [edge("e0", "a", "b")];
        let ctx = PlacementContext::new(&concepts, &connections, canvas());
        let checker = CollisionChecker::new(&config, &ctx);

        assert!(checker.is_free_radial(Point::new(341.0, 300.0)));
    }
}
