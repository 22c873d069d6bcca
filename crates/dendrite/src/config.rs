//! Configuration types for concept-map layout.
//!
//! This module provides the spacing and retry parameters that control how
//! concepts are placed. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources (the CLI loads them from TOML).
//!
//! # Example
//!
//! ```
//! # use dendrite::config::LayoutConfig;
//! let config = LayoutConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.first_generation_limit(), 10);
//! ```

use std::f32::consts::{PI, TAU};

use serde::Deserialize;

use crate::error::ConfigError;

/// Spacing and retry parameters for the layout engine.
///
/// Defaults are tuned for a 700×500 canvas, the size the engine was
/// designed against; every value can be overridden independently, with
/// unset fields falling back to the default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the first-generation ring around the root.
    main_radius: f32,

    /// Base radius of the overflow annulus for parent-less nodes beyond the
    /// first generation. Samples are drawn from `[0.8, 1.2]` times this.
    secondary_radius: f32,

    /// Minimum horizontal separation for the rectangular exclusion rule.
    min_distance_x: f32,

    /// Minimum vertical separation for the rectangular exclusion rule.
    min_distance_y: f32,

    /// Exclusion radius of an ordinary node under the radial rule.
    node_exclusion_radius: f32,

    /// Exclusion radius of the root and of nodes adjacent to the root.
    /// Larger than `node_exclusion_radius` so new children never crowd the
    /// hub of the diagram.
    parent_zone_radius: f32,

    /// Initial distance between a child and its parent.
    distance_from_parent: f32,

    /// Radial distance added on each collision retry of a child placement.
    distance_increment: f32,

    /// Angular width, in radians, of the sector around the parent→root
    /// direction in which children are never placed.
    forbidden_sector: f32,

    /// Minimum number of angular slots a parent divides its usable arc
    /// into. Keeps early children's angles stable as siblings are added.
    min_slots: usize,

    /// Minimum number of slots the first-generation ring is divided into.
    min_ring_slots: usize,

    /// Non-root concept count up to which parent-less nodes still use the
    /// deterministic ring; beyond it the stochastic overflow search runs.
    first_generation_limit: usize,

    /// Sample budget for the stochastic overflow search.
    max_free_attempts: usize,

    /// Retry budget for child placement before overlap is accepted.
    max_child_attempts: usize,

    /// Margin kept between any child placement and the canvas edge.
    canvas_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            main_radius: 250.0,
            secondary_radius: 200.0,
            min_distance_x: 80.0,
            min_distance_y: 60.0,
            node_exclusion_radius: 40.0,
            parent_zone_radius: 80.0,
            distance_from_parent: 100.0,
            distance_increment: 50.0,
            forbidden_sector: PI / 3.0,
            min_slots: 4,
            min_ring_slots: 4,
            first_generation_limit: 10,
            max_free_attempts: 100,
            max_child_attempts: 5,
            canvas_margin: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the first-generation ring radius
    pub fn main_radius(&self) -> f32 {
        self.main_radius
    }

    /// Returns the base overflow annulus radius
    pub fn secondary_radius(&self) -> f32 {
        self.secondary_radius
    }

    /// Returns the minimum horizontal separation for flat placement
    pub fn min_distance_x(&self) -> f32 {
        self.min_distance_x
    }

    /// Returns the minimum vertical separation for flat placement
    pub fn min_distance_y(&self) -> f32 {
        self.min_distance_y
    }

    /// Returns the exclusion radius of an ordinary node
    pub fn node_exclusion_radius(&self) -> f32 {
        self.node_exclusion_radius
    }

    /// Returns the exclusion radius of the root and its neighbors
    pub fn parent_zone_radius(&self) -> f32 {
        self.parent_zone_radius
    }

    /// Returns the initial child-to-parent distance
    pub fn distance_from_parent(&self) -> f32 {
        self.distance_from_parent
    }

    /// Returns the per-retry radial increment
    pub fn distance_increment(&self) -> f32 {
        self.distance_increment
    }

    /// Returns the forbidden sector width in radians
    pub fn forbidden_sector(&self) -> f32 {
        self.forbidden_sector
    }

    /// Returns the minimum angular slot count for child placement
    pub fn min_slots(&self) -> usize {
        self.min_slots
    }

    /// Returns the minimum slot count of the first-generation ring
    pub fn min_ring_slots(&self) -> usize {
        self.min_ring_slots
    }

    /// Returns the non-root count threshold for ring placement
    pub fn first_generation_limit(&self) -> usize {
        self.first_generation_limit
    }

    /// Returns the overflow sample budget
    pub fn max_free_attempts(&self) -> usize {
        self.max_free_attempts
    }

    /// Returns the child placement retry budget
    pub fn max_child_attempts(&self) -> usize {
        self.max_child_attempts
    }

    /// Returns the canvas edge margin for child placement
    pub fn canvas_margin(&self) -> f32 {
        self.canvas_margin
    }

    /// Sets the first-generation ring radius
    pub fn with_main_radius(mut self, radius: f32) -> Self {
        self.main_radius = radius;
        self
    }

    /// Sets the base overflow annulus radius
    pub fn with_secondary_radius(mut self, radius: f32) -> Self {
        self.secondary_radius = radius;
        self
    }

    /// Sets the minimum separations for the rectangular exclusion rule
    pub fn with_min_distances(mut self, min_dx: f32, min_dy: f32) -> Self {
        self.min_distance_x = min_dx;
        self.min_distance_y = min_dy;
        self
    }

    /// Sets the exclusion radius of ordinary nodes
    pub fn with_node_exclusion_radius(mut self, radius: f32) -> Self {
        self.node_exclusion_radius = radius;
        self
    }

    /// Sets the exclusion radius of the root and its neighbors
    pub fn with_parent_zone_radius(mut self, radius: f32) -> Self {
        self.parent_zone_radius = radius;
        self
    }

    /// Sets the initial child-to-parent distance
    pub fn with_distance_from_parent(mut self, distance: f32) -> Self {
        self.distance_from_parent = distance;
        self
    }

    /// Sets the per-retry radial increment
    pub fn with_distance_increment(mut self, increment: f32) -> Self {
        self.distance_increment = increment;
        self
    }

    /// Sets the forbidden sector width in radians
    pub fn with_forbidden_sector(mut self, radians: f32) -> Self {
        self.forbidden_sector = radians;
        self
    }

    /// Sets the minimum angular slot count for child placement
    pub fn with_min_slots(mut self, slots: usize) -> Self {
        self.min_slots = slots;
        self
    }

    /// Sets the minimum slot count of the first-generation ring
    pub fn with_min_ring_slots(mut self, slots: usize) -> Self {
        self.min_ring_slots = slots;
        self
    }

    /// Sets the non-root count threshold for ring placement
    pub fn with_first_generation_limit(mut self, limit: usize) -> Self {
        self.first_generation_limit = limit;
        self
    }

    /// Sets the overflow sample budget
    pub fn with_max_free_attempts(mut self, attempts: usize) -> Self {
        self.max_free_attempts = attempts;
        self
    }

    /// Sets the child placement retry budget
    pub fn with_max_child_attempts(mut self, attempts: usize) -> Self {
        self.max_child_attempts = attempts;
        self
    }

    /// Sets the canvas edge margin for child placement
    pub fn with_canvas_margin(mut self, margin: f32) -> Self {
        self.canvas_margin = margin;
        self
    }

    /// Checks that every parameter is usable by the placement algorithms.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for non-positive distances or radii, a
    /// forbidden sector outside `(0, 2π)`, or zero slot/attempt counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("main_radius", self.main_radius),
            ("secondary_radius", self.secondary_radius),
            ("min_distance_x", self.min_distance_x),
            ("min_distance_y", self.min_distance_y),
            ("node_exclusion_radius", self.node_exclusion_radius),
            ("parent_zone_radius", self.parent_zone_radius),
            ("distance_from_parent", self.distance_from_parent),
            ("distance_increment", self.distance_increment),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !(self.forbidden_sector > 0.0 && self.forbidden_sector < TAU) {
            return Err(ConfigError::ForbiddenSector(self.forbidden_sector));
        }

        let counts = [
            ("min_slots", self.min_slots),
            ("min_ring_slots", self.min_ring_slots),
            ("max_free_attempts", self.max_free_attempts),
            ("max_child_attempts", self.max_child_attempts),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::ZeroCount { name, value });
            }
        }

        if !(self.canvas_margin >= 0.0) {
            return Err(ConfigError::Negative {
                name: "canvas_margin",
                value: self.canvas_margin,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = LayoutConfig::default().with_main_radius(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "main_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan_distance() {
        let config = LayoutConfig::default().with_distance_from_parent(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_full_circle_forbidden_sector() {
        let config = LayoutConfig::default().with_forbidden_sector(TAU);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ForbiddenSector(_))
        ));
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let config = LayoutConfig::default().with_max_child_attempts(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCount { .. })));
    }

    #[test]
    fn test_rejects_negative_margin() {
        let config = LayoutConfig::default().with_canvas_margin(-1.0);
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }
}
