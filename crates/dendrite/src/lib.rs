//! Dendrite - An incremental layout engine for concept maps.
//!
//! Dendrite assigns 2D coordinates to the nodes of a concept map (a main
//! topic, its subtopics, and their child topics) one node at a time, so a
//! diagram can grow as suggestions arrive without a full re-layout. Nodes
//! keep clear of each other, children cluster near their parent and point
//! away from the root, and every call returns *some* point: under
//! pathological density placement degrades to overlap instead of failing.
//!
//! The engine is a pure coordinate calculator. It never mutates the
//! caller's collections, never mints ids, and holds no state between calls
//! beyond its random-number stream; the caller owns the graph, commits each
//! returned point, and passes the updated snapshot into the next call.
//!
//! # Examples
//!
//! ```
//! use dendrite::{LayoutSession, PlacementContext};
//! use dendrite::geometry::Bounds;
//! use dendrite::semantic::{Concept, ConceptRole};
//!
//! let mut session = LayoutSession::default();
//! let canvas = Bounds::from_canvas_size(700.0, 500.0);
//!
//! // Place and commit the root
//! let mut concepts = Vec::new();
//! let connections = Vec::new();
//!
//! let ctx = PlacementContext::new(&concepts, &connections, canvas);
//! let center = session.place_root(&ctx);
//! concepts.push(Concept::new("c0", "Rust", center, ConceptRole::Root));
//!
//! // Place a first-generation subtopic against the updated snapshot
//! let ctx = PlacementContext::new(&concepts, &connections, canvas);
//! let position = session.place_first_generation(&ctx);
//! concepts.push(Concept::new("c1", "Ownership", position, ConceptRole::Subtopic));
//! ```

pub mod config;

mod error;
mod layout;

pub use dendrite_core::{geometry, semantic};

pub use error::ConfigError;
pub use layout::PlacementContext;

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use dendrite_core::geometry::Point;
use dendrite_core::semantic::ConceptId;

use config::LayoutConfig;
use layout::{free::FreePositionFinder, relative::RelativePositionFinder};

/// Orchestrator for incremental concept placement.
///
/// The only type callers invoke directly. Each placement reads the
/// already-committed node and edge sets from a [`PlacementContext`] and
/// returns a coordinate; committing it is the caller's job. If insertions
/// can race (two suggestions arriving concurrently), the caller must
/// serialize commits to its shared node list before invoking the next
/// placement; the session itself holds no locks and needs none.
///
/// The session is `&mut` only because it owns the random-number stream
/// used by the overflow search; every placement is otherwise a pure
/// function of its context.
pub struct LayoutSession {
    free: FreePositionFinder,
    relative: RelativePositionFinder,
    rng: StdRng,
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new(LayoutConfig::default()).expect("default layout config is valid")
    }
}

impl LayoutSession {
    /// Creates a session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails validation.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            free: FreePositionFinder::new(config.clone()),
            relative: RelativePositionFinder::new(config),
            rng: StdRng::from_os_rng(),
        })
    }

    /// Pins the random-number stream so overflow and fallback placements
    /// are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Position for the root concept: always exactly the context center.
    pub fn place_root(&self, ctx: &PlacementContext<'_>) -> Point {
        self.free.place_root(ctx)
    }

    /// Position for a parent-less, non-root concept.
    ///
    /// First-generation concepts land on evenly spaced ring slots around
    /// the center; once the map outgrows the first generation, placement
    /// switches to a bounded random search on an outer annulus. Never
    /// fails: an exhausted search degrades to an overlapping point on a
    /// wider ring.
    pub fn place_first_generation(&mut self, ctx: &PlacementContext<'_>) -> Point {
        let position = self.free.place(ctx, &mut self.rng);
        debug!(
            x = position.x(),
            y = position.y(),
            existing = ctx.concepts().len();
            "Placed free concept"
        );
        position
    }

    /// Position for a new child of `parent_id`.
    ///
    /// The child takes the next angular slot pointing away from the root,
    /// outside the forbidden sector, and is pushed radially outward on
    /// collision. Never fails; an exhausted retry budget returns the last
    /// candidate, overlap and all. A `parent_id` absent from the context
    /// is a caller bug; the result is then measured from the canvas
    /// center, nonsensical but non-crashing.
    pub fn place_child(&mut self, parent_id: &ConceptId, ctx: &PlacementContext<'_>) -> Point {
        let position = self.relative.place(ctx, parent_id);
        debug!(
            parent:% = parent_id,
            x = position.x(),
            y = position.y();
            "Placed child concept"
        );
        position
    }
}
