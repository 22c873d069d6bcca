//! Placement algorithms for concept maps.
//!
//! Two finders cover every insertion: [`free::FreePositionFinder`] for
//! parent-less concepts (the root, the first-generation ring, and overflow
//! nodes) and [`relative::RelativePositionFinder`] for declared children.
//! Both test candidates through [`collision::CollisionChecker`] and both
//! always return a point: when a retry budget runs out the last candidate
//! is returned as a documented, degraded placement.

pub mod collision;
pub mod free;
pub mod relative;

use std::collections::HashSet;

use dendrite_core::{
    geometry::{Bounds, Point},
    semantic::{Concept, ConceptId, Connection},
};

/// Ephemeral snapshot of the caller's graph state for one placement call.
///
/// Rebuilt per call and never stored: the engine reads the already-committed
/// concept and connection sets the caller passes in, computes one point, and
/// forgets everything. Sequential insertions within one event tick stay
/// consistent as long as the caller commits each returned point before
/// building the next context.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    concepts: &'a [Concept],
    connections: &'a [Connection],
    canvas: Bounds,
    center: Point,
}

impl<'a> PlacementContext<'a> {
    /// Creates a context over the caller's committed state, with the layout
    /// center at the canvas center.
    pub fn new(concepts: &'a [Concept], connections: &'a [Connection], canvas: Bounds) -> Self {
        Self {
            concepts,
            connections,
            canvas,
            center: canvas.center(),
        }
    }

    /// Overrides the layout center (the point the root is pinned to).
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Returns the committed concepts
    pub fn concepts(&self) -> &'a [Concept] {
        self.concepts
    }

    /// Returns the committed connections
    pub fn connections(&self) -> &'a [Connection] {
        self.connections
    }

    /// Returns the canvas bounds
    pub fn canvas(&self) -> Bounds {
        self.canvas
    }

    /// Returns the layout center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the root concept, if one has been committed
    pub fn root(&self) -> Option<&'a Concept> {
        self.concepts.iter().find(|concept| concept.is_root())
    }

    /// Looks up a concept by id
    pub fn concept(&self, id: &ConceptId) -> Option<&'a Concept> {
        self.concepts.iter().find(|concept| concept.id() == id)
    }

    /// Counts committed concepts that are not the root
    pub fn non_root_count(&self) -> usize {
        self.concepts
            .iter()
            .filter(|concept| !concept.is_root())
            .count()
    }

    /// Collects the ids forming the hub of the diagram: the root and every
    /// concept connected to it. These get the larger parent-zone exclusion
    /// radius under the radial rule.
    pub fn parent_zone_ids(&self) -> HashSet<&'a ConceptId> {
        let mut zone = HashSet::new();
        let Some(root) = self.root() else {
            return zone;
        };

        zone.insert(root.id());
        for connection in self.connections {
            if let Some(other) = connection.other_endpoint(root.id()) {
                zone.insert(other);
            }
        }
        zone
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use dendrite_core::{
        geometry::Point,
        semantic::{Concept, ConceptRole, Connection},
    };

    pub fn root_at(x: f32, y: f32) -> Concept {
        Concept::new("root", "Main topic", Point::new(x, y), ConceptRole::Root)
    }

    pub fn subtopic(id: &str, x: f32, y: f32) -> Concept {
        Concept::new(id, id, Point::new(x, y), ConceptRole::Subtopic)
    }

    pub fn child(id: &str, x: f32, y: f32) -> Concept {
        Concept::new(id, id, Point::new(x, y), ConceptRole::ChildTopic)
    }

    pub fn edge(id: &str, source: &str, target: &str) -> Connection {
        Connection::new(id, source, target, "")
    }
}
