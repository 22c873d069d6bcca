//! Semantic model types for concept maps.
//!
//! A concept map is a labeled graph: a main topic (the root), its subtopics,
//! and their child topics, joined by labeled connections. These types carry
//! no layout behavior; the `dendrite` crate computes coordinates against
//! snapshots of them.
//!
//! Identity lives in [`ConceptId`]. The layout engine never mints ids; the
//! caller that owns the graph state generates them and commits every
//! returned coordinate back into its own collections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Opaque identifier for a concept.
///
/// Treated as an uninterpreted string; equality is the only operation the
/// layout engine relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    /// Creates an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConceptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque identifier for a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConnectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The role a concept plays in the map hierarchy.
///
/// An explicit discriminant rather than optional fields: every concept is
/// exactly one of these, and a session contains zero or one `Root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptRole {
    /// The main topic, fixed at the canvas center
    Root,
    /// A first-generation topic placed on a ring around the root
    Subtopic,
    /// A topic placed relative to a declared parent
    ChildTopic,
}

/// A node in the concept map.
///
/// Lifetime is the in-memory layout session; nothing here is persisted by
/// the layout engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    id: ConceptId,
    label: String,
    position: Point,
    role: ConceptRole,
}

impl Concept {
    /// Creates a concept with the given identity, label, position, and role
    pub fn new(
        id: impl Into<ConceptId>,
        label: impl Into<String>,
        position: Point,
        role: ConceptRole,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            role,
        }
    }

    /// Returns the concept's identifier
    pub fn id(&self) -> &ConceptId {
        &self.id
    }

    /// Returns the display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the committed position
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the hierarchy role
    pub fn role(&self) -> ConceptRole {
        self.role
    }

    /// True for the main topic
    pub fn is_root(&self) -> bool {
        self.role == ConceptRole::Root
    }

    /// Moves the concept to a new position (insertion commit or drag)
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// A labeled edge between two concepts.
///
/// Undirected for layout purposes: source and target carry semantic meaning
/// only. Which endpoint acts as the layout parent is decided by insertion
/// order, not by edge direction. Both endpoints must reference existing
/// concepts; dropping dangling edges is the caller's job, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    id: ConnectionId,
    source: ConceptId,
    target: ConceptId,
    label: String,
}

impl Connection {
    /// Creates a connection between two concepts
    pub fn new(
        id: impl Into<ConnectionId>,
        source: impl Into<ConceptId>,
        target: impl Into<ConceptId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// Returns the connection's identifier
    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    /// Returns the source endpoint id
    pub fn source(&self) -> &ConceptId {
        &self.source
    }

    /// Returns the target endpoint id
    pub fn target(&self) -> &ConceptId {
        &self.target
    }

    /// Returns the display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True if either endpoint is the given concept
    pub fn touches(&self, id: &ConceptId) -> bool {
        &self.source == id || &self.target == id
    }

    /// Returns the endpoint opposite to `id`, if `id` is an endpoint.
    ///
    /// Self-loops return the same id; the layout engine tolerates them.
    pub fn other_endpoint(&self, id: &ConceptId) -> Option<&ConceptId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}
