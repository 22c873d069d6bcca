//! Outline input format and its replay into a placed concept map.
//!
//! An outline is the CLI's stand-in for the suggestion service: a root
//! label, its subtopics, and their children, delivered to the engine one
//! concept at a time. The replay loop is the reference implementation of
//! the caller contract: it commits every returned coordinate before
//! building the next placement context.

use log::debug;
use serde::{Deserialize, Serialize};

use dendrite::geometry::Bounds;
use dendrite::semantic::{Concept, ConceptId, ConceptRole, Connection};
use dendrite::{LayoutSession, PlacementContext};

/// Input outline: a root topic with nested children, two levels deep.
#[derive(Debug, Deserialize)]
pub struct Outline {
    /// Label of the main topic
    pub root: String,

    /// First-generation topics around the root
    #[serde(default)]
    pub subtopics: Vec<OutlineTopic>,
}

/// A subtopic and its child labels.
#[derive(Debug, Deserialize)]
pub struct OutlineTopic {
    /// Display label of the subtopic
    pub label: String,

    /// Labels of the subtopic's children
    #[serde(default)]
    pub children: Vec<String>,
}

/// A fully placed concept map, ready for a renderer.
#[derive(Debug, Serialize)]
pub struct PlacedMap {
    pub concepts: Vec<Concept>,
    pub connections: Vec<Connection>,
}

/// Replays the outline through a layout session, one concept per call.
///
/// The CLI owns the graph state: it mints every id, commits every returned
/// point, and rebuilds the context per call, exactly as a UI state store
/// would.
pub fn place_outline(outline: &Outline, session: &mut LayoutSession, canvas: Bounds) -> PlacedMap {
    let mut concepts: Vec<Concept> = Vec::new();
    let mut connections: Vec<Connection> = Vec::new();
    let mut next_concept = 0usize;
    let mut next_connection = 0usize;

    let mut mint_concept = move || {
        let id = format!("c{next_concept}");
        next_concept += 1;
        id
    };
    let mut mint_connection = move || {
        let id = format!("e{next_connection}");
        next_connection += 1;
        id
    };

    // Root first
    let root_id = mint_concept();
    {
        let ctx = PlacementContext::new(&concepts, &connections, canvas);
        let position = session.place_root(&ctx);
        concepts.push(Concept::new(
            root_id.clone(),
            outline.root.clone(),
            position,
            ConceptRole::Root,
        ));
    }

    for topic in &outline.subtopics {
        let subtopic_id = mint_concept();
        {
            let ctx = PlacementContext::new(&concepts, &connections, canvas);
            let position = session.place_first_generation(&ctx);
            concepts.push(Concept::new(
                subtopic_id.clone(),
                topic.label.clone(),
                position,
                ConceptRole::Subtopic,
            ));
        }
        connections.push(Connection::new(
            mint_connection(),
            root_id.clone(),
            subtopic_id.clone(),
            "",
        ));

        let parent_id = ConceptId::from(subtopic_id.clone());
        for child_label in &topic.children {
            let child_id = mint_concept();
            {
                let ctx = PlacementContext::new(&concepts, &connections, canvas);
                let position = session.place_child(&parent_id, &ctx);
                concepts.push(Concept::new(
                    child_id.clone(),
                    child_label.clone(),
                    position,
                    ConceptRole::ChildTopic,
                ));
            }
            connections.push(Connection::new(
                mint_connection(),
                subtopic_id.clone(),
                child_id,
                "",
            ));
        }
    }

    debug!(
        concepts = concepts.len(),
        connections = connections.len();
        "Outline placed"
    );

    PlacedMap {
        concepts,
        connections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outline() -> Outline {
        serde_json::from_str(
            r#"{
                "root": "Rust",
                "subtopics": [
                    { "label": "Ownership", "children": ["Borrowing", "Lifetimes"] },
                    { "label": "Traits", "children": [] },
                    { "label": "Tooling" }
                ]
            }"#,
        )
        .expect("sample outline parses")
    }

    #[test]
    fn test_outline_parses_with_defaults() {
        let outline = sample_outline();
        assert_eq!(outline.root, "Rust");
        assert_eq!(outline.subtopics.len(), 3);
        assert!(outline.subtopics[2].children.is_empty());
    }

    #[test]
    fn test_replay_commits_every_concept() {
        let outline = sample_outline();
        let mut session = LayoutSession::default().with_seed(5);
        let canvas = Bounds::from_canvas_size(700.0, 500.0);

        let map = place_outline(&outline, &mut session, canvas);

        // Root + 3 subtopics + 2 children
        assert_eq!(map.concepts.len(), 6);
        assert_eq!(map.connections.len(), 5);

        assert!(map.concepts[0].is_root());
        for concept in &map.concepts {
            assert!(concept.position().x().is_finite());
            assert!(concept.position().y().is_finite());
        }

        // Every connection endpoint exists
        for connection in &map.connections {
            for endpoint in [connection.source(), connection.target()] {
                assert!(map.concepts.iter().any(|c| c.id() == endpoint));
            }
        }
    }

    #[test]
    fn test_replay_is_reproducible_with_seed() {
        let outline = sample_outline();
        let canvas = Bounds::from_canvas_size(700.0, 500.0);

        let mut session_a = LayoutSession::default().with_seed(11);
        let mut session_b = LayoutSession::default().with_seed(11);

        let map_a = place_outline(&outline, &mut session_a, canvas);
        let map_b = place_outline(&outline, &mut session_b, canvas);

        for (a, b) in map_a.concepts.iter().zip(&map_b.concepts) {
            assert_eq!(a.position(), b.position());
        }
    }
}
