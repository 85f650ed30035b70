// src/roadmap/types.rs
//! Canonical learning-roadmap graph shape.

use serde::{Deserialize, Serialize};

pub const NODE_KIND: &str = "step";
pub const EDGE_KIND: &str = "smooth";
/// Vertical layout step used when the model omits a node position.
pub const NODE_VERTICAL_SPACING: f64 = 200.0;
pub const PLACEHOLDER_LINK: &str = "https://example.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapGraph {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: String,
    pub position: Position,
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub kind: String,
    pub animated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_wire_names() {
        let edge = Edge {
            id: "e1-2".to_string(),
            source_id: "1".to_string(),
            target_id: "2".to_string(),
            kind: EDGE_KIND.to_string(),
            animated: true,
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["sourceId"], "1");
        assert_eq!(json["targetId"], "2");
        assert_eq!(json["kind"], "smooth");
    }
}
