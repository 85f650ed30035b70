// src/roadmap/normalize.rs
//! Coerce-and-default transform from the parsed payload into the canonical
//! `RoadmapGraph`. Missing scalars get documented defaults, ids are coerced
//! to strings, and edges referencing unknown node ids are dropped rather
//! than failing the whole result.

use super::types::{
    Edge, Node, Position, RoadmapGraph, EDGE_KIND, NODE_KIND, NODE_VERTICAL_SPACING,
    PLACEHOLDER_LINK,
};
use crate::error::PipelineError;
use serde_json::Value;
use std::collections::HashSet;

pub fn normalize_roadmap(payload: &Value, skill: &str) -> Result<RoadmapGraph, PipelineError> {
    if !payload.is_object() {
        return Err(PipelineError::SchemaInvalid(
            "roadmap payload is not an object".to_string(),
        ));
    }

    let nodes: Vec<Node> = payload
        .get("nodes")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.is_object())
                .map(|(index, item)| normalize_node(item, index))
                .collect()
        })
        .unwrap_or_default();

    if nodes.is_empty() {
        return Err(PipelineError::SchemaInvalid(
            "roadmap has no usable nodes".to_string(),
        ));
    }

    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let edges: Vec<Edge> = payload
        .get("edges")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.is_object())
                .map(|(index, item)| normalize_edge(item, index))
                // Dangling edges are dropped, never fabricated.
                .filter(|edge| {
                    node_ids.contains(edge.source_id.as_str())
                        && node_ids.contains(edge.target_id.as_str())
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(RoadmapGraph {
        title: string_or(payload.get("title"), || format!("{} Learning Roadmap", skill)),
        description: string_or(payload.get("description"), || {
            format!("A comprehensive learning path for {}", skill)
        }),
        duration: string_or(payload.get("duration"), || "3-6 months".to_string()),
        nodes,
        edges,
    })
}

fn normalize_node(item: &Value, index: usize) -> Node {
    let link = item
        .get("link")
        .map(stringify)
        .filter(|l| l.starts_with("http"))
        .unwrap_or_else(|| PLACEHOLDER_LINK.to_string());

    Node {
        id: item
            .get("id")
            .map(stringify)
            .unwrap_or_else(|| format!("node-{}", index + 1)),
        kind: NODE_KIND.to_string(),
        position: Position {
            x: item.pointer("/position/x").and_then(Value::as_f64).unwrap_or(0.0),
            y: item
                .pointer("/position/y")
                .and_then(Value::as_f64)
                .unwrap_or(index as f64 * NODE_VERTICAL_SPACING),
        },
        title: string_or(item.get("title"), || format!("Step {}", index + 1)),
        description: string_or(item.get("description"), || {
            "Learning step description".to_string()
        }),
        link,
    }
}

fn normalize_edge(item: &Value, index: usize) -> Edge {
    Edge {
        id: item
            .get("id")
            .map(stringify)
            .unwrap_or_else(|| format!("edge-{}", index + 1)),
        source_id: item
            .get("sourceId")
            .map(stringify)
            .unwrap_or_else(|| format!("node-{}", index + 1)),
        target_id: item
            .get("targetId")
            .map(stringify)
            .unwrap_or_else(|| format!("node-{}", index + 2)),
        kind: EDGE_KIND.to_string(),
        animated: true,
    }
}

/// Numeric and boolean ids come back from models regularly; coerce every
/// scalar to its string form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Empty strings count as absent and take the default; other scalars are
/// coerced to their string form.
fn string_or(value: Option<&Value>, default: impl FnOnce() -> String) -> String {
    match value {
        Some(Value::String(s)) => {
            if s.is_empty() {
                default()
            } else {
                s.clone()
            }
        }
        Some(Value::Null) | None => default(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_payload() -> Value {
        json!({
            "title": "Rust Learning Roadmap",
            "description": "From zero to systems programming.",
            "duration": "4 months",
            "nodes": [
                {
                    "id": "1",
                    "position": { "x": 0, "y": 0 },
                    "title": "Fundamentals",
                    "description": "Ownership and borrowing.",
                    "link": "https://doc.rust-lang.org/book/"
                },
                {
                    "id": "2",
                    "position": { "x": 0, "y": 200 },
                    "title": "Async",
                    "description": "Futures and executors.",
                    "link": "https://rust-lang.github.io/async-book/"
                }
            ],
            "edges": [
                { "id": "e1-2", "sourceId": "1", "targetId": "2" }
            ]
        })
    }

    #[test]
    fn test_well_formed_payload_normalizes() {
        let graph = normalize_roadmap(&minimal_payload(), "Rust").unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.nodes[0].kind, "step");
        assert_eq!(graph.edges[0].kind, "smooth");
        assert!(graph.edges[0].animated);
    }

    #[test]
    fn test_dangling_edges_dropped() {
        let mut payload = minimal_payload();
        payload["edges"] = json!([
            { "id": "e1-2", "sourceId": "1", "targetId": "2" },
            { "id": "e2-9", "sourceId": "2", "targetId": "9" },
            { "id": "e0-1", "sourceId": "ghost", "targetId": "1" }
        ]);

        let graph = normalize_roadmap(&payload, "Rust").unwrap();
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].id, "e1-2");

        let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            assert!(node_ids.contains(&edge.source_id.as_str()));
            assert!(node_ids.contains(&edge.target_id.as_str()));
        }
    }

    #[test]
    fn test_numeric_ids_coerced_to_strings() {
        let payload = json!({
            "nodes": [
                { "id": 1, "title": "Basics" },
                { "id": 2, "title": "Advanced" }
            ],
            "edges": [
                { "id": 7, "sourceId": 1, "targetId": 2 }
            ]
        });

        let graph = normalize_roadmap(&payload, "Go").unwrap();
        assert_eq!(graph.nodes[0].id, "1");
        assert_eq!(graph.edges[0].source_id, "1");
        assert_eq!(graph.edges[0].target_id, "2");
    }

    #[test]
    fn test_missing_node_fields_get_defaults() {
        let payload = json!({ "nodes": [ {}, {} ] });
        let graph = normalize_roadmap(&payload, "Go").unwrap();

        assert_eq!(graph.nodes[0].id, "node-1");
        assert_eq!(graph.nodes[0].title, "Step 1");
        assert_eq!(graph.nodes[0].position.y, 0.0);
        assert_eq!(graph.nodes[1].position.y, 200.0);
        assert_eq!(graph.nodes[1].link, PLACEHOLDER_LINK);
        assert_eq!(graph.title, "Go Learning Roadmap");
        assert_eq!(graph.duration, "3-6 months");
    }

    #[test]
    fn test_empty_string_fields_take_defaults() {
        let payload = json!({
            "title": "",
            "description": "",
            "duration": "",
            "nodes": [ { "id": "1", "title": "", "description": "" } ]
        });

        let graph = normalize_roadmap(&payload, "Go").unwrap();
        assert_eq!(graph.title, "Go Learning Roadmap");
        assert_eq!(graph.description, "A comprehensive learning path for Go");
        assert_eq!(graph.duration, "3-6 months");
        assert_eq!(graph.nodes[0].title, "Step 1");
        assert_eq!(graph.nodes[0].description, "Learning step description");
    }

    #[test]
    fn test_non_http_link_replaced_with_placeholder() {
        let payload = json!({
            "nodes": [ { "id": "1", "link": "ftp://example.com" } ]
        });
        let graph = normalize_roadmap(&payload, "Go").unwrap();
        assert_eq!(graph.nodes[0].link, PLACEHOLDER_LINK);
    }

    #[test]
    fn test_empty_nodes_is_schema_invalid() {
        let err = normalize_roadmap(&json!({ "nodes": [] }), "Go").unwrap_err();
        assert!(matches!(err, PipelineError::SchemaInvalid(_)));

        let err = normalize_roadmap(&json!({}), "Go").unwrap_err();
        assert!(matches!(err, PipelineError::SchemaInvalid(_)));
    }

    #[test]
    fn test_non_object_payload_is_schema_invalid() {
        let err = normalize_roadmap(&json!([1, 2, 3]), "Go").unwrap_err();
        assert!(matches!(err, PipelineError::SchemaInvalid(_)));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = normalize_roadmap(&minimal_payload(), "Rust").unwrap();
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize_roadmap(&reserialized, "Rust").unwrap();
        assert_eq!(first, second);
    }
}
