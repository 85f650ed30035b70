// src/roadmap/prompt.rs
//! Instruction string for the roadmap task: a tree-structured learning path
//! in the exact canonical graph shape, JSON only.

pub fn build_roadmap_prompt(skill: &str) -> String {
    format!(
        r#"Generate a tree-structured learning roadmap for "{skill}" in the following format:

- Vertical tree structure with meaningful x/y positions to form a flow
- Steps ordered from fundamentals to advanced
- Include branching for different specializations (if applicable)
- Each node must have a title, short description, and learning resource link
- Use unique IDs for all nodes and edges
- Keep node positioning spacious (minimum 200 vertical spacing)
- Response in JSON format

{{
  "title": "Learning Roadmap Title",
  "description": "3-5 line description of the learning path",
  "duration": "Estimated time to complete",
  "nodes": [
    {{
      "id": "1",
      "kind": "step",
      "position": {{ "x": 0, "y": 0 }},
      "title": "Step Title",
      "description": "Short two-line explanation of what the step covers.",
      "link": "https://example.com/resource"
    }}
  ],
  "edges": [
    {{
      "id": "e1-2",
      "sourceId": "1",
      "targetId": "2",
      "kind": "smooth",
      "animated": true
    }}
  ]
}}

IMPORTANT:
- All node IDs must be strings
- All positions must be numbers
- All links must be valid URLs starting with https://
- Every edge must reference existing node IDs
- No missing required fields
Return ONLY valid JSON. No markdown, no explanations, no additional text."#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_skill() {
        let prompt = build_roadmap_prompt("Rust");
        assert!(prompt.contains("\"Rust\""));
    }

    #[test]
    fn test_prompt_states_canonical_shape() {
        let prompt = build_roadmap_prompt("Rust");
        assert!(prompt.contains("\"kind\": \"step\""));
        assert!(prompt.contains("\"sourceId\""));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }
}
