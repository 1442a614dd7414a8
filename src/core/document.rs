use crate::domain::model::{Edge, Node};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// The diagram document as written to disk. Edge endpoints use node ids
/// (identifier form with `.` replaced by `-`), not resource identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramDocument {
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
}

impl DiagramDocument {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let edges = edges
            .into_iter()
            .map(|edge| Edge {
                source: edge.source.replace('.', "-"),
                target: edge.target.replace('.', "-"),
                label: edge.label,
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
