use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A Terraform source file discovered by the scanner, with its stat
/// metadata and full content.
#[derive(Debug, Clone)]
pub struct TerraformFile {
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub content: String,
}

/// A single `resource "<type>" "<label>" { ... }` block.
///
/// `identifier` is `<type>.<label>`. `name` is the block's `name`
/// attribute when present, otherwise the block label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBlock {
    pub resource_type: String,
    pub name: String,
    pub content: String,
    pub identifier: String,
}

/// A diagram node. Container nodes (`aws-cloud`, `region`) carry no
/// identifier; resource nodes carry the resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub identifier: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Per-file summary row for the inventory report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub resource_count: usize,
}

/// Output of the transform stage: the diagram graph plus the raw
/// resource blocks and the per-file inventory it was built from.
#[derive(Debug, Clone)]
pub struct DiagramResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub resources: Vec<ResourceBlock>,
    pub inventory: Vec<FileSummary>,
}
