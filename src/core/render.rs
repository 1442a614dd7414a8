use crate::core::document::DiagramDocument;
use crate::utils::error::{DiagramError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Graphviz attributes for one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: &'static str,
    pub fillcolor: &'static str,
}

// Mapping of AWS resource types to drawable node styles
const RESOURCE_STYLES: &[(&str, NodeStyle)] = &[
    ("aws_vpc", NodeStyle { shape: "box3d", fillcolor: "#e8f4e8" }),
    // Subnet style is shared; the document does not distinguish public/private
    ("aws_subnet", NodeStyle { shape: "box", fillcolor: "#d6eaf8" }),
    ("aws_internet_gateway", NodeStyle { shape: "cds", fillcolor: "#fdebd0" }),
    ("aws_route_table", NodeStyle { shape: "folder", fillcolor: "#fdebd0" }),
    ("aws_security_group", NodeStyle { shape: "octagon", fillcolor: "#f5b7b1" }),
    ("aws_iam_role", NodeStyle { shape: "ellipse", fillcolor: "#f9e79f" }),
    ("aws_ecs_cluster", NodeStyle { shape: "component", fillcolor: "#d7bde2" }),
    ("aws_ecs_service", NodeStyle { shape: "component", fillcolor: "#d7bde2" }),
    ("aws_ecs_task_definition", NodeStyle { shape: "component", fillcolor: "#d7bde2" }),
];

/// Style lookup for a resource type: direct match first, then suffix
/// matching on the base type (type minus the `aws_` prefix).
pub fn node_style(resource_type: &str) -> Option<NodeStyle> {
    if let Some((_, style)) = RESOURCE_STYLES
        .iter()
        .find(|(key, _)| *key == resource_type)
    {
        return Some(*style);
    }

    let base_type = resource_type.split('_').nth(1)?;
    RESOURCE_STYLES
        .iter()
        .find(|(key, _)| key.ends_with(base_type))
        .map(|(_, style)| *style)
}

pub struct DiagramRenderer {
    document: DiagramDocument,
}

impl DiagramRenderer {
    pub fn new(document: DiagramDocument) -> Self {
        Self { document }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: Option<DiagramDocument> = serde_yaml::from_str(yaml)?;
        let document = document.ok_or_else(|| DiagramError::RenderError {
            message: "Empty diagram file".to_string(),
        })?;
        Ok(Self::new(document))
    }

    pub fn node_count(&self) -> usize {
        self.document.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.document.edges.len()
    }

    /// Renders the document as Graphviz DOT text. First pass draws every
    /// node that carries an identifier and a known style; second pass
    /// draws edges, skipping those whose endpoints were not drawn.
    pub fn generate(&self, title: &str) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n");
        out.push_str(&format!("    label=\"{}\";\n", escape(title)));
        out.push_str("    rankdir=TB;\n");
        out.push_str("    node [style=filled];\n\n");

        let mut drawn: HashSet<&str> = HashSet::new();

        for node in &self.document.nodes {
            let Some(identifier) = node.identifier.as_deref() else {
                continue;
            };
            let resource_type = identifier.split('.').next().unwrap_or(identifier);
            let Some(style) = node_style(resource_type) else {
                continue;
            };

            out.push_str(&format!(
                "    \"{}\" [label=\"{}\", shape={}, fillcolor=\"{}\"];\n",
                escape(&node.id),
                escape(&node.label),
                style.shape,
                style.fillcolor
            ));
            drawn.insert(node.id.as_str());
        }

        out.push('\n');

        for edge in &self.document.edges {
            if !drawn.contains(edge.source.as_str()) || !drawn.contains(edge.target.as_str()) {
                tracing::warn!(
                    "Skipping edge from {} to {} due to missing node",
                    edge.source,
                    edge.target
                );
                continue;
            }
            match &edge.label {
                Some(label) => out.push_str(&format!(
                    "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                    escape(&edge.source),
                    escape(&edge.target),
                    escape(label)
                )),
                None => out.push_str(&format!(
                    "    \"{}\" -> \"{}\";\n",
                    escape(&edge.source),
                    escape(&edge.target)
                )),
            }
        }

        out.push_str("}\n");
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
