use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use tf_diagram::core::render::{node_style, DiagramRenderer};

fn test_diagram_yaml() -> String {
    r#"
nodes:
  - id: aws-cloud
    identifier: null
    label: AWS Cloud
  - id: aws_vpc-main
    identifier: aws_vpc.main
    label: "VPC: main"
    parent: region
  - id: aws_ecs_cluster-main
    identifier: aws_ecs_cluster.main
    label: "ECS Cluster: main"
    parent: public-subnet
edges:
  - source: aws_ecs_cluster-main
    target: aws_vpc-main
"#
    .to_string()
}

#[test]
fn test_node_style_mapping() {
    assert!(node_style("aws_vpc").is_some());
    assert!(node_style("aws_ecs_cluster").is_some());
    // Service and cluster share one style
    assert_eq!(node_style("aws_ecs_service"), node_style("aws_ecs_cluster"));
    assert!(node_style("aws_subnet").is_some());
    assert!(node_style("aws_security_group").is_some());
    assert!(node_style("aws_unknown_resource").is_none());
}

#[test]
fn test_renderer_initialization_from_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(test_diagram_yaml().as_bytes()).unwrap();

    let renderer = DiagramRenderer::from_file(tmp.path()).unwrap();
    assert_eq!(renderer.node_count(), 3);
    assert_eq!(renderer.edge_count(), 1);
}

#[test]
fn test_renderer_empty_file_fails() {
    let tmp = NamedTempFile::new().unwrap();
    assert!(DiagramRenderer::from_file(tmp.path()).is_err());
}

#[test]
fn test_generate_draws_nodes_and_edges() {
    let renderer = DiagramRenderer::from_yaml_str(&test_diagram_yaml()).unwrap();
    let dot = renderer.generate("AWS Infrastructure");

    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("label=\"AWS Infrastructure\""));
    assert!(dot.contains("rankdir=TB"));

    // Container node without identifier is not drawn
    assert!(!dot.contains("\"aws-cloud\""));
    assert!(dot.contains("\"aws_vpc-main\" [label=\"VPC: main\""));
    assert!(dot.contains("\"aws_ecs_cluster-main\" -> \"aws_vpc-main\";"));
}

#[test]
fn test_generate_skips_edges_with_missing_endpoints() {
    let yaml = r#"
nodes:
  - id: aws_vpc-main
    identifier: aws_vpc.main
    label: "VPC: main"
edges:
  - source: aws_vpc-main
    target: aws_nonexistent-node
"#;
    let renderer = DiagramRenderer::from_yaml_str(yaml).unwrap();
    let dot = renderer.generate("AWS Infrastructure");

    assert!(dot.contains("\"aws_vpc-main\""));
    assert!(!dot.contains("->"));
}

#[test]
fn test_generate_from_pipeline_written_document() {
    // A document written by the pipeline renders without edge warnings
    let dir = tempfile::TempDir::new().unwrap();
    let yaml_path = dir.path().join("infrastructure.yaml");
    fs::write(&yaml_path, test_diagram_yaml()).unwrap();

    let renderer = DiagramRenderer::from_file(&yaml_path).unwrap();
    let dot = renderer.generate("AWS Infrastructure");
    fs::write(dir.path().join("infrastructure.dot"), &dot).unwrap();

    let written = fs::read_to_string(dir.path().join("infrastructure.dot")).unwrap();
    assert_eq!(written, dot);
}
