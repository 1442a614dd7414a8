use crate::core::parser::extract_resource_references;
use crate::domain::model::{Edge, Node, ResourceBlock};

// aws resources that can have child resources
pub const CAN_BE_PARENT: &[&str] = &[
    "aws_vpc",
    "aws_subnet",
    "aws_ecs_cluster",
    "aws_ecs_service",
];

pub fn resource_parent(resource_type: &str) -> Option<&'static str> {
    match resource_type {
        "aws_vpc" => Some("region"),
        "aws_subnet" => Some("vpc"),
        "aws_lb" => Some("vpc"),
        "aws_ecs_service" => Some("private-subnet"),
        "aws_ecs_cluster" => Some("private-subnet"),
        "aws_wafregional_web_acl" => Some("region"),
        _ => None,
    }
}

pub fn resource_label(resource_type: &str, name: &str) -> String {
    let base_label = match resource_type {
        "aws_vpc" => "VPC".to_string(),
        "aws_subnet" => "Subnet".to_string(),
        "aws_lb" => "Load Balancer".to_string(),
        "aws_ecs_service" => "ECS Service".to_string(),
        "aws_ecs_cluster" => "ECS Cluster".to_string(),
        "aws_cloudfront_distribution" => "CloudFront".to_string(),
        "aws_waf_web_acl" => "WAF".to_string(),
        "aws_wafregional_web_acl" => "Regional WAF".to_string(),
        other => title_case(other.trim_start_matches("aws_")),
    };

    format!("{}: {}", base_label, name)
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the node list for a set of resources, seeded with the default
/// `aws-cloud` / `region` container nodes. Node ids are resource
/// identifiers with `.` replaced by `-`.
pub fn create_diagram_nodes(resources: &[ResourceBlock]) -> Vec<Node> {
    let mut nodes = vec![
        Node {
            id: "aws-cloud".to_string(),
            identifier: None,
            label: "AWS Cloud".to_string(),
            parent: None,
        },
        Node {
            id: "region".to_string(),
            identifier: None,
            label: "AWS Region".to_string(),
            parent: Some("aws-cloud".to_string()),
        },
    ];

    for resource in resources {
        nodes.push(Node {
            id: resource.identifier.replace('.', "-"),
            identifier: Some(resource.identifier.clone()),
            label: resource_label(&resource.resource_type, &resource.name),
            parent: resource_parent(&resource.resource_type).map(str::to_string),
        });
    }

    nodes
}

/// One edge per resource reference inside the block body; the block's
/// own identifier never appears as a target.
pub fn create_edges_from_block(block: &ResourceBlock) -> Vec<Edge> {
    extract_resource_references(&block.content)
        .into_iter()
        .filter(|target| target != &block.identifier)
        .map(|target| Edge {
            source: block.identifier.clone(),
            target,
            label: None,
        })
        .collect()
}

pub fn create_diagram_edges(resources: &[ResourceBlock]) -> Vec<Edge> {
    resources.iter().flat_map(create_edges_from_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(resource_type: &str, name: &str, content: &str) -> ResourceBlock {
        ResourceBlock {
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            identifier: format!("{}.{}", resource_type, name),
        }
    }

    #[test]
    fn test_create_diagram_nodes() {
        let resources = vec![
            resource(
                "aws_vpc",
                "main",
                "resource \"aws_vpc\" \"main\" {\n  name = \"main\"\n}",
            ),
            resource(
                "aws_subnet",
                "private",
                "resource \"aws_subnet\" \"private\" {\n  name = \"private\"\n}",
            ),
        ];

        let nodes = create_diagram_nodes(&resources);

        // Default container nodes are always present
        assert!(nodes.iter().any(|n| n.id == "aws-cloud"));
        assert!(nodes.iter().any(|n| n.id == "region"));

        let vpc_node = nodes.iter().find(|n| n.id == "aws_vpc-main").unwrap();
        assert_eq!(vpc_node.parent.as_deref(), Some("region"));
        assert_eq!(vpc_node.label, "VPC: main");
        assert_eq!(vpc_node.identifier.as_deref(), Some("aws_vpc.main"));

        let subnet_node = nodes.iter().find(|n| n.id == "aws_subnet-private").unwrap();
        assert_eq!(subnet_node.parent.as_deref(), Some("vpc"));
        assert_eq!(subnet_node.label, "Subnet: private");
    }

    #[test]
    fn test_resource_label_fallback_title_cases_unknown_types() {
        assert_eq!(
            resource_label("aws_nat_gateway", "egress"),
            "Nat Gateway: egress"
        );
        assert_eq!(resource_label("aws_vpc", "main"), "VPC: main");
    }

    #[test]
    fn test_resource_parent_mapping() {
        assert_eq!(resource_parent("aws_vpc"), Some("region"));
        assert_eq!(resource_parent("aws_subnet"), Some("vpc"));
        assert_eq!(resource_parent("aws_cloudfront_distribution"), None);
        assert_eq!(resource_parent("aws_unknown_thing"), None);
    }

    #[test]
    fn test_create_edges_from_block() {
        let block = ResourceBlock {
            resource_type: "aws_iam_role_policy_attachment".to_string(),
            name: "ecs_task_execution_role_policy".to_string(),
            identifier: "aws_iam_role_policy_attachment.ecs_task_execution_role_policy"
                .to_string(),
            content: r#"resource "aws_iam_role_policy_attachment" "ecs_task_execution_role_policy" {
  role       = aws_iam_role.ecs_task_execution_role.name
  policy_arn = aws_ecs_cluster.cluster.id
}"#
            .to_string(),
        };

        let edges = create_edges_from_block(&block);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source, block.identifier);
        assert_eq!(edges[0].target, "aws_iam_role.ecs_task_execution_role");
        assert_eq!(edges[1].source, block.identifier);
        assert_eq!(edges[1].target, "aws_ecs_cluster.cluster");
    }

    #[test]
    fn test_edges_exclude_self_references() {
        let block = resource(
            "aws_subnet",
            "private",
            "resource \"aws_subnet\" \"private\" {\n  vpc_id = aws_vpc.main.id\n  tag = aws_subnet.private.id\n}",
        );

        let edges = create_edges_from_block(&block);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "aws_vpc.main");
    }
}
