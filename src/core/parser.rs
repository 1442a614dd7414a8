use crate::domain::model::ResourceBlock;
use regex::Regex;
use std::collections::HashSet;

/// Extracts every top-level `resource "<type>" "<label>" { ... }` block.
///
/// The block's `name` is taken from its `name = "..."` attribute when
/// present, falling back to the block label; the identifier is always
/// `<type>.<label>`.
pub fn extract_resource_blocks(content: &str) -> Vec<ResourceBlock> {
    let header = Regex::new(r#"(?m)^\s*resource\s+"([^"]+)"\s+"([^"]+)"\s*\{"#).unwrap();
    let name_attr = Regex::new(r#"(?m)^\s*name\s*=\s*"([^"]*)""#).unwrap();

    let mut blocks = Vec::new();

    for caps in header.captures_iter(content) {
        let full = caps.get(0).unwrap();
        let resource_type = caps[1].to_string();
        let label = caps[2].to_string();

        // full.end() is just past the opening brace
        let Some(body_end) = find_block_end(content, full.end()) else {
            tracing::warn!(
                "Unterminated resource block: {}.{}",
                resource_type,
                label
            );
            continue;
        };

        let block_content = &content[full.start()..body_end];
        let name = name_attr
            .captures(block_content)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| label.clone());

        blocks.push(ResourceBlock {
            identifier: format!("{}.{}", resource_type, label),
            resource_type,
            name,
            content: block_content.to_string(),
        });
    }

    blocks
}

/// Returns the byte offset just past the brace that closes the block
/// whose opening brace ends at `after_open`. Braces inside quoted
/// strings do not count.
fn find_block_end(content: &str, after_open: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in content[after_open..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(after_open + offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Finds `<aws_type>.<name>` interpolation references, e.g.
/// `aws_iam_role.ecs_task_execution_role.name` yields
/// `aws_iam_role.ecs_task_execution_role`. Deduplicated, first-seen order.
pub fn extract_resource_references(content: &str) -> Vec<String> {
    let reference = Regex::new(r"\b(aws_[a-z0-9_]+\.[A-Za-z_][A-Za-z0-9_-]*)").unwrap();

    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for caps in reference.captures_iter(content) {
        let identifier = caps[1].to_string();
        if seen.insert(identifier.clone()) {
            references.push(identifier);
        }
    }

    references
}
