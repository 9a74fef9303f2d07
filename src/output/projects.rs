use comfy_table::{Cell, Color};

use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::project::{ProjectNode, ProjectTree, ancestors, roots};

/// Nodes depth-first from the roots, with their depth. A child is visited
/// under its own parent only, even when further ancestors list it too.
fn walk(tree: &ProjectTree) -> Vec<(usize, &ProjectNode)> {
    fn visit<'a>(
        tree: &'a ProjectTree,
        node: &'a ProjectNode,
        depth: usize,
        out: &mut Vec<(usize, &'a ProjectNode)>,
    ) {
        if out.iter().any(|(_, seen)| seen.id == node.id) {
            return;
        }
        out.push((depth, node));
        for child in &node.children {
            if let Some(child_node) = tree.get(child)
                && child_node.parent.as_deref() == Some(node.id.as_str())
            {
                visit(tree, child_node, depth + 1, out);
            }
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    for root in roots(tree) {
        if let Some(node) = tree.get(root) {
            visit(tree, node, 0, &mut out);
        }
    }
    out
}

pub(crate) fn print_project_table(tree: &ProjectTree, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Project", use_color),
        header_cell("Parent", use_color),
        header_cell("Path", use_color),
    ]);

    let root_color = if use_color { Some(Color::Green) } else { None };
    for (depth, node) in walk(tree) {
        let label = format!("{}{}", "  ".repeat(depth), node.id);
        let color = if depth == 0 { root_color } else { None };
        table.add_row(vec![
            styled_cell(&label, color),
            Cell::new(node.parent.as_deref().unwrap_or_default()),
            Cell::new(node.path.display()),
        ]);
    }

    println!("{table}");
}

pub(crate) fn output_project_json(tree: &ProjectTree) -> String {
    let output: serde_json::Map<String, serde_json::Value> = tree
        .values()
        .map(|node| {
            let value = serde_json::json!({
                "path": node.path.to_string_lossy(),
                "parent": node.parent,
                "children": node.children,
                "ancestors": ancestors(tree, &node.id),
            });
            (node.id.clone(), value)
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
