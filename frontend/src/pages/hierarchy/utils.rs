use crate::api::HierarchyNode;
use std::collections::BTreeMap;

pub const STUDENT_NODE: &str = "STUDENT";

/// One line of the indented organisation chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub depth: usize,
    pub child_count: usize,
    pub highlighted: bool,
}

/// Depth-first rows for display. Student nodes (and everything below them)
/// are skipped unless `include_students` is set; `highlight_id` marks the
/// viewer's own node.
pub fn flatten(
    root: &HierarchyNode,
    include_students: bool,
    highlight_id: Option<&str>,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(root, 0, include_students, highlight_id, &mut rows);
    rows
}

fn push_rows(
    node: &HierarchyNode,
    depth: usize,
    include_students: bool,
    highlight_id: Option<&str>,
    rows: &mut Vec<TreeRow>,
) {
    let visible = |n: &HierarchyNode| include_students || n.node_type != STUDENT_NODE;
    if !visible(node) {
        return;
    }
    rows.push(TreeRow {
        id: node.id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        depth,
        child_count: node.children.iter().filter(|&child| visible(child)).count(),
        highlighted: highlight_id == Some(node.id.as_str()),
    });
    for child in &node.children {
        push_rows(child, depth + 1, include_students, highlight_id, rows);
    }
}

pub fn count_by_type(root: &HierarchyNode) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        *counts.entry(node.node_type.clone()).or_insert(0) += 1;
        stack.extend(node.children.iter());
    }
    counts
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn node(id: &str, node_type: &str, children: Vec<HierarchyNode>) -> HierarchyNode {
        HierarchyNode {
            id: id.into(),
            name: format!("{node_type} {id}"),
            node_type: node_type.into(),
            children,
        }
    }

    pub(crate) fn sample_tree() -> HierarchyNode {
        node(
            "d1",
            "DEPARTMENT",
            vec![
                node(
                    "c1",
                    "CLASS",
                    vec![
                        node("t1", "TEACHER", vec![]),
                        node("s1", "STUDENT", vec![]),
                        node("s2", "STUDENT", vec![]),
                    ],
                ),
                node("c2", "CLASS", vec![node("t2", "TEACHER", vec![])]),
            ],
        )
    }

    #[test]
    fn flatten_is_depth_first_and_hides_students() {
        let rows = flatten(&sample_tree(), false, Some("t2"));
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "c1", "t1", "c2", "t2"]);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[1].child_count, 1);
        assert!(rows[4].highlighted);
        assert!(!rows[2].highlighted);
    }

    #[test]
    fn flatten_can_include_students() {
        let rows = flatten(&sample_tree(), true, None);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1].child_count, 3);
    }

    #[test]
    fn counts_every_node_type() {
        let counts = count_by_type(&sample_tree());
        assert_eq!(counts.get("DEPARTMENT"), Some(&1));
        assert_eq!(counts.get("CLASS"), Some(&2));
        assert_eq!(counts.get("TEACHER"), Some(&2));
        assert_eq!(counts.get("STUDENT"), Some(&2));
    }
}
