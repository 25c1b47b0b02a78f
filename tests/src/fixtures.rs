//! # Test Fixtures
//!
//! Tree shapes used by the flow tests and the layout benchmarks.

use rand::Rng;
use serde_json::{json, Value};
use shared_types::TreeNode;

/// `S(NP, VP(V))`.
pub fn sentence() -> TreeNode {
    TreeNode::with_children(
        "S",
        vec![
            TreeNode::leaf("NP"),
            TreeNode::with_children("VP", vec![TreeNode::leaf("V")]),
        ],
    )
}

/// Complete tree where every inner node has `fanout` children.
pub fn balanced(depth: usize, fanout: usize) -> TreeNode {
    fn build(prefix: String, depth: usize, fanout: usize) -> TreeNode {
        if depth == 0 {
            return TreeNode::leaf(prefix);
        }
        let children = (0..fanout)
            .map(|i| build(format!("{prefix}.{i}"), depth - 1, fanout))
            .collect();
        TreeNode::with_children(prefix, children)
    }
    build("n".to_string(), depth, fanout)
}

/// A single path of `length` nodes, built bottom-up.
pub fn chain(length: usize) -> TreeNode {
    let mut node = TreeNode::leaf(format!("n{}", length.saturating_sub(1)));
    for i in (0..length.saturating_sub(1)).rev() {
        node = TreeNode::with_children(format!("n{i}"), vec![node]);
    }
    node
}

/// Random recursive tree with `size` nodes: node `i` hangs under a uniformly
/// chosen earlier node.
pub fn random_tree(rng: &mut impl Rng, size: usize) -> TreeNode {
    let size = size.max(1);
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); size];
    for i in 1..size {
        let parent = rng.gen_range(0..i);
        children[parent].push(i);
    }

    // Assemble from the highest index down; every child index is greater
    // than its parent's, so children are always built first.
    let mut built: Vec<Option<TreeNode>> = (0..size).map(|_| None).collect();
    for i in (0..size).rev() {
        let kids = children[i]
            .iter()
            .filter_map(|&c| built[c].take())
            .collect();
        built[i] = Some(TreeNode::with_children(format!("n{i}"), kids));
    }
    built[0].take().unwrap_or_else(|| TreeNode::leaf("n0"))
}

/// JSON node object in the server's format (`children: null` for leaves).
pub fn wire_node(node: &TreeNode) -> Value {
    let children = if node.children.is_empty() {
        Value::Null
    } else {
        Value::Array(node.children.iter().map(wire_node).collect())
    };
    json!({"name": node.name, "children": children})
}

/// Server response body carrying `tree` inside an sltag envelope.
pub fn answer_json(question: &str, answer: &str, tree: Option<&TreeNode>) -> Value {
    let sltag = match tree {
        Some(tree) => json!({"syntax": [wire_node(tree)], "semantics": null}),
        None => Value::Null,
    };
    json!({
        "question": question,
        "answer": answer,
        "query": format!("SELECT ?x WHERE {{ ?x ?p \"{answer}\" }}"),
        "sltag": sltag,
        "responseTime": 5
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shapes() {
        assert_eq!(sentence().node_count(), 4);
        assert_eq!(balanced(3, 2).node_count(), 15);
        assert_eq!(chain(50).max_depth(), 49);
        assert_eq!(chain(1).node_count(), 1);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_tree(&mut rng, 500).node_count(), 500);
    }

    #[test]
    fn test_wire_node_leaves_are_null() {
        let value = wire_node(&sentence());
        assert_eq!(value["children"][0]["children"], Value::Null);
        assert_eq!(value["children"][1]["name"], "VP");
    }
}
