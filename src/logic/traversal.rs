//! Depth-first traversals. Each call returns a fresh list of labels.

use crate::models::MatchNode;

/// Node, then left subtree, then right subtree.
pub fn preorder(tree: Option<&MatchNode>) -> Vec<String> {
    let Some(node) = tree else {
        return Vec::new();
    };
    let mut labels = vec![node.label.clone()];
    labels.extend(preorder(node.left()));
    labels.extend(preorder(node.right()));
    labels
}

/// Left subtree, then node, then right subtree.
pub fn inorder(tree: Option<&MatchNode>) -> Vec<String> {
    let Some(node) = tree else {
        return Vec::new();
    };
    let mut labels = inorder(node.left());
    labels.push(node.label.clone());
    labels.extend(inorder(node.right()));
    labels
}

/// Left subtree, then right subtree, then node.
pub fn postorder(tree: Option<&MatchNode>) -> Vec<String> {
    let Some(node) = tree else {
        return Vec::new();
    };
    let mut labels = postorder(node.left());
    labels.extend(postorder(node.right()));
    labels.push(node.label.clone());
    labels
}
