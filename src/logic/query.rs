//! Structural queries: height, node count, and label search.

use crate::models::MatchNode;

/// Empty tree is 0; otherwise 1 + the taller subtree.
pub fn height(tree: Option<&MatchNode>) -> usize {
    match tree {
        None => 0,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

/// Number of matches in the tree.
pub fn count_nodes(tree: Option<&MatchNode>) -> usize {
    match tree {
        None => 0,
        Some(node) => 1 + count_nodes(node.left()) + count_nodes(node.right()),
    }
}

/// First node in preorder whose label contains `query` (case-sensitive).
/// Later matches are ignored.
pub fn find_match<'a>(tree: Option<&'a MatchNode>, query: &str) -> Option<&'a MatchNode> {
    let node = tree?;
    if node.label.contains(query) {
        return Some(node);
    }
    find_match(node.left(), query).or_else(|| find_match(node.right(), query))
}

/// Same search as [`find_match`], but hands back a mutable reference into the tree
/// so the caller can record a winner in place.
pub fn find_match_mut<'a>(
    tree: Option<&'a mut MatchNode>,
    query: &str,
) -> Option<&'a mut MatchNode> {
    let node = tree?;
    if node.label.contains(query) {
        return Some(node);
    }
    let MatchNode { left, right, .. } = node;
    find_match_mut(left.as_deref_mut(), query)
        .or_else(|| find_match_mut(right.as_deref_mut(), query))
}
