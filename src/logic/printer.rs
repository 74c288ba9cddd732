//! Sideways bracket rendering: right subtree above, left subtree below.

use crate::models::MatchNode;
use std::fmt::Write;

const INDENT: &str = "    ";
const UPPER_BRANCH: &str = "┌── ";
const LOWER_BRANCH: &str = "└── ";

/// Render the tree rotated 90°, one line per match. The root line has no marker.
pub fn render_fixture(tree: Option<&MatchNode>) -> String {
    let mut out = String::new();
    render_into(&mut out, tree, 0, "");
    out
}

/// Print [`render_fixture`] to stdout.
pub fn print_fixture(tree: Option<&MatchNode>) {
    print!("{}", render_fixture(tree));
}

fn render_into(out: &mut String, tree: Option<&MatchNode>, level: usize, prefix: &str) {
    let Some(node) = tree else {
        return;
    };
    render_into(out, node.right(), level + 1, UPPER_BRANCH);
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}{}{}", INDENT.repeat(level), prefix, node.label);
    render_into(out, node.left(), level + 1, LOWER_BRANCH);
}

impl std::fmt::Display for MatchNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_fixture(Some(self)))
    }
}
