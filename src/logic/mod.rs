//! Recursive bracket algorithms: traversals, queries, rendering.

mod printer;
mod query;
mod traversal;

pub use printer::{print_fixture, render_fixture};
pub use query::{count_nodes, find_match, find_match_mut, height};
pub use traversal::{inorder, postorder, preorder};
