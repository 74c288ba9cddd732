//! Sports fixtures as binary trees: library with the match model and tree algorithms.

pub mod logic;
pub mod models;

pub use logic::{
    count_nodes, find_match, find_match_mut, height, inorder, postorder, preorder, print_fixture,
    render_fixture,
};
pub use models::{
    create_match, record_winner, set_children, Fixture, FixtureError, FixtureStats, MatchNode,
    MatchTree, WINNER_SEPARATOR,
};
