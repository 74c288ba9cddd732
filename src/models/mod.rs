//! Data structures for the fixture: match nodes, the bracket, errors.

mod error;
mod fixture;
mod match_node;

pub use error::FixtureError;
pub use fixture::{Fixture, FixtureStats};
pub use match_node::{
    create_match, record_winner, set_children, MatchNode, MatchTree, WINNER_SEPARATOR,
};
