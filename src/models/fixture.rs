//! Fixture and FixtureStats.

use crate::logic::{count_nodes, find_match, find_match_mut, height};
use crate::models::error::FixtureError;
use crate::models::match_node::{MatchNode, MatchTree};
use serde::{Deserialize, Serialize};

/// Statistics view of a fixture (for display / export).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixtureStats {
    /// Number of rounds on the longest path to the final.
    pub height: usize,
    /// Total number of matches.
    pub matches: usize,
}

/// A named bracket. The root match is the final.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub root: MatchTree,
}

impl Fixture {
    pub fn new(name: impl Into<String>, root: Option<MatchNode>) -> Self {
        Self {
            name: name.into(),
            root: root.map(Box::new),
        }
    }

    /// The final, if the fixture has any match at all.
    pub fn root(&self) -> Option<&MatchNode> {
        self.root.as_deref()
    }

    pub fn height(&self) -> usize {
        height(self.root())
    }

    pub fn count_matches(&self) -> usize {
        count_nodes(self.root())
    }

    /// First match in preorder whose label contains `query`.
    pub fn find_match(&self, query: &str) -> Option<&MatchNode> {
        find_match(self.root(), query)
    }

    /// Look up a match by label and record its winner.
    pub fn advance_winner(&mut self, query: &str, winner: &str) -> Result<(), FixtureError> {
        let node = find_match_mut(self.root.as_deref_mut(), query)
            .ok_or_else(|| FixtureError::MatchNotFound(query.to_string()))?;
        node.record_winner(winner);
        log::debug!("fixture {:?}: {:?} advanced", self.name, winner);
        Ok(())
    }

    pub fn stats(&self) -> FixtureStats {
        FixtureStats {
            height: self.height(),
            matches: self.count_matches(),
        }
    }

    /// Pretty-printed JSON of the whole bracket.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }
}
