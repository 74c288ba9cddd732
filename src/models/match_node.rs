//! MatchNode: one match of the bracket and the two feeder matches below it.

use serde::{Deserialize, Serialize};

/// Text inserted between a match label and the name of its winner.
pub const WINNER_SEPARATOR: &str = " → Ganador: ";

/// A child slot of the bracket. `None` means "no match here" (a bye, or a first-round match).
pub type MatchTree = Option<Box<MatchNode>>;

/// A single match. Its children are the feeder matches whose winners meet here.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchNode {
    /// Display text: teams or round name, plus any winner annotations.
    pub label: String,
    /// Feeder match rendered below this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: MatchTree,
    /// Feeder match rendered above this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: MatchTree,
}

impl MatchNode {
    /// Create a match with no feeder matches.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: None,
        }
    }

    /// Replace both feeder matches. Previous children are dropped, never merged.
    ///
    /// The subtrees are moved in, so they cannot already be reachable from `self`.
    pub fn set_children(&mut self, left: Option<MatchNode>, right: Option<MatchNode>) {
        log::debug!("assigning feeder matches to {:?}", self.label);
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
    }

    /// Append the winner annotation to the label. Calling twice appends twice.
    pub fn record_winner(&mut self, winner: &str) {
        log::debug!("recording winner {:?} for {:?}", winner, self.label);
        self.label = format!("{}{}{}", self.label, WINNER_SEPARATOR, winner);
    }

    pub fn left(&self) -> Option<&MatchNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MatchNode> {
        self.right.as_deref()
    }

    /// True when neither feeder match is present.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Free-function form of [`MatchNode::new`].
pub fn create_match(label: impl Into<String>) -> MatchNode {
    MatchNode::new(label)
}

/// Free-function form of [`MatchNode::set_children`].
pub fn set_children(node: &mut MatchNode, left: Option<MatchNode>, right: Option<MatchNode>) {
    node.set_children(left, right);
}

/// Free-function form of [`MatchNode::record_winner`].
pub fn record_winner(node: &mut MatchNode, winner: &str) {
    node.record_winner(winner);
}
