//! FixtureError.

/// Errors that can occur during fixture operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError {
    /// No match label contains the query.
    MatchNotFound(String),
    /// The fixture could not be converted to or from JSON.
    Json(String),
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::MatchNotFound(query) => write!(f, "No match found for {:?}", query),
            FixtureError::Json(msg) => write!(f, "Invalid fixture JSON: {}", msg),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Json(err.to_string())
    }
}
