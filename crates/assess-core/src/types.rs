//! Identifiers shared across the engine and its collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a respondent (anonymous or signed-in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RespondentId(pub Uuid);

impl RespondentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RespondentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RespondentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Short shareable code identifying a team
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(pub String);

impl TeamCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single answer to a Likert question
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    /// Raw value as submitted; range is checked against the question's scale
    pub value: i64,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: i64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let response: Response = serde_json::from_str(r#"{"questionId":"O1","value":4}"#).unwrap();
        assert_eq!(response, Response::new("O1", 4));
    }

    #[test]
    fn test_team_code_is_transparent() {
        let code = TeamCode("K7P2QX".to_string());
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""K7P2QX""#);
    }
}
