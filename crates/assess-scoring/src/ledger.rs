//! Last-write-wins response ledger.
//!
//! Holds at most one effective response per question. Later writes for a
//! question replace earlier ones, matching the upsert semantics of the
//! store that persists raw answers.

use assess_core::Response;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawLedger")]
pub struct ResponseLedger {
    /// Effective responses in first-answered order
    entries: Vec<Response>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct RawLedger {
    entries: Vec<Response>,
}

// Stored entries are replayed, so duplicates collapse last-write-wins
impl From<RawLedger> for ResponseLedger {
    fn from(raw: RawLedger) -> Self {
        raw.entries.into_iter().collect()
    }
}

impl ResponseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the response for its question.
    /// Returns the replaced response, if any.
    pub fn upsert(&mut self, response: Response) -> Option<Response> {
        match self.positions.get(&response.question_id) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i], response)),
            None => {
                self.positions.insert(response.question_id.clone(), self.entries.len());
                self.entries.push(response);
                None
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = Response>>(&mut self, responses: I) {
        for response in responses {
            self.upsert(response);
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.positions.get(question_id).map(|&i| &self.entries[i])
    }

    pub fn responses(&self) -> &[Response] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Response> for ResponseLedger {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut ledger = ResponseLedger::new();
        ledger.extend(iter);
        ledger
    }
}
