//! Response normalization: range checking and reverse scoring.

use assess_core::{Dimension, Error, Response, Result};

use crate::registry::{Question, QuestionRegistry};

/// A response after scale adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustedResponse {
    pub dimension: Dimension,
    /// Adjusted value on `1..=scale_max`
    pub value: u8,
    pub scale_max: u8,
}

/// Adjust a raw value for its question.
///
/// Reverse-scored items are mirrored on the question's own scale, so on a
/// 7-point item 1↔7, 2↔6, 3↔5 and 4 stays 4. Values outside
/// `1..=scale_max` are rejected, never clamped.
pub fn normalize(value: i64, question: &Question) -> Result<u8> {
    if value < 1 || value > i64::from(question.scale_max) {
        return Err(Error::Validation {
            question_id: question.id.clone(),
            value,
            scale_max: question.scale_max,
        });
    }
    // Range checked above, fits in u8
    let value = value as u8;

    if question.reverse_scored {
        Ok(question.scale_max + 1 - value)
    } else {
        Ok(value)
    }
}

/// Resolve a response against the registry and adjust it
pub fn normalize_response(response: &Response, registry: &QuestionRegistry) -> Result<AdjustedResponse> {
    let question = registry.require(&response.question_id)?;
    Ok(AdjustedResponse {
        dimension: question.dimension,
        value: normalize(response.value, question)?,
        scale_max: question.scale_max,
    })
}
