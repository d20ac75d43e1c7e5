//! Dimension aggregation: adjusted responses → 0-100 dimension scores.

use assess_core::{Dimension, DimensionScore, Response, Result, MAX_SCORE};
use std::collections::HashMap;

use crate::ledger::ResponseLedger;
use crate::normalizer::normalize_response;
use crate::registry::QuestionRegistry;

/// Mean of `count` adjusted values summing to `sum`, rescaled to 0-100:
/// `round(sum / count / scale_max × 100)`, halves rounded up.
/// Computed in integers so equal inputs always give equal scores.
pub fn percent_of_scale(sum: u64, count: u64, scale_max: u8) -> u8 {
    if count == 0 || scale_max == 0 {
        return 0;
    }
    let denominator = count * u64::from(scale_max);
    let rounded = (200 * sum + denominator) / (2 * denominator);
    rounded.min(u64::from(MAX_SCORE)) as u8
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    sum: u64,
    count: u64,
    scale_max: u8,
}

/// Score every dimension of the registry's category.
///
/// Any response that is out of range or references an unknown question
/// fails the whole call, including answers later overwritten in the same
/// batch; no partial result is produced. Duplicate answers to one question
/// then resolve last-write-wins. Dimensions without responses score 0 with
/// `answered == 0`.
pub fn aggregate(responses: &[Response], registry: &QuestionRegistry) -> Result<Vec<DimensionScore>> {
    for response in responses {
        normalize_response(response, registry)?;
    }
    let ledger: ResponseLedger = responses.iter().cloned().collect();

    let mut tallies: HashMap<Dimension, Tally> = HashMap::new();
    for response in ledger.responses() {
        let adjusted = normalize_response(response, registry)?;
        let tally = tallies.entry(adjusted.dimension).or_default();
        tally.sum += u64::from(adjusted.value);
        tally.count += 1;
        tally.scale_max = adjusted.scale_max;
    }

    let scores = registry
        .category()
        .dimensions()
        .iter()
        .map(|&dimension| match tallies.get(&dimension) {
            Some(t) => DimensionScore {
                dimension,
                value: percent_of_scale(t.sum, t.count, t.scale_max),
                answered: t.count as usize,
            },
            None => {
                tracing::debug!(%dimension, "no responses for dimension, defaulting score to 0");
                DimensionScore::unanswered(dimension)
            }
        })
        .collect();

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::{Category, Error};

    use crate::registry::Question;

    fn openness_registry() -> QuestionRegistry {
        let mut questions = vec![
            Question::new("R1", Dimension::Openness, true, 5),
            Question::new("R2", Dimension::Openness, true, 5),
            Question::new("F1", Dimension::Openness, false, 5),
            Question::new("F2", Dimension::Openness, false, 5),
        ];
        for (i, d) in Category::Ocean.dimensions().iter().enumerate().skip(1) {
            questions.push(Question::new(format!("X{i}"), *d, false, 5));
        }
        QuestionRegistry::new(Category::Ocean, questions).unwrap()
    }

    #[test]
    fn test_mixed_reverse_items_scenario() {
        // Reverse 2 → 4, reverse 4 → 2, forward 3 and 5: mean 3.5 → 70
        let responses = vec![
            Response::new("R1", 2),
            Response::new("R2", 4),
            Response::new("F1", 3),
            Response::new("F2", 5),
        ];
        let scores = aggregate(&responses, &openness_registry()).unwrap();
        let openness = scores[0];
        assert_eq!(openness.dimension, Dimension::Openness);
        assert_eq!(openness.value, 70);
        assert_eq!(openness.answered, 4);
        assert_eq!(openness.band(), assess_core::Band::Higher);
    }

    #[test]
    fn test_covers_every_dimension() {
        let responses = vec![Response::new("F1", 5)];
        let scores = aggregate(&responses, &openness_registry()).unwrap();
        assert_eq!(scores.len(), 5);
        assert_eq!(scores[0].value, 100);
        assert!(scores[1..].iter().all(|s| s.value == 0 && s.answered == 0));
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_of_scale(14, 4, 5), 70);
        assert_eq!(percent_of_scale(1, 1, 5), 20);
        assert_eq!(percent_of_scale(7, 1, 7), 100);
        // 10 / 3 / 7 = 47.619 → 48
        assert_eq!(percent_of_scale(10, 3, 7), 48);
        // 9 / 4 / 5 = 45.0 exactly
        assert_eq!(percent_of_scale(9, 4, 5), 45);
        // 13 / 8 / 5 = 32.5 → 33
        assert_eq!(percent_of_scale(13, 8, 5), 33);
        assert_eq!(percent_of_scale(0, 0, 5), 0);
    }

    #[test]
    fn test_duplicates_resolve_to_last_write() {
        let responses = vec![Response::new("F1", 1), Response::new("F1", 5)];
        let scores = aggregate(&responses, &openness_registry()).unwrap();
        assert_eq!(scores[0].value, 100);
        assert_eq!(scores[0].answered, 1);
    }

    #[test]
    fn test_overwritten_invalid_answer_still_rejected() {
        let registry = QuestionRegistry::builtin(Category::Ocean);
        let err = aggregate(&[Response::new("O1", 99), Response::new("O1", 3)], &registry).unwrap_err();
        assert!(matches!(err, Error::Validation { value: 99, .. }));

        let err = aggregate(&[Response::new("O1", -5), Response::new("O1", 3)], &registry).unwrap_err();
        assert!(err.is_validation());

        let err = aggregate(&[Response::new("ZZ1", 3), Response::new("O1", 3)], &registry).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_input_fails_whole_call() {
        let registry = openness_registry();
        let err = aggregate(&[Response::new("F1", 3), Response::new("F2", 6)], &registry).unwrap_err();
        assert!(matches!(err, Error::Validation { value: 6, scale_max: 5, .. }));

        let err = aggregate(&[Response::new("nope", 3)], &registry).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_seven_point_scale() {
        let registry = QuestionRegistry::builtin(Category::Culture);
        // PD1 = 7, PD2 = 7, PD3 (reverse) = 1 → 7 → 100
        let responses = vec![
            Response::new("PD1", 7),
            Response::new("PD2", 7),
            Response::new("PD3", 1),
        ];
        let scores = aggregate(&responses, &registry).unwrap();
        assert_eq!(scores[0].dimension, Dimension::PowerDistance);
        assert_eq!(scores[0].value, 100);
    }
}
