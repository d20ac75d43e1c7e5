//! Scoring engine facade over the per-category registries.

use assess_core::{Category, Error, Profile, Response, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::profile_builder::ProfileBuilder;
use crate::registry::QuestionRegistry;
use crate::team::{classify_team, TeamLens};

/// How much of a category's question set a respondent has answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }

    /// Fraction answered, 0-100
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered.min(self.total) * 100) / self.total) as u8
    }
}

/// Holds one registry per category. Immutable after construction and safe
/// to share across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    registries: BTreeMap<Category, QuestionRegistry>,
}

impl ScoringEngine {
    /// Engine backed by the shipped registries
    pub fn builtin() -> Self {
        Self {
            registries: Category::ALL
                .iter()
                .map(|c| (*c, QuestionRegistry::builtin(*c)))
                .collect(),
        }
    }

    /// Replace the registry for its category
    pub fn with_registry(mut self, registry: QuestionRegistry) -> Self {
        tracing::info!(
            category = %registry.category(),
            questions = registry.len(),
            "installed question registry"
        );
        self.registries.insert(registry.category(), registry);
        self
    }

    pub fn registry(&self, category: Category) -> Result<&QuestionRegistry> {
        self.registries
            .get(&category)
            .ok_or_else(|| Error::Configuration(format!("no question registry for {category}")))
    }

    /// Score one respondent's responses for a category
    pub fn score_category(&self, category: Category, responses: &[Response]) -> Result<Profile> {
        let registry = self.registry(category)?;
        let profile = ProfileBuilder::new(registry).build(responses)?;
        tracing::debug!(
            %category,
            responses = responses.len(),
            empty_dimensions = profile.empty_dimensions().len(),
            "scored category"
        );
        Ok(profile)
    }

    /// Team lens for the profiles of a team's completed members
    pub fn classify_team(&self, category: Category, profiles: &[Profile]) -> Result<TeamLens> {
        classify_team(category, profiles)
    }

    /// Count distinct answered questions. Unknown question ids are
    /// configuration errors here as well, so completion never disagrees
    /// with scoring about what counts.
    pub fn completion(&self, category: Category, responses: &[Response]) -> Result<Completion> {
        let registry = self.registry(category)?;
        let mut seen = HashSet::new();
        for response in responses {
            let question = registry.require(&response.question_id)?;
            seen.insert(question.id.as_str());
        }
        Ok(Completion {
            answered: seen.len(),
            total: registry.len(),
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::{Band, Dimension};

    fn all_answers(engine: &ScoringEngine, category: Category, value: i64) -> Vec<Response> {
        engine
            .registry(category)
            .unwrap()
            .questions()
            .iter()
            .map(|q| Response::new(q.id.clone(), value))
            .collect()
    }

    #[test]
    fn test_score_category_twice_is_identical() {
        let engine = ScoringEngine::builtin();
        let responses = all_answers(&engine, Category::Culture, 5);
        let first = engine.score_category(Category::Culture, &responses).unwrap();
        let second = engine.score_category(Category::Culture, &responses).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_neutral_answers_read_balanced() {
        let engine = ScoringEngine::builtin();
        // Midpoint 3 on a 5-point scale mirrors to itself → 60
        let responses = all_answers(&engine, Category::Values, 3);
        let profile = engine.score_category(Category::Values, &responses).unwrap();
        assert!(profile.scores().iter().all(|s| s.value == 60));
        assert!(profile.bands().iter().all(|(_, b)| *b == Band::Balanced));
    }

    #[test]
    fn test_completion() {
        let engine = ScoringEngine::builtin();
        let mut responses = all_answers(&engine, Category::Ocean, 4);
        let full = engine.completion(Category::Ocean, &responses).unwrap();
        assert!(full.is_complete());
        assert_eq!(full.percent(), 100);

        responses.truncate(5);
        responses.push(Response::new("O1", 2));
        let partial = engine.completion(Category::Ocean, &responses).unwrap();
        assert_eq!(partial.answered, 5);
        assert_eq!(partial.percent(), 25);
        assert!(!partial.is_complete());

        assert!(engine
            .completion(Category::Ocean, &[Response::new("INN1", 3)])
            .is_err());
    }

    #[test]
    fn test_score_category_rejects_overwritten_invalid_answer() {
        let engine = ScoringEngine::builtin();
        let responses = vec![Response::new("O1", -5), Response::new("O1", 3)];
        let err = engine.score_category(Category::Ocean, &responses).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_with_registry_replaces_category() {
        let questions = Category::Values
            .dimensions()
            .iter()
            .enumerate()
            .map(|(i, d)| crate::registry::Question::new(format!("V{i}"), *d, false, 7))
            .collect();
        let registry = QuestionRegistry::new(Category::Values, questions).unwrap();
        let engine = ScoringEngine::builtin().with_registry(registry);

        let profile = engine
            .score_category(Category::Values, &[Response::new("V0", 7)])
            .unwrap();
        assert_eq!(profile.score(Dimension::Innovation), Some(100));
        assert!(engine
            .score_category(Category::Values, &[Response::new("INN1", 3)])
            .is_err());
    }
}
