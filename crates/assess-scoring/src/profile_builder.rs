//! Profile builder: aggregation plus band classification for one category.

use assess_core::{Profile, Response, Result};

use crate::aggregator::aggregate;
use crate::registry::QuestionRegistry;

/// Builds profiles against a fixed registry. Holds no state besides the
/// registry reference, so building is idempotent and side-effect free.
#[derive(Debug, Clone, Copy)]
pub struct ProfileBuilder<'a> {
    registry: &'a QuestionRegistry,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(registry: &'a QuestionRegistry) -> Self {
        Self { registry }
    }

    pub fn build(&self, responses: &[Response]) -> Result<Profile> {
        let scores = aggregate(responses, self.registry)?;
        Profile::new(self.registry.category(), scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::{Band, Category, Dimension};

    #[test]
    fn test_build_is_idempotent() {
        let registry = QuestionRegistry::builtin(Category::Ocean);
        let builder = ProfileBuilder::new(&registry);
        let responses: Vec<_> = registry
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| Response::new(q.id.clone(), (i % 5) as i64 + 1))
            .collect();

        let first = builder.build(&responses).unwrap();
        let second = builder.build(&responses).unwrap();
        assert_eq!(first, second);
        assert!(first.empty_dimensions().is_empty());
    }

    #[test]
    fn test_no_responses_gives_zero_profile() {
        let registry = QuestionRegistry::builtin(Category::Values);
        let profile = ProfileBuilder::new(&registry).build(&[]).unwrap();
        assert_eq!(profile.scores().len(), 5);
        assert!(profile.scores().iter().all(|s| s.value == 0));
        assert!(profile.bands().iter().all(|(_, b)| *b == Band::Lower));
    }

    #[test]
    fn test_partial_profile() {
        let registry = QuestionRegistry::builtin(Category::Ocean);
        let responses = vec![
            Response::new("C1", 5),
            Response::new("C2", 1),
            Response::new("C3", 4),
            Response::new("C4", 2),
        ];
        let profile = ProfileBuilder::new(&registry).build(&responses).unwrap();
        // 5, 5, 4, 4 → 4.5 / 5 → 90
        assert_eq!(profile.score(Dimension::Conscientiousness), Some(90));
        assert_eq!(profile.band(Dimension::Conscientiousness), Some(Band::Higher));
        assert_eq!(profile.empty_dimensions().len(), 4);
    }
}
