//! Team aggregation: member profiles → team lens via per-dimension median.

use assess_core::{strengths, style_label, watch_outs, Band, Category, Dimension, Error, Profile, Result};
use serde::{Deserialize, Serialize};

/// Maximum strengths and watch-outs listed on a team lens
pub const MAX_TEAM_HIGHLIGHTS: usize = 4;

/// Phrases contributed per dimension to strengths and watch-outs
pub const HIGHLIGHTS_PER_DIMENSION: usize = 2;

/// Team reading of one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDimension {
    pub dimension: Dimension,
    pub band: Band,
    pub style_label: String,
    /// Median member score; `None` when the team has no completed members
    pub median_score: Option<u8>,
}

/// Team-level view of a category. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLens {
    pub category: Category,
    pub member_count: usize,
    pub dimensions: Vec<TeamDimension>,
    pub strengths: Vec<String>,
    pub watch_outs: Vec<String>,
}

impl TeamLens {
    pub fn get(&self, dimension: Dimension) -> Option<&TeamDimension> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    pub fn band(&self, dimension: Dimension) -> Option<Band> {
        self.get(dimension).map(|d| d.band)
    }

    pub fn bands(&self) -> Vec<(Dimension, Band)> {
        self.dimensions.iter().map(|d| (d.dimension, d.band)).collect()
    }

    /// True when the lens was built from an empty roster
    pub fn is_fallback(&self) -> bool {
        self.member_count == 0
    }
}

/// Lower-middle median: the element at index `(n - 1) / 2` of the sorted
/// scores. For odd `n` this is the middle element; for `n = 2` it is the
/// smaller value.
pub fn median_score(scores: &[u8]) -> Option<u8> {
    if scores.is_empty() {
        return None;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();
    Some(sorted[(sorted.len() - 1) / 2])
}

/// Build the team lens for a category.
///
/// An empty roster is not an error: every dimension reads `Balanced`.
/// Profiles from another category are rejected.
pub fn classify_team(category: Category, profiles: &[Profile]) -> Result<TeamLens> {
    if let Some(foreign) = profiles.iter().find(|p| p.category() != category) {
        return Err(Error::CategoryMismatch {
            expected: category.to_string(),
            actual: foreign.category().to_string(),
        });
    }

    if profiles.is_empty() {
        tracing::debug!(%category, "empty team roster, defaulting every dimension to balanced");
    }

    let dimensions: Vec<TeamDimension> = category
        .dimensions()
        .iter()
        .map(|&dimension| {
            let scores: Vec<u8> = profiles.iter().filter_map(|p| p.score(dimension)).collect();
            let median = median_score(&scores);
            let band = median.map(Band::classify).unwrap_or(Band::Balanced);
            TeamDimension {
                dimension,
                band,
                style_label: style_label(dimension, band).to_string(),
                median_score: median,
            }
        })
        .collect();

    let team_strengths = collect_highlights(&dimensions, strengths);
    let team_watch_outs = collect_highlights(&dimensions, watch_outs);

    tracing::info!(
        %category,
        members = profiles.len(),
        strengths = team_strengths.len(),
        watch_outs = team_watch_outs.len(),
        "classified team"
    );

    Ok(TeamLens {
        category,
        member_count: profiles.len(),
        dimensions,
        strengths: team_strengths,
        watch_outs: team_watch_outs,
    })
}

fn collect_highlights(
    dimensions: &[TeamDimension],
    lookup: fn(Dimension, Band) -> &'static [&'static str],
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for d in dimensions {
        for phrase in lookup(d.dimension, d.band).iter().take(HIGHLIGHTS_PER_DIMENSION) {
            if out.len() == MAX_TEAM_HIGHLIGHTS {
                return out;
            }
            if !out.iter().any(|p| p == phrase) {
                out.push(phrase.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::DimensionScore;
    use proptest::prelude::*;

    fn profile_with(category: Category, dimension: Dimension, value: u8) -> Profile {
        let scores = category
            .dimensions()
            .iter()
            .map(|d| {
                let v = if *d == dimension { value } else { 50 };
                DimensionScore::new(*d, v, 3).unwrap()
            })
            .collect();
        Profile::new(category, scores).unwrap()
    }

    #[test]
    fn test_median_of_three() {
        // [30, 50, 90] → index 1 → 50 → balanced
        let profiles: Vec<_> = [90, 30, 50]
            .into_iter()
            .map(|v| profile_with(Category::Ocean, Dimension::Conscientiousness, v))
            .collect();
        let lens = classify_team(Category::Ocean, &profiles).unwrap();
        let c = lens.get(Dimension::Conscientiousness).unwrap();
        assert_eq!(c.median_score, Some(50));
        assert_eq!(c.band, Band::Balanced);
        assert_eq!(lens.member_count, 3);
    }

    #[test]
    fn test_median_of_two_is_lower() {
        assert_eq!(median_score(&[80, 20]), Some(20));
        assert_eq!(median_score(&[10, 20, 30, 40]), Some(20));
        assert_eq!(median_score(&[42]), Some(42));
        assert_eq!(median_score(&[]), None);
    }

    #[test]
    fn test_empty_team_is_balanced() {
        for category in Category::ALL {
            let lens = classify_team(category, &[]).unwrap();
            assert!(lens.is_fallback());
            assert_eq!(lens.dimensions.len(), category.dimensions().len());
            assert!(lens.dimensions.iter().all(|d| d.band == Band::Balanced && d.median_score.is_none()));
        }
    }

    #[test]
    fn test_single_outlier_does_not_dominate() {
        let profiles: Vec<_> = [40, 45, 100]
            .into_iter()
            .map(|v| profile_with(Category::Values, Dimension::Quality, v))
            .collect();
        let lens = classify_team(Category::Values, &profiles).unwrap();
        assert_eq!(lens.band(Dimension::Quality), Some(Band::Balanced));
    }

    #[test]
    fn test_highlights_capped_and_deduplicated() {
        let profiles = vec![profile_with(Category::Culture, Dimension::Indulgence, 90)];
        let lens = classify_team(Category::Culture, &profiles).unwrap();
        assert!(lens.strengths.len() <= MAX_TEAM_HIGHLIGHTS);
        assert!(lens.watch_outs.len() <= MAX_TEAM_HIGHLIGHTS);
        assert_eq!(lens.strengths.len(), MAX_TEAM_HIGHLIGHTS);

        let mut unique = lens.strengths.clone();
        unique.dedup();
        assert_eq!(unique.len(), lens.strengths.len());
        // Culture dimensions all read balanced except indulgence, first come first
        assert_eq!(lens.strengths[0], strengths(Dimension::PowerDistance, Band::Balanced)[0]);
    }

    #[test]
    fn test_rejects_mixed_categories() {
        let profiles = vec![
            profile_with(Category::Ocean, Dimension::Openness, 50),
            profile_with(Category::Values, Dimension::Quality, 50),
        ];
        assert!(classify_team(Category::Ocean, &profiles).is_err());
    }

    proptest! {
        #[test]
        fn prop_raising_the_maximum_keeps_the_band(
            mut scores in prop::collection::vec(0u8..=100, 2..12),
            bump in 0u8..=100,
        ) {
            scores.sort_unstable();
            let before = median_score(&scores).map(Band::classify);

            let last = scores.len() - 1;
            scores[last] = scores[last].saturating_add(bump).min(100);
            let after = median_score(&scores).map(Band::classify);

            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_lens_has_every_dimension(values in prop::collection::vec(0u8..=100, 0..8)) {
            let profiles: Vec<_> = values
                .iter()
                .map(|v| profile_with(Category::Ocean, Dimension::Neuroticism, *v))
                .collect();
            let lens = classify_team(Category::Ocean, &profiles).unwrap();
            prop_assert_eq!(lens.dimensions.len(), 5);
            prop_assert!(lens.strengths.len() <= MAX_TEAM_HIGHLIGHTS);
        }
    }
}
