//! Deterministic recommendation selector.

use assess_core::{Band, Category, Dimension, Profile};
use assess_scoring::TeamLens;
use serde::{Deserialize, Serialize};

use crate::guard::{GuardConfig, StyleGuard};
use crate::templates::{Audience, PhraseKind, TemplateTable};

/// Cap for individual recommendations. Fixed; only the team cap is
/// configurable.
pub const INDIVIDUAL_CAP: usize = 5;

/// Default cap for team recommendations
pub const TEAM_CAP: usize = 5;

/// Allowed range for the team cap
pub const TEAM_CAP_RANGE: std::ops::RangeInclusive<usize> = 4..=6;

/// A recommendation ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub text: String,
    pub source_dimension: Dimension,
    pub source_band: Band,
    pub kind: PhraseKind,
}

/// What recommendations are generated for
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Profile(&'a Profile),
    Team(&'a TeamLens),
}

impl<'a> Subject<'a> {
    pub fn audience(&self) -> Audience {
        match self {
            Subject::Profile(_) => Audience::Individual,
            Subject::Team(_) => Audience::Team,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Subject::Profile(p) => p.category(),
            Subject::Team(t) => t.category,
        }
    }

    /// (dimension, band) pairs in category order
    pub fn bands(&self) -> Vec<(Dimension, Band)> {
        match self {
            Subject::Profile(p) => p.bands(),
            Subject::Team(t) => t.bands(),
        }
    }
}

impl<'a> From<&'a Profile> for Subject<'a> {
    fn from(profile: &'a Profile) -> Self {
        Subject::Profile(profile)
    }
}

impl<'a> From<&'a TeamLens> for Subject<'a> {
    fn from(lens: &'a TeamLens) -> Self {
        Subject::Team(lens)
    }
}

/// Selector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Clamped to 4..=6
    pub team_cap: usize,
    #[serde(flatten)]
    pub guard: GuardConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            team_cap: TEAM_CAP,
            guard: GuardConfig::default(),
        }
    }
}

/// Picks guarded phrases from a template table, one dimension at a time
#[derive(Debug, Clone)]
pub struct RecommendationSelector {
    table: TemplateTable,
    guard: StyleGuard,
    team_cap: usize,
}

impl RecommendationSelector {
    pub fn new(table: TemplateTable, config: &SelectorConfig) -> Self {
        Self {
            table,
            guard: StyleGuard::new(&config.guard),
            team_cap: config
                .team_cap
                .clamp(*TEAM_CAP_RANGE.start(), *TEAM_CAP_RANGE.end()),
        }
    }

    pub fn builtin() -> Self {
        Self::new(TemplateTable::builtin(), &SelectorConfig::default())
    }

    pub fn guard(&self) -> &StyleGuard {
        &self.guard
    }

    pub fn cap(&self, audience: Audience) -> usize {
        match audience {
            Audience::Individual => INDIVIDUAL_CAP,
            Audience::Team => self.team_cap,
        }
    }

    pub fn for_profile(&self, profile: &Profile) -> Vec<Recommendation> {
        self.build_recommendations(Subject::Profile(profile))
    }

    pub fn for_team(&self, lens: &TeamLens) -> Vec<Recommendation> {
        self.build_recommendations(Subject::Team(lens))
    }

    /// Select recommendations for a subject. Never fails; returns an empty
    /// list when no usable candidates exist.
    pub fn build_recommendations(&self, subject: Subject<'_>) -> Vec<Recommendation> {
        let audience = subject.audience();
        self.select(audience, &subject.bands(), self.cap(audience))
    }

    /// Round-robin over dimensions: each pass takes at most one phrase per
    /// dimension, so no dimension contributes twice before every dimension
    /// has had a turn. Rejected or duplicate candidates are skipped in
    /// favour of the next candidate for the same dimension.
    pub fn select(&self, audience: Audience, bands: &[(Dimension, Band)], cap: usize) -> Vec<Recommendation> {
        let mut selected: Vec<Recommendation> = Vec::with_capacity(cap);
        let mut cursors = vec![0usize; bands.len()];

        for (dimension, band) in bands {
            if self.table.candidates(*dimension, *band, audience).is_empty() {
                tracing::debug!(%dimension, %band, ?audience, "no template candidates, skipping dimension");
            }
        }

        loop {
            let mut progressed = false;

            for (slot, (dimension, band)) in bands.iter().enumerate() {
                if selected.len() >= cap {
                    return selected;
                }

                let candidates = self.table.candidates(*dimension, *band, audience);
                while let Some(phrase) = candidates.get(cursors[slot]) {
                    cursors[slot] += 1;

                    let Some(text) = self.guard.apply(&phrase.text) else {
                        continue;
                    };
                    if selected.iter().any(|r| r.text == text) {
                        continue;
                    }

                    selected.push(Recommendation {
                        text,
                        source_dimension: *dimension,
                        source_band: *band,
                        kind: phrase.kind,
                    });
                    progressed = true;
                    break;
                }
            }

            if !progressed {
                return selected;
            }
        }
    }
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::DimensionScore;
    use assess_scoring::classify_team;

    fn ocean_profile(values: [u8; 5]) -> Profile {
        let scores = Category::Ocean
            .dimensions()
            .iter()
            .zip(values)
            .map(|(d, v)| DimensionScore::new(*d, v, 4).unwrap())
            .collect();
        Profile::new(Category::Ocean, scores).unwrap()
    }

    fn three_per_dimension(bands: &[(Dimension, Band)]) -> TemplateTable {
        let mut table = TemplateTable::new();
        for (dimension, band) in bands {
            for i in 1..=3 {
                let kind = if i == 1 { PhraseKind::QuickWin } else { PhraseKind::Habit };
                table = table.with(
                    *dimension,
                    *band,
                    Audience::Individual,
                    kind,
                    &format!("Try step {i} for {}", dimension.name()),
                );
            }
        }
        table
    }

    #[test]
    fn test_cap_draws_one_per_dimension_first() {
        let profile = ocean_profile([80, 20, 50, 70, 40]);
        let selector = RecommendationSelector::new(three_per_dimension(&profile.bands()), &SelectorConfig::default());

        let recs = selector.for_profile(&profile);
        assert_eq!(recs.len(), 5);
        let dimensions: Vec<_> = recs.iter().map(|r| r.source_dimension).collect();
        assert_eq!(dimensions, Category::Ocean.dimensions().to_vec());
        assert!(recs.iter().all(|r| r.text.starts_with("Try step 1")));
        assert!(recs.iter().all(|r| r.kind == PhraseKind::QuickWin));
    }

    #[test]
    fn test_second_round_after_every_dimension() {
        let profile = ocean_profile([80, 20, 50, 70, 40]);
        let bands = profile.bands();
        let selector = RecommendationSelector::new(three_per_dimension(&bands), &SelectorConfig::default());
        let recs = selector.select(Audience::Individual, &bands, 7);
        assert_eq!(recs.len(), 7);
        assert_eq!(recs[5].source_dimension, Dimension::Openness);
        assert!(recs[5].text.starts_with("Try step 2"));
        assert_eq!(recs[6].source_dimension, Dimension::Conscientiousness);
    }

    #[test]
    fn test_rejected_phrase_falls_through_to_next_candidate() {
        let table = TemplateTable::new()
            .with(Dimension::Openness, Band::Higher, Audience::Individual, PhraseKind::QuickWin, "Leverage your synergy")
            .with(Dimension::Openness, Band::Higher, Audience::Individual, PhraseKind::Habit, "Finish one idea first")
            .with(Dimension::Neuroticism, Band::Lower, Audience::Individual, PhraseKind::QuickWin, "Finish one idea first")
            .with(Dimension::Neuroticism, Band::Lower, Audience::Individual, PhraseKind::Habit, "Plan for one risk");
        let selector = RecommendationSelector::new(table, &SelectorConfig::default());

        let recs = selector.select(
            Audience::Individual,
            &[(Dimension::Openness, Band::Higher), (Dimension::Neuroticism, Band::Lower)],
            5,
        );
        let texts: Vec<_> = recs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Finish one idea first", "Plan for one risk"]);
        assert_eq!(recs[0].kind, PhraseKind::Habit);
    }

    #[test]
    fn test_table_gaps_never_fail() {
        let selector = RecommendationSelector::new(TemplateTable::new(), &SelectorConfig::default());
        assert!(selector.for_profile(&ocean_profile([50; 5])).is_empty());

        let lens = classify_team(Category::Values, &[]).unwrap();
        assert!(selector.for_team(&lens).is_empty());
    }

    #[test]
    fn test_long_phrases_truncated() {
        let long = "Keep a journal ".repeat(20);
        let table = TemplateTable::new().with(Dimension::Quality, Band::Lower, Audience::Individual, PhraseKind::Habit, &long);
        let selector = RecommendationSelector::new(table, &SelectorConfig::default());
        let recs = selector.select(Audience::Individual, &[(Dimension::Quality, Band::Lower)], 5);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].text.chars().count() <= 140);
        assert!(recs[0].text.ends_with('…'));
    }

    #[test]
    fn test_builtin_team_selection() {
        let selector = RecommendationSelector::builtin();
        let lens = classify_team(Category::Culture, &[]).unwrap();
        let recs = selector.for_team(&lens);
        assert_eq!(recs.len(), TEAM_CAP);
        assert!(recs.iter().all(|r| r.source_band == Band::Balanced));

        let mut texts: Vec<_> = recs.iter().map(|r| r.text.clone()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), recs.len());
    }

    #[test]
    fn test_individual_cap_is_fixed() {
        let profile = ocean_profile([80, 20, 50, 70, 40]);
        let config = SelectorConfig {
            team_cap: 6,
            ..SelectorConfig::default()
        };
        let selector = RecommendationSelector::new(three_per_dimension(&profile.bands()), &config);
        assert_eq!(selector.cap(Audience::Individual), INDIVIDUAL_CAP);
        assert_eq!(selector.for_profile(&profile).len(), 5);
    }

    #[test]
    fn test_team_cap_clamped() {
        let config = SelectorConfig {
            team_cap: 12,
            ..SelectorConfig::default()
        };
        let selector = RecommendationSelector::new(TemplateTable::builtin(), &config);
        assert_eq!(selector.cap(Audience::Team), 6);

        let config = SelectorConfig {
            team_cap: 1,
            ..SelectorConfig::default()
        };
        let selector = RecommendationSelector::new(TemplateTable::builtin(), &config);
        assert_eq!(selector.cap(Audience::Team), 4);
    }

    #[test]
    fn test_builtin_individual_selection_is_deterministic() {
        let selector = RecommendationSelector::builtin();
        let profile = ocean_profile([90, 10, 60, 30, 75]);
        assert_eq!(selector.for_profile(&profile), selector.for_profile(&profile));
        assert_eq!(selector.for_profile(&profile).len(), INDIVIDUAL_CAP);
    }
}
