//! Per-respondent dimension scores and profiles.

use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::dimension::{Category, Dimension};
use crate::error::{Error, Result};
use crate::lexicon::style_label;

/// Highest valid dimension score
pub const MAX_SCORE: u8 = 100;

/// A 0-100 score for one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub value: u8,
    /// Number of responses that contributed; 0 means the value is the
    /// empty-input default
    pub answered: usize,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, value: u8, answered: usize) -> Result<Self> {
        if value > MAX_SCORE {
            return Err(Error::Configuration(format!(
                "score {value} for {dimension} exceeds {MAX_SCORE}"
            )));
        }
        Ok(Self {
            dimension,
            value,
            answered,
        })
    }

    /// Default score for a dimension with no responses
    pub fn unanswered(dimension: Dimension) -> Self {
        Self {
            dimension,
            value: 0,
            answered: 0,
        }
    }

    pub fn band(&self) -> Band {
        Band::classify(self.value)
    }

    pub fn style_label(&self) -> &'static str {
        style_label(self.dimension, self.band())
    }
}

/// Interpreted view of one dimension, as rendered on results pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionReading {
    pub dimension: Dimension,
    pub score: u8,
    pub band: Band,
    pub style_label: String,
}

/// A respondent's scores for one category. Always holds exactly the
/// category's dimensions, in category order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct Profile {
    category: Category,
    scores: Vec<DimensionScore>,
}

#[derive(Deserialize)]
struct RawProfile {
    category: Category,
    scores: Vec<DimensionScore>,
}

impl TryFrom<RawProfile> for Profile {
    type Error = Error;

    fn try_from(raw: RawProfile) -> Result<Self> {
        Profile::new(raw.category, raw.scores)
    }
}

impl Profile {
    /// Build a profile, checking the dimension set and score range.
    /// Scores may be given in any order; they are stored in category order.
    pub fn new(category: Category, scores: Vec<DimensionScore>) -> Result<Self> {
        let expected = category.dimensions();
        if scores.len() != expected.len() {
            return Err(Error::Configuration(format!(
                "{category} profile needs {} dimensions, got {}",
                expected.len(),
                scores.len()
            )));
        }

        let mut ordered = Vec::with_capacity(expected.len());
        for dimension in expected {
            let score = scores
                .iter()
                .find(|s| s.dimension == *dimension)
                .ok_or_else(|| {
                    Error::Configuration(format!("{category} profile is missing {dimension}"))
                })?;
            ordered.push(DimensionScore::new(score.dimension, score.value, score.answered)?);
        }

        Ok(Self {
            category,
            scores: ordered,
        })
    }

    /// Profile with every dimension at the empty-input default of 0
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            scores: category
                .dimensions()
                .iter()
                .map(|d| DimensionScore::unanswered(*d))
                .collect(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn scores(&self) -> &[DimensionScore] {
        &self.scores
    }

    pub fn get(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.scores.iter().find(|s| s.dimension == dimension)
    }

    /// Score for a dimension; `None` if it is not part of this category
    pub fn score(&self, dimension: Dimension) -> Option<u8> {
        self.get(dimension).map(|s| s.value)
    }

    pub fn band(&self, dimension: Dimension) -> Option<Band> {
        self.get(dimension).map(DimensionScore::band)
    }

    pub fn bands(&self) -> Vec<(Dimension, Band)> {
        self.scores.iter().map(|s| (s.dimension, s.band())).collect()
    }

    pub fn readings(&self) -> Vec<DimensionReading> {
        self.scores
            .iter()
            .map(|s| DimensionReading {
                dimension: s.dimension,
                score: s.value,
                band: s.band(),
                style_label: s.style_label().to_string(),
            })
            .collect()
    }

    /// Dimensions that fell back to the empty-input default
    pub fn empty_dimensions(&self) -> Vec<Dimension> {
        self.scores
            .iter()
            .filter(|s| s.answered == 0)
            .map(|s| s.dimension)
            .collect()
    }

    /// Dimension with the highest score; ties go to the earlier dimension
    pub fn dominant(&self) -> Option<Dimension> {
        self.scores
            .iter()
            .fold(None::<&DimensionScore>, |best, s| match best {
                Some(b) if b.value >= s.value => Some(b),
                _ => Some(s),
            })
            .map(|s| s.dimension)
    }
}
