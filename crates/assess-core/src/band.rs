//! Three-band classification of 0-100 dimension scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score classified as [`Band::Lower`]
pub const LOWER_MAX: u8 = 35;

/// Lowest score classified as [`Band::Higher`]
pub const HIGHER_MIN: u8 = 65;

/// Qualitative tier of a dimension score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Lower,
    Balanced,
    Higher,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Lower, Band::Balanced, Band::Higher];

    /// Classify a score. Total over `u8`: anything above 100 is `Higher`.
    pub fn classify(score: u8) -> Band {
        match score {
            0..=LOWER_MAX => Band::Lower,
            HIGHER_MIN..=u8::MAX => Band::Higher,
            _ => Band::Balanced,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Band::Lower => "lower",
            Band::Balanced => "balanced",
            Band::Higher => "higher",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Band::classify(0), Band::Lower);
        assert_eq!(Band::classify(35), Band::Lower);
        assert_eq!(Band::classify(36), Band::Balanced);
        assert_eq!(Band::classify(64), Band::Balanced);
        assert_eq!(Band::classify(65), Band::Higher);
        assert_eq!(Band::classify(100), Band::Higher);
    }

    #[test]
    fn test_bands_partition_score_range() {
        let mut counts = [0usize; 3];
        let mut previous = Band::Lower;
        for score in 0..=100u8 {
            let band = Band::classify(score);
            // Monotone: bands never step back down as the score rises
            assert!(band >= previous);
            previous = band;
            counts[band as usize] += 1;
        }
        assert_eq!(counts, [36, 29, 36]);
    }

    proptest! {
        #[test]
        fn prop_classify_is_total_and_consistent(score in 0u8..=100) {
            let band = Band::classify(score);
            let in_lower = score <= LOWER_MAX;
            let in_balanced = (LOWER_MAX + 1..HIGHER_MIN).contains(&score);
            let in_higher = score >= HIGHER_MIN;
            prop_assert_eq!([in_lower, in_balanced, in_higher].iter().filter(|b| **b).count(), 1);
            prop_assert_eq!(band == Band::Lower, in_lower);
            prop_assert_eq!(band == Band::Balanced, in_balanced);
            prop_assert_eq!(band == Band::Higher, in_higher);
        }
    }
}
