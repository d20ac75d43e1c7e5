//! Assessment categories and their fixed dimension sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Assessment category. Each category owns a fixed, ordered dimension set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Big Five personality (OCEAN)
    Ocean,
    /// Hofstede-style workplace culture preferences
    Culture,
    /// Work values
    Values,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ocean, Category::Culture, Category::Values];

    /// Dimensions of this category, in presentation order
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            Category::Ocean => &[
                Dimension::Openness,
                Dimension::Conscientiousness,
                Dimension::Extraversion,
                Dimension::Agreeableness,
                Dimension::Neuroticism,
            ],
            Category::Culture => &[
                Dimension::PowerDistance,
                Dimension::Individualism,
                Dimension::Masculinity,
                Dimension::UncertaintyAvoidance,
                Dimension::LongTermOrientation,
                Dimension::Indulgence,
            ],
            Category::Values => &[
                Dimension::Innovation,
                Dimension::Collaboration,
                Dimension::Autonomy,
                Dimension::Quality,
                Dimension::CustomerFocus,
            ],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Ocean => "ocean",
            Category::Culture => "culture",
            Category::Values => "values",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Ocean => "Personality (OCEAN)",
            Category::Culture => "Culture Preferences",
            Category::Values => "Work Values",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ocean" | "personality" => Ok(Category::Ocean),
            "culture" => Ok(Category::Culture),
            "values" | "workvalues" => Ok(Category::Values),
            other => Err(Error::Configuration(format!("unknown category '{other}'"))),
        }
    }
}

/// A scored trait dimension. Serialized by its camelCase key, which is the
/// field name consumed by chart components and prompt builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    // OCEAN
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,

    // Culture
    PowerDistance,
    Individualism,
    Masculinity,
    UncertaintyAvoidance,
    LongTermOrientation,
    Indulgence,

    // Values
    Innovation,
    Collaboration,
    Autonomy,
    Quality,
    CustomerFocus,
}

impl Dimension {
    pub fn category(&self) -> Category {
        use Dimension::*;
        match self {
            Openness | Conscientiousness | Extraversion | Agreeableness | Neuroticism => {
                Category::Ocean
            }
            PowerDistance | Individualism | Masculinity | UncertaintyAvoidance
            | LongTermOrientation | Indulgence => Category::Culture,
            Innovation | Collaboration | Autonomy | Quality | CustomerFocus => Category::Values,
        }
    }

    /// Wire key (JSON field name)
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Openness => "openness",
            Dimension::Conscientiousness => "conscientiousness",
            Dimension::Extraversion => "extraversion",
            Dimension::Agreeableness => "agreeableness",
            Dimension::Neuroticism => "neuroticism",
            Dimension::PowerDistance => "powerDistance",
            Dimension::Individualism => "individualism",
            Dimension::Masculinity => "masculinity",
            Dimension::UncertaintyAvoidance => "uncertaintyAvoidance",
            Dimension::LongTermOrientation => "longTermOrientation",
            Dimension::Indulgence => "indulgence",
            Dimension::Innovation => "innovation",
            Dimension::Collaboration => "collaboration",
            Dimension::Autonomy => "autonomy",
            Dimension::Quality => "quality",
            Dimension::CustomerFocus => "customerFocus",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Openness => "Openness",
            Dimension::Conscientiousness => "Conscientiousness",
            Dimension::Extraversion => "Extraversion",
            Dimension::Agreeableness => "Agreeableness",
            Dimension::Neuroticism => "Neuroticism",
            Dimension::PowerDistance => "Power Distance",
            Dimension::Individualism => "Individualism",
            Dimension::Masculinity => "Achievement Orientation",
            Dimension::UncertaintyAvoidance => "Uncertainty Avoidance",
            Dimension::LongTermOrientation => "Long-Term Orientation",
            Dimension::Indulgence => "Indulgence",
            Dimension::Innovation => "Innovation",
            Dimension::Collaboration => "Collaboration",
            Dimension::Autonomy => "Autonomy",
            Dimension::Quality => "Quality",
            Dimension::CustomerFocus => "Customer Focus",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .flat_map(|c| c.dimensions().iter().copied())
            .find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_counts() {
        assert_eq!(Category::Ocean.dimensions().len(), 5);
        assert_eq!(Category::Culture.dimensions().len(), 6);
        assert_eq!(Category::Values.dimensions().len(), 5);
    }

    #[test]
    fn test_dimensions_belong_to_their_category() {
        for category in Category::ALL {
            for dimension in category.dimensions() {
                assert_eq!(dimension.category(), category);
            }
        }
    }

    #[test]
    fn test_serde_key_matches_key() {
        for category in Category::ALL {
            for dimension in category.dimensions() {
                let json = serde_json::to_string(dimension).unwrap();
                assert_eq!(json, format!("\"{}\"", dimension.key()));
                assert_eq!(Dimension::from_key(dimension.key()), Some(*dimension));
            }
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("OCEAN".parse::<Category>().unwrap(), Category::Ocean);
        assert_eq!("values".parse::<Category>().unwrap(), Category::Values);
        assert!("astrology".parse::<Category>().is_err());
    }
}
