//! Category score sheets: the flat JSON shape consumed by chart components
//! and prompt builders. Field names are a published contract.

use serde::{Deserialize, Serialize};

use crate::dimension::{Category, Dimension};
use crate::error::{Error, Result};
use crate::profile::Profile;

/// OCEAN scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OceanScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

/// Culture preference scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureScores {
    pub power_distance: u8,
    pub individualism: u8,
    pub masculinity: u8,
    pub uncertainty_avoidance: u8,
    pub long_term_orientation: u8,
    pub indulgence: u8,
}

/// Work value scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesScores {
    pub innovation: u8,
    pub collaboration: u8,
    pub autonomy: u8,
    pub quality: u8,
    pub customer_focus: u8,
}

/// Score sheet for any category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreSheet {
    Ocean(OceanScores),
    Culture(CultureScores),
    Values(ValuesScores),
}

fn require(profile: &Profile, category: Category) -> Result<()> {
    if profile.category() != category {
        return Err(Error::CategoryMismatch {
            expected: category.to_string(),
            actual: profile.category().to_string(),
        });
    }
    Ok(())
}

// Profile construction guarantees every category dimension is present
fn value(profile: &Profile, dimension: Dimension) -> u8 {
    profile.score(dimension).unwrap_or(0)
}

fn ocean(profile: &Profile) -> OceanScores {
    OceanScores {
        openness: value(profile, Dimension::Openness),
        conscientiousness: value(profile, Dimension::Conscientiousness),
        extraversion: value(profile, Dimension::Extraversion),
        agreeableness: value(profile, Dimension::Agreeableness),
        neuroticism: value(profile, Dimension::Neuroticism),
    }
}

fn culture(profile: &Profile) -> CultureScores {
    CultureScores {
        power_distance: value(profile, Dimension::PowerDistance),
        individualism: value(profile, Dimension::Individualism),
        masculinity: value(profile, Dimension::Masculinity),
        uncertainty_avoidance: value(profile, Dimension::UncertaintyAvoidance),
        long_term_orientation: value(profile, Dimension::LongTermOrientation),
        indulgence: value(profile, Dimension::Indulgence),
    }
}

fn values(profile: &Profile) -> ValuesScores {
    ValuesScores {
        innovation: value(profile, Dimension::Innovation),
        collaboration: value(profile, Dimension::Collaboration),
        autonomy: value(profile, Dimension::Autonomy),
        quality: value(profile, Dimension::Quality),
        customer_focus: value(profile, Dimension::CustomerFocus),
    }
}

impl TryFrom<&Profile> for OceanScores {
    type Error = Error;

    fn try_from(profile: &Profile) -> Result<Self> {
        require(profile, Category::Ocean)?;
        Ok(ocean(profile))
    }
}

impl TryFrom<&Profile> for CultureScores {
    type Error = Error;

    fn try_from(profile: &Profile) -> Result<Self> {
        require(profile, Category::Culture)?;
        Ok(culture(profile))
    }
}

impl TryFrom<&Profile> for ValuesScores {
    type Error = Error;

    fn try_from(profile: &Profile) -> Result<Self> {
        require(profile, Category::Values)?;
        Ok(values(profile))
    }
}

impl ScoreSheet {
    pub fn from_profile(profile: &Profile) -> Self {
        match profile.category() {
            Category::Ocean => ScoreSheet::Ocean(ocean(profile)),
            Category::Culture => ScoreSheet::Culture(culture(profile)),
            Category::Values => ScoreSheet::Values(values(profile)),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ScoreSheet::Ocean(_) => Category::Ocean,
            ScoreSheet::Culture(_) => Category::Culture,
            ScoreSheet::Values(_) => Category::Values,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
