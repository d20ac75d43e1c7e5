//! Question registry: the reviewed mapping from question id to dimension,
//! reverse-scoring flag and response scale.

use assess_core::{Category, Dimension, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Supported Likert scale sizes
pub const SUPPORTED_SCALES: [u8; 2] = [5, 7];

/// A single survey item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub dimension: Dimension,
    #[serde(default)]
    pub reverse_scored: bool,
    pub scale_max: u8,
}

impl Question {
    pub fn new(id: impl Into<String>, dimension: Dimension, reverse_scored: bool, scale_max: u8) -> Self {
        Self {
            id: id.into(),
            dimension,
            reverse_scored,
            scale_max,
        }
    }
}

/// Immutable question set for one category
#[derive(Debug, Clone)]
pub struct QuestionRegistry {
    category: Category,
    questions: Vec<Question>,
    index: HashMap<String, usize>,
    scales: HashMap<Dimension, u8>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    category: Category,
    questions: Vec<Question>,
}

impl QuestionRegistry {
    /// Build a registry, rejecting configurations the aggregator cannot
    /// score: duplicate ids, unsupported scales, questions from another
    /// category, mixed scales within a dimension, or an uncovered dimension.
    pub fn new(category: Category, questions: Vec<Question>) -> Result<Self> {
        let mut index = HashMap::with_capacity(questions.len());
        let mut scales: HashMap<Dimension, u8> = HashMap::new();

        for (i, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(Error::Configuration("question id must not be empty".to_string()));
            }
            if !SUPPORTED_SCALES.contains(&question.scale_max) {
                return Err(Error::Configuration(format!(
                    "question {} uses unsupported scale {}",
                    question.id, question.scale_max
                )));
            }
            if question.dimension.category() != category {
                return Err(Error::Configuration(format!(
                    "question {} measures {} which is not a {category} dimension",
                    question.id, question.dimension
                )));
            }
            if index.insert(question.id.clone(), i).is_some() {
                return Err(Error::Configuration(format!("duplicate question id {}", question.id)));
            }
            let scale = scales.entry(question.dimension).or_insert(question.scale_max);
            if *scale != question.scale_max {
                return Err(Error::Configuration(format!(
                    "dimension {} mixes scales {} and {}",
                    question.dimension, scale, question.scale_max
                )));
            }
        }

        if let Some(missing) = category.dimensions().iter().find(|d| !scales.contains_key(d)) {
            return Err(Error::Configuration(format!(
                "{category} registry has no questions for {missing}"
            )));
        }

        Ok(Self {
            category,
            questions,
            index,
            scales,
        })
    }

    /// Parse a registry from its JSON form:
    /// `{"category": "ocean", "questions": [{"id", "dimension", "reverseScored", "scaleMax"}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::new(file.category, file.questions)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = RegistryFile {
            category: self.category,
            questions: self.questions.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    /// Look up a question, treating an unknown id as a configuration error
    pub fn require(&self, question_id: &str) -> Result<&Question> {
        self.get(question_id)
            .ok_or_else(|| Error::UnknownQuestion(question_id.to_string()))
    }

    /// Scale shared by every question of a dimension
    pub fn scale_for(&self, dimension: Dimension) -> Option<u8> {
        self.scales.get(&dimension).copied()
    }

    pub fn questions_for(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.dimension == dimension)
    }

    /// Shipped registry for a category
    pub fn builtin(category: Category) -> Self {
        let (scale_max, table) = match category {
            Category::Ocean => (5, OCEAN_ITEMS),
            Category::Culture => (7, CULTURE_ITEMS),
            Category::Values => (5, VALUES_ITEMS),
        };
        let questions = table
            .iter()
            .map(|(id, dimension, reverse)| Question::new(*id, *dimension, *reverse, scale_max))
            .collect::<Vec<_>>();

        let mut index = HashMap::with_capacity(questions.len());
        let mut scales = HashMap::new();
        for (i, q) in questions.iter().enumerate() {
            index.insert(q.id.clone(), i);
            scales.insert(q.dimension, scale_max);
        }

        Self {
            category,
            questions,
            index,
            scales,
        }
    }
}

type Item = (&'static str, Dimension, bool);

/// 20-item OCEAN inventory, 5-point scale
const OCEAN_ITEMS: &[Item] = &[
    ("O1", Dimension::Openness, false),
    ("O2", Dimension::Openness, true),
    ("O3", Dimension::Openness, false),
    ("O4", Dimension::Openness, true),
    ("C1", Dimension::Conscientiousness, false),
    ("C2", Dimension::Conscientiousness, true),
    ("C3", Dimension::Conscientiousness, false),
    ("C4", Dimension::Conscientiousness, true),
    ("E1", Dimension::Extraversion, false),
    ("E2", Dimension::Extraversion, true),
    ("E3", Dimension::Extraversion, false),
    ("E4", Dimension::Extraversion, true),
    ("A1", Dimension::Agreeableness, false),
    ("A2", Dimension::Agreeableness, true),
    ("A3", Dimension::Agreeableness, false),
    ("A4", Dimension::Agreeableness, true),
    ("N1", Dimension::Neuroticism, false),
    ("N2", Dimension::Neuroticism, true),
    ("N3", Dimension::Neuroticism, false),
    ("N4", Dimension::Neuroticism, true),
];

/// 18-item culture preference survey, 7-point scale
const CULTURE_ITEMS: &[Item] = &[
    ("PD1", Dimension::PowerDistance, false),
    ("PD2", Dimension::PowerDistance, false),
    ("PD3", Dimension::PowerDistance, true),
    ("IDV1", Dimension::Individualism, false),
    ("IDV2", Dimension::Individualism, false),
    ("IDV3", Dimension::Individualism, true),
    ("MAS1", Dimension::Masculinity, false),
    ("MAS2", Dimension::Masculinity, false),
    ("MAS3", Dimension::Masculinity, true),
    ("UAI1", Dimension::UncertaintyAvoidance, false),
    ("UAI2", Dimension::UncertaintyAvoidance, false),
    ("UAI3", Dimension::UncertaintyAvoidance, true),
    ("LTO1", Dimension::LongTermOrientation, false),
    ("LTO2", Dimension::LongTermOrientation, false),
    ("LTO3", Dimension::LongTermOrientation, true),
    ("IVR1", Dimension::Indulgence, false),
    ("IVR2", Dimension::Indulgence, false),
    ("IVR3", Dimension::Indulgence, true),
];

/// 15-item work values survey, 5-point scale
const VALUES_ITEMS: &[Item] = &[
    ("INN1", Dimension::Innovation, false),
    ("INN2", Dimension::Innovation, false),
    ("INN3", Dimension::Innovation, true),
    ("COL1", Dimension::Collaboration, false),
    ("COL2", Dimension::Collaboration, false),
    ("COL3", Dimension::Collaboration, true),
    ("AUT1", Dimension::Autonomy, false),
    ("AUT2", Dimension::Autonomy, false),
    ("AUT3", Dimension::Autonomy, true),
    ("QUA1", Dimension::Quality, false),
    ("QUA2", Dimension::Quality, false),
    ("QUA3", Dimension::Quality, true),
    ("CUS1", Dimension::CustomerFocus, false),
    ("CUS2", Dimension::CustomerFocus, false),
    ("CUS3", Dimension::CustomerFocus, true),
];
