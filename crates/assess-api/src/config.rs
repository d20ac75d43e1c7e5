//! Engine configuration.

use assess_insights::{
    Enricher, RecommendationSelector, Recommender, SelectorConfig, TemplateTable,
};
use assess_scoring::{QuestionRegistry, ScoringEngine};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ServiceResult;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Question registry configuration
    pub scoring: ScoringConfig,

    /// Recommendation caps and style guard
    pub recommendations: SelectorConfig,

    /// Optional AI enrichment
    pub enrichment: EnrichmentConfig,

    /// Log output
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// JSON registries replacing the builtin ones, one per category
    pub registry_paths: Vec<PathBuf>,

    /// JSON template table replacing the builtin phrases
    pub templates_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Whether to call the enrichment service at all
    pub enabled: bool,

    /// Enrichment timeout (milliseconds)
    pub timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_ms: 3_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,

    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from file, with `ASSESS__*` environment overrides
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("ASSESS")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Scoring engine with any configured registries installed
    pub fn build_engine(&self) -> ServiceResult<ScoringEngine> {
        let mut engine = ScoringEngine::builtin();
        for path in &self.scoring.registry_paths {
            let registry = QuestionRegistry::from_path(path)?;
            engine = engine.with_registry(registry);
        }
        Ok(engine)
    }

    /// Recommender using the configured templates, guard and enricher
    pub fn build_recommender(&self, enricher: Option<Arc<dyn Enricher>>) -> ServiceResult<Recommender> {
        let table = match &self.scoring.templates_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(assess_core::Error::from)?;
                TemplateTable::from_json(&json)?
            }
            None => TemplateTable::builtin(),
        };

        let recommender = Recommender::new(RecommendationSelector::new(table, &self.recommendations));
        Ok(match enricher {
            Some(enricher) if self.enrichment.enabled => recommender
                .with_enricher(enricher, Duration::from_millis(self.enrichment.timeout_ms)),
            _ => recommender,
        })
    }
}
