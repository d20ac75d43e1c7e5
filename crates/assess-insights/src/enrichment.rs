//! Optional AI enrichment seam.
//!
//! An [`Enricher`] proposes free-text recommendations. It is never trusted
//! to be available: the recommender bounds it with a timeout and falls back
//! to the deterministic selector whenever it fails or returns nothing usable.

use assess_core::{Band, Category, Dimension};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::templates::{Audience, PhraseKind};

/// Result type for enrichment calls
pub type EnrichmentResult<T> = Result<T, EnrichmentError>;

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Enrichment disabled")]
    Disabled,
}

/// Everything an enricher needs to write recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRequest {
    pub audience: Audience,
    pub category: Category,
    /// Category score sheet (individuals) or per-dimension team bands
    pub scores: serde_json::Value,
    pub bands: Vec<(Dimension, Band)>,
    /// Rendered user prompt
    pub prompt: String,
    pub max_items: usize,
}

/// A phrase proposed by an enricher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPhrase {
    pub text: String,
    pub dimension: Dimension,
    #[serde(default = "default_kind")]
    pub kind: PhraseKind,
}

fn default_kind() -> PhraseKind {
    PhraseKind::QuickWin
}

/// Source of free-text recommendations, e.g. an LLM client
#[async_trait]
pub trait Enricher: Send + Sync {
    /// Enricher name for logs
    fn name(&self) -> &str;

    async fn enrich(&self, request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedPhrase>>;
}

/// Enricher that always declines; the deterministic path is used
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEnricher;

#[async_trait]
impl Enricher for DisabledEnricher {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn enrich(&self, _request: &EnrichmentRequest) -> EnrichmentResult<Vec<EnrichedPhrase>> {
        Err(EnrichmentError::Disabled)
    }
}
