//! Recommendation service: optional enrichment with deterministic fallback.

use assess_core::ScoreSheet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::enrichment::{EnrichedPhrase, Enricher, EnrichmentError, EnrichmentRequest};
use crate::prompts::format_enrichment_prompt;
use crate::selector::{Recommendation, RecommendationSelector, Subject};

/// Default enrichment timeout
pub const DEFAULT_ENRICHMENT_TIMEOUT: Duration = Duration::from_secs(3);

/// Where a recommendation set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Enriched,
    Templates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub source: RecommendationSource,
    pub items: Vec<Recommendation>,
}

/// Produces recommendations for profiles and team lenses. Never fails.
pub struct Recommender {
    selector: RecommendationSelector,
    enricher: Option<Arc<dyn Enricher>>,
    timeout: Duration,
}

impl Recommender {
    pub fn new(selector: RecommendationSelector) -> Self {
        Self {
            selector,
            enricher: None,
            timeout: DEFAULT_ENRICHMENT_TIMEOUT,
        }
    }

    pub fn with_enricher(mut self, enricher: Arc<dyn Enricher>, timeout: Duration) -> Self {
        self.enricher = Some(enricher);
        self.timeout = timeout;
        self
    }

    pub fn selector(&self) -> &RecommendationSelector {
        &self.selector
    }

    /// Deterministic recommendations only
    pub fn templates(&self, subject: Subject<'_>) -> RecommendationSet {
        RecommendationSet {
            source: RecommendationSource::Templates,
            items: self.selector.build_recommendations(subject),
        }
    }

    pub async fn recommend(&self, subject: Subject<'_>) -> RecommendationSet {
        let Some(enricher) = &self.enricher else {
            return self.templates(subject);
        };

        let request = self.request_for(subject);
        let outcome = match tokio::time::timeout(self.timeout, enricher.enrich(&request)).await {
            Ok(result) => result,
            Err(_) => Err(EnrichmentError::Timeout(self.timeout.as_millis() as u64)),
        };

        match outcome {
            Ok(phrases) => {
                let items = self.accept(subject, phrases);
                if items.is_empty() {
                    tracing::warn!(enricher = enricher.name(), "enrichment returned no usable phrases, using templates");
                    return self.templates(subject);
                }
                tracing::debug!(enricher = enricher.name(), count = items.len(), "using enriched recommendations");
                RecommendationSet {
                    source: RecommendationSource::Enriched,
                    items,
                }
            }
            Err(EnrichmentError::Disabled) => self.templates(subject),
            Err(e) => {
                tracing::warn!(enricher = enricher.name(), error = %e, "enrichment failed, using templates");
                self.templates(subject)
            }
        }
    }

    fn request_for(&self, subject: Subject<'_>) -> EnrichmentRequest {
        let audience = subject.audience();
        let category = subject.category();
        let bands = subject.bands();
        let max_items = self.selector.cap(audience);

        let scores = match subject {
            Subject::Profile(profile) => ScoreSheet::from_profile(profile).to_json(),
            Subject::Team(lens) => {
                let map = lens
                    .dimensions
                    .iter()
                    .map(|d| {
                        (
                            d.dimension.key().to_string(),
                            serde_json::json!({ "band": d.band, "styleLabel": d.style_label }),
                        )
                    })
                    .collect::<serde_json::Map<_, _>>();
                serde_json::Value::Object(map)
            }
        };

        let prompt = format_enrichment_prompt(audience, category, &scores, &bands, max_items);

        EnrichmentRequest {
            audience,
            category,
            scores,
            bands,
            prompt,
            max_items,
        }
    }

    // Enriched text goes through the same guard, dedup and cap as templates.
    // Phrases naming a dimension outside the subject are dropped.
    fn accept(&self, subject: Subject<'_>, phrases: Vec<EnrichedPhrase>) -> Vec<Recommendation> {
        let bands = subject.bands();
        let cap = self.selector.cap(subject.audience());
        let mut items: Vec<Recommendation> = Vec::new();

        for phrase in phrases {
            if items.len() >= cap {
                break;
            }
            let Some((_, band)) = bands.iter().find(|(d, _)| *d == phrase.dimension) else {
                tracing::debug!(dimension = %phrase.dimension, "enriched phrase for foreign dimension dropped");
                continue;
            };
            let Some(text) = self.selector.guard().apply(&phrase.text) else {
                continue;
            };
            if items.iter().any(|r| r.text == text) {
                continue;
            }
            items.push(Recommendation {
                text,
                source_dimension: phrase.dimension,
                source_band: *band,
                kind: phrase.kind,
            });
        }

        items
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommendationSelector::builtin())
    }
}
