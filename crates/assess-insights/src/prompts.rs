//! Prompt templates for the enrichment service.

use assess_core::{style_label, Band, Category, Dimension};

use crate::templates::Audience;

/// System prompt for individual and team recommendation writing
pub const ENRICHMENT_SYSTEM_PROMPT: &str = r#"You are a workplace coach writing short, practical recommendations from assessment results.

You will receive:
1. The assessment category and audience (an individual or a team)
2. Scores from 0 to 100 per dimension, keyed by dimension name
3. The band of each dimension: lower (0-35), balanced (36-64) or higher (65-100)

Write recommendations that:
- Are one sentence each, under 120 characters
- Start with a verb and describe something concrete to try
- Avoid jargon, clinical labels and buzzwords
- Never judge a band as good or bad

Return a JSON array of objects: {"text": "...", "dimension": "<dimension key>", "kind": "quickWin" | "habit"}"#;

/// Render the user prompt for an enrichment request
pub fn format_enrichment_prompt(
    audience: Audience,
    category: Category,
    scores: &serde_json::Value,
    bands: &[(Dimension, Band)],
    max_items: usize,
) -> String {
    let subject = match audience {
        Audience::Individual => "an individual",
        Audience::Team => "a team",
    };

    let band_lines: Vec<String> = bands
        .iter()
        .map(|(dimension, band)| {
            format!(
                "- {}: {} ({})",
                dimension.key(),
                band,
                style_label(*dimension, *band)
            )
        })
        .collect();

    format!(
        r#"=== {} RESULTS FOR {} ===

Scores:
{}

Bands:
{}

Write at most {} recommendations for {}."#,
        category.name().to_uppercase(),
        subject.to_uppercase(),
        serde_json::to_string_pretty(scores).unwrap_or_else(|_| scores.to_string()),
        band_lines.join("\n"),
        max_items,
        subject
    )
}
