//! # Assess-Insights
//!
//! Turns profiles and team lenses into short, guarded recommendation text.
//!
//! ## Flow
//!
//! ```text
//! Profile / TeamLens
//!     ↓
//! [Enricher] (optional, bounded by a timeout)
//!     ↓ error, timeout or nothing usable
//! [RecommendationSelector] ← TemplateTable keyed by (dimension, band, audience)
//!     ↓
//! [StyleGuard] whitespace, jargon denylist, display length
//!     ↓
//! Recommendations (deduplicated, capped)
//! ```
//!
//! The deterministic selector never fails: a gap in the template table
//! only means fewer recommendations.

pub mod enrichment;
pub mod guard;
pub mod prompts;
pub mod recommender;
pub mod selector;
pub mod templates;

pub use enrichment::*;
pub use guard::*;
pub use prompts::*;
pub use recommender::*;
pub use selector::*;
pub use templates::*;
