//! # Assess-Scoring
//!
//! Deterministic scoring pipeline from raw Likert answers to profiles and
//! team lenses.
//!
//! ## Pipeline
//!
//! ```text
//! Responses ──► ResponseLedger (last write wins per question)
//!     ↓
//! [Normalizer]   reverse-scored items: (scaleMax + 1) − value
//!     ↓
//! [Aggregator]   per dimension: round(mean / scaleMax × 100), 0 if unanswered
//!     ↓
//! [ProfileBuilder] ──► Profile ──► bands + style labels
//!
//! N Profiles ──► [Team] median per dimension ──► TeamLens
//! ```
//!
//! Every stage is pure; the same inputs always produce the same outputs.

pub mod aggregator;
pub mod engine;
pub mod ledger;
pub mod normalizer;
pub mod profile_builder;
pub mod registry;
pub mod team;

pub use aggregator::*;
pub use engine::*;
pub use ledger::*;
pub use normalizer::*;
pub use profile_builder::*;
pub use registry::*;
pub use team::*;
