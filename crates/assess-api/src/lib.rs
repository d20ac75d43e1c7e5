//! # Assess-API
//!
//! Service facade around the scoring engine for the web layer.
//!
//! ## Operations
//!
//! - `submit` - Upsert a respondent's answers for a category
//! - `results` - Profile, bands, style labels and recommendations
//! - `create_team` / `join_team` - Team rosters keyed by short team code
//! - `team_dashboard` - Team lens and recommendations from completed members
//!
//! HTTP routing, persistence and rendering stay with the caller; this crate
//! only shapes engine output into the documented JSON contract.

pub mod config;
pub mod error;
pub mod ids;
pub mod service;
pub mod store;
pub mod telemetry;

pub use self::config::*;
pub use error::*;
pub use ids::*;
pub use service::*;
pub use store::*;
pub use telemetry::*;
